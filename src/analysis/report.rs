use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::core::{BarrenRectangle, Location};
use crate::land::FertileComponent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentSummary {
    pub label: u32,
    pub size: usize,
    pub seed: Location,
}

impl ComponentSummary {
    pub fn from_component(component: &FertileComponent) -> Option<Self> {
        Some(Self {
            label: component.label,
            size: component.size(),
            seed: component.seed()?,
        })
    }
}

/// A barren area spec that was skipped, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedSpec {
    pub input: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub rectangles: Vec<BarrenRectangle>,
    pub rejected: Vec<RejectedSpec>,
    /// In discovery order.
    pub components: Vec<ComponentSummary>,
    /// Largest first.
    pub sizes: Vec<usize>,
    pub barren_cells: usize,
    pub fertile_cells: usize,
    #[serde(skip)]
    by_label: FxHashMap<u32, usize>,
}

impl AnalysisReport {
    pub fn new(
        rectangles: Vec<BarrenRectangle>,
        rejected: Vec<RejectedSpec>,
        components: Vec<ComponentSummary>,
        sizes: Vec<usize>,
        barren_cells: usize,
        fertile_cells: usize,
    ) -> Self {
        let by_label = components.iter().map(|c| (c.label, c.size)).collect();
        Self { rectangles, rejected, components, sizes, barren_cells, fertile_cells, by_label }
    }

    pub fn size_of(&self, label: u32) -> Option<usize> {
        self.by_label.get(&label).copied()
    }

    pub fn sizes_line(&self) -> String {
        self.sizes.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(" ")
    }

    pub fn detail(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Barren Land Analysis ===\n");
        out.push_str(&format!(
            "Barren areas: {} applied | {} rejected\n",
            self.rectangles.len(),
            self.rejected.len()
        ));
        out.push_str(&format!("Cells: {} barren | {} fertile\n", self.barren_cells, self.fertile_cells));
        for r in &self.rejected {
            out.push_str(&format!("  [--] {:?}: {}\n", r.input, r.reason));
        }
        out.push_str(&format!("\nComponents ({}):\n", self.components.len()));
        for c in &self.components {
            out.push_str(&format!("  #{} size={} seed={}\n", c.label, c.size, c.seed));
        }
        out.push_str(&format!("\nSizes: {}", self.sizes_line()));
        out
    }
}
