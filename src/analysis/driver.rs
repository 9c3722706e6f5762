// Analysis driver: specs in, fertile component sizes out (largest first).

use std::io::{BufRead, Write};

use tracing::{info, warn};

use super::input::{parse_barren_area, read_interactive};
use super::report::{AnalysisReport, ComponentSummary, RejectedSpec};
use crate::core::{LandError, Result};
use crate::land::{find_components, verify_labeling, Grid};
use crate::sort::merge_sort_by;

/// Sizes of all fertile components, largest first.
pub fn analyze<S: AsRef<str>>(specs: &[S]) -> Result<Vec<usize>> {
    analyze_report(specs).map(|report| report.sizes)
}

pub fn analyze_report<S: AsRef<str>>(specs: &[S]) -> Result<AnalysisReport> {
    let mut grid = Grid::standard();
    let mut rectangles = Vec::new();
    let mut rejected = Vec::new();

    for spec in specs {
        let spec = spec.as_ref();
        let applied = parse_barren_area(spec).and_then(|rect| grid.mark_barren(&rect).map(|()| rect));
        match applied {
            Ok(rect) => rectangles.push(rect),
            Err(err) if err.is_recoverable() => {
                warn!(input = spec, error = %err, "skipping barren area");
                rejected.push(RejectedSpec { input: spec.to_string(), reason: err.to_string() });
            }
            Err(err) => return Err(err),
        }
    }

    let components = find_components(&mut grid)?;
    if cfg!(debug_assertions) {
        verify_labeling(&grid, &components)?;
    }

    let summaries = components
        .iter()
        .map(|c| {
            ComponentSummary::from_component(c).ok_or_else(|| {
                LandError::InternalConsistency(format!("component {} has no cells", c.label))
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let sizes: Vec<usize> = components.iter().map(|c| c.size()).collect();
    let sizes = merge_sort_by(&sizes, &mut |a: &usize, b: &usize| b.cmp(a));

    info!(
        applied = rectangles.len(),
        rejected = rejected.len(),
        components = sizes.len(),
        "analysis complete"
    );

    Ok(AnalysisReport::new(
        rectangles,
        rejected,
        summaries,
        sizes,
        grid.barren_count(),
        grid.fertile_count(),
    ))
}

/// Prompts for barren areas on `writer`, reads them from `reader`, then analyzes.
pub fn analyze_interactive<R: BufRead, W: Write>(reader: R, writer: W) -> Result<AnalysisReport> {
    let specs = read_interactive(reader, writer)?;
    analyze_report(&specs)
}
