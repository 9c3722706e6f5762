// Fertile component discovery.
//
// Row-major scan; every unlabeled fertile cell seeds a breadth-first flood
// fill that claims its whole 4-connected region. The queue keeps traversal
// depth independent of region size.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use tracing::{debug, error};

use super::grid::{Grid, Neighbor};
use crate::core::{Label, LandError, Location, Result};

/// Down, up, right, left.
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FertileComponent {
    pub label: u32,
    /// Cells in the order the flood fill reached them; the seed comes first.
    pub cells: Vec<Location>,
}

impl FertileComponent {
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn seed(&self) -> Option<Location> {
        self.cells.first().copied()
    }
}

#[tracing::instrument(skip_all, fields(rows = grid.rows(), cols = grid.cols()))]
pub fn find_components(grid: &mut Grid) -> Result<Vec<FertileComponent>> {
    let mut components = Vec::new();
    let mut next_label: u32 = 1;

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let loc = Location::new(row, col);
            let eligible = grid.cell(loc).map(|c| c.is_labelable()).unwrap_or(false);
            if !eligible { continue; }

            let component = flood_fill(grid, loc, next_label)?;
            debug!(label = next_label, size = component.size(), seed = %loc, "found fertile component");
            components.push(component);
            next_label = next_label.checked_add(1).ok_or_else(|| {
                LandError::InternalConsistency("component label space exhausted".into())
            })?;
        }
    }

    Ok(components)
}

fn flood_fill(grid: &mut Grid, seed: Location, label: u32) -> Result<FertileComponent> {
    let limit = grid.len();
    if !grid.claim(seed, label) {
        return Err(inconsistency(format!("seed {} of component {} could not be claimed", seed, label)));
    }

    let mut cells = vec![seed];
    let mut queue = VecDeque::from([seed]);

    while let Some(current) = queue.pop_front() {
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let next = match grid.neighbor(current, dr, dc) {
                Neighbor::Cell(cell) if cell.is_labelable() => cell.location(),
                _ => continue,
            };
            if !grid.claim(next, label) {
                return Err(inconsistency(format!("cell {} changed under component {}", next, label)));
            }
            cells.push(next);
            if cells.len() > limit {
                return Err(inconsistency(format!(
                    "component {} grew past {} cells, the size of the whole grid",
                    label, limit
                )));
            }
            queue.push_back(next);
        }
    }

    Ok(FertileComponent { label, cells })
}

fn inconsistency(msg: String) -> LandError {
    error!(%msg, "labeling defect");
    LandError::InternalConsistency(msg)
}

/// Audits a finished scan: every fertile cell belongs to exactly one listed
/// component, and no two components touch.
pub fn verify_labeling(grid: &Grid, components: &[FertileComponent]) -> Result<()> {
    let mut sizes: FxHashMap<u32, usize> = FxHashMap::default();
    for comp in components {
        if sizes.insert(comp.label, comp.size()).is_some() {
            return Err(LandError::InternalConsistency(format!("label {} used twice", comp.label)));
        }
    }

    let mut seen: FxHashSet<Location> = FxHashSet::default();
    for comp in components {
        for &loc in &comp.cells {
            if !seen.insert(loc) {
                return Err(LandError::InternalConsistency(format!("cell {} listed twice", loc)));
            }
            let label = grid.cell(loc).map(|c| c.label());
            if label != Some(Label::Component(comp.label)) {
                return Err(LandError::InternalConsistency(format!(
                    "cell {} listed in component {} but labeled {:?}",
                    loc, comp.label, label
                )));
            }
        }
    }

    for cell in grid.cells() {
        let loc = cell.location();
        match cell.label() {
            Label::Barren if cell.is_barren() => continue,
            Label::Component(own) if !cell.is_barren() => {
                if !seen.contains(&loc) {
                    return Err(LandError::InternalConsistency(format!(
                        "cell {} labeled {} but missing from its component",
                        loc, own
                    )));
                }
                // Right and down cover every adjacent pair once.
                for (dr, dc) in [(0, 1), (1, 0)] {
                    if let Neighbor::Cell(other) = grid.neighbor(loc, dr, dc) {
                        if let Some(theirs) = other.label().component() {
                            if theirs != own {
                                return Err(LandError::InternalConsistency(format!(
                                    "components {} and {} touch at {} / {}",
                                    own, theirs, loc, other.location()
                                )));
                            }
                        }
                    }
                }
            }
            other => {
                return Err(LandError::InternalConsistency(format!(
                    "cell {} left as {:?} (barren: {})",
                    loc, other, cell.is_barren()
                )));
            }
        }
    }

    Ok(())
}
