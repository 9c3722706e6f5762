// The plot: a dense row-major array of cells.
//
// Each analysis builds its own Grid; nothing is shared between runs.

use tracing::debug;

use crate::core::{BarrenRectangle, Label, LandError, Location, Result, GRID_COLS, GRID_ROWS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    barren: bool,
    label: Label,
    location: Location,
}

impl Cell {
    fn new(location: Location) -> Self {
        Self { barren: false, label: Label::Unlabeled, location }
    }

    pub fn is_barren(&self) -> bool {
        self.barren
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// Fertile and not yet claimed by a component.
    pub fn is_labelable(&self) -> bool {
        !self.barren && self.label == Label::Unlabeled
    }
}

/// Result of a neighbor lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor<'a> {
    Cell(&'a Cell),
    OutOfBounds,
}

impl Neighbor<'_> {
    /// The out-of-bounds marker behaves like barren land.
    pub fn is_labelable(&self) -> bool {
        match self {
            Neighbor::Cell(cell) => cell.is_labelable(),
            Neighbor::OutOfBounds => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 || rows.checked_mul(cols).is_none() {
            return Err(LandError::InvalidDimensions { rows, cols });
        }
        debug!(rows, cols, "allocating grid");
        Ok(Self::build(rows, cols))
    }

    /// The 400x600 plot.
    pub fn standard() -> Self {
        Self::build(GRID_ROWS, GRID_COLS)
    }

    fn build(rows: usize, cols: usize) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::new(Location::new(row, col)));
            }
        }
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, loc: Location) -> bool {
        loc.row < self.rows && loc.col < self.cols
    }

    fn index(&self, loc: Location) -> usize {
        loc.row * self.cols + loc.col
    }

    pub fn cell(&self, loc: Location) -> Option<&Cell> {
        if !self.contains(loc) { return None; }
        self.cells.get(self.index(loc))
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn barren_count(&self) -> usize {
        self.cells.iter().filter(|c| c.barren).count()
    }

    pub fn fertile_count(&self) -> usize {
        self.len() - self.barren_count()
    }

    /// Marks every cell of the inclusive rectangle barren.
    ///
    /// Inverted or out-of-bounds rectangles are rejected before any cell is
    /// touched, so a rejected rectangle leaves the grid unchanged.
    pub fn mark_barren(&mut self, rect: &BarrenRectangle) -> Result<()> {
        if rect.is_inverted() {
            return Err(LandError::InvertedRectangle { rect: *rect });
        }
        if !rect.fits_within(self.rows, self.cols) {
            return Err(LandError::OutOfBounds { rect: *rect, rows: self.rows, cols: self.cols });
        }

        for row in rect.lower_left.row..=rect.upper_right.row {
            let start = row * self.cols;
            for cell in &mut self.cells[start + rect.lower_left.col..=start + rect.upper_right.col] {
                cell.barren = true;
                cell.label = Label::Barren;
            }
        }
        debug!(%rect, area = rect.area(), "marked barren");
        Ok(())
    }

    pub fn neighbor(&self, loc: Location, row_offset: isize, col_offset: isize) -> Neighbor<'_> {
        match loc.offset(row_offset, col_offset).and_then(|n| self.cell(n)) {
            Some(cell) => Neighbor::Cell(cell),
            None => Neighbor::OutOfBounds,
        }
    }

    /// Claims a fertile, unlabeled cell for `label`. Returns false if the cell
    /// was not eligible.
    pub(crate) fn claim(&mut self, loc: Location, label: u32) -> bool {
        if !self.contains(loc) { return false; }
        let idx = self.index(loc);
        let cell = &mut self.cells[idx];
        if !cell.is_labelable() { return false; }
        cell.label = Label::Component(label);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_sets_locations() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.len(), 12);
        let cell = grid.cell(Location::new(2, 3)).unwrap();
        assert_eq!(cell.location(), Location::new(2, 3));
        assert!(!cell.is_barren());
        assert_eq!(cell.label(), Label::Unlabeled);
        assert!(grid.cell(Location::new(3, 0)).is_none());
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert!(matches!(Grid::new(0, 5), Err(LandError::InvalidDimensions { rows: 0, cols: 5 })));
        assert!(matches!(Grid::new(5, 0), Err(LandError::InvalidDimensions { .. })));
    }

    #[test]
    fn standard_plot() {
        let grid = Grid::standard();
        assert_eq!((grid.rows(), grid.cols()), (400, 600));
        assert_eq!(grid.fertile_count(), 240_000);
        assert_eq!(grid.cell(Location::new(399, 599)).unwrap().location(), Location::new(399, 599));
    }

    #[test]
    fn mark_barren_inclusive() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.mark_barren(&BarrenRectangle::from_coords(1, 1, 2, 3)).unwrap();
        assert_eq!(grid.barren_count(), 6);
        let cell = grid.cell(Location::new(2, 3)).unwrap();
        assert!(cell.is_barren());
        assert_eq!(cell.label(), Label::Barren);
        assert!(!grid.cell(Location::new(3, 3)).unwrap().is_barren());
    }

    #[test]
    fn mark_barren_idempotent() {
        let rect = BarrenRectangle::from_coords(0, 1, 3, 2);
        let mut once = Grid::new(4, 4).unwrap();
        once.mark_barren(&rect).unwrap();
        let mut twice = once.clone();
        twice.mark_barren(&rect).unwrap();
        assert!(once.cells().eq(twice.cells()));
    }

    #[test]
    fn overlapping_rectangles() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.mark_barren(&BarrenRectangle::from_coords(0, 0, 1, 1)).unwrap();
        grid.mark_barren(&BarrenRectangle::from_coords(1, 1, 2, 2)).unwrap();
        assert_eq!(grid.barren_count(), 7);
    }

    #[test]
    fn out_of_bounds_rejected_without_writes() {
        let mut grid = Grid::new(4, 4).unwrap();
        let err = grid.mark_barren(&BarrenRectangle::from_coords(2, 2, 4, 3)).unwrap_err();
        assert!(matches!(err, LandError::OutOfBounds { rows: 4, cols: 4, .. }));
        assert_eq!(grid.barren_count(), 0);

        let err = grid.mark_barren(&BarrenRectangle::from_coords(3, 0, 1, 0)).unwrap_err();
        assert!(matches!(err, LandError::InvertedRectangle { .. }));
        assert_eq!(grid.barren_count(), 0);
    }

    #[test]
    fn neighbor_lookup() {
        let mut grid = Grid::new(2, 2).unwrap();
        let origin = Location::new(0, 0);
        assert_eq!(grid.neighbor(origin, -1, 0), Neighbor::OutOfBounds);
        assert_eq!(grid.neighbor(origin, 0, -1), Neighbor::OutOfBounds);
        assert_eq!(grid.neighbor(Location::new(1, 1), 1, 0), Neighbor::OutOfBounds);
        assert!(!Neighbor::OutOfBounds.is_labelable());
        match grid.neighbor(origin, 1, 0) {
            Neighbor::Cell(cell) => assert_eq!(cell.location(), Location::new(1, 0)),
            Neighbor::OutOfBounds => panic!("(1, 0) is inside a 2x2 grid"),
        }
        assert!(grid.neighbor(origin, 0, 1).is_labelable());

        grid.mark_barren(&BarrenRectangle::from_coords(0, 1, 0, 1)).unwrap();
        assert!(!grid.neighbor(origin, 0, 1).is_labelable());
    }

    #[test]
    fn claim_only_unlabeled_fertile() {
        let mut grid = Grid::new(1, 3).unwrap();
        grid.mark_barren(&BarrenRectangle::from_coords(0, 2, 0, 2)).unwrap();
        assert!(grid.claim(Location::new(0, 0), 1));
        assert!(!grid.claim(Location::new(0, 0), 2));
        assert!(!grid.claim(Location::new(0, 2), 1));
        assert!(!grid.claim(Location::new(5, 5), 1));
        assert_eq!(grid.cell(Location::new(0, 0)).unwrap().label(), Label::Component(1));
    }
}
