use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::LandError;

/// Rows of the plot (the `x` axis of a barren area spec).
pub const GRID_ROWS: usize = 400;
/// Columns of the plot (the `y` axis of a barren area spec).
pub const GRID_COLS: usize = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Applies a signed offset, yielding `None` when the result would go negative.
    pub fn offset(self, row_offset: isize, col_offset: isize) -> Option<Location> {
        let row = self.row.checked_add_signed(row_offset)?;
        let col = self.col.checked_add_signed(col_offset)?;
        Some(Location { row, col })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Inclusive axis-aligned rectangle of barren land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BarrenRectangle {
    pub lower_left: Location,
    pub upper_right: Location,
}

impl BarrenRectangle {
    pub fn new(lower_left: Location, upper_right: Location) -> Self {
        Self { lower_left, upper_right }
    }

    pub fn from_coords(x1: usize, y1: usize, x2: usize, y2: usize) -> Self {
        Self::new(Location::new(x1, y1), Location::new(x2, y2))
    }

    pub fn is_inverted(&self) -> bool {
        self.lower_left.row > self.upper_right.row || self.lower_left.col > self.upper_right.col
    }

    pub fn fits_within(&self, rows: usize, cols: usize) -> bool {
        self.upper_right.row < rows && self.upper_right.col < cols
            && self.lower_left.row < rows && self.lower_left.col < cols
    }

    /// Cell count, saturating at `usize::MAX` for rectangles far outside any grid.
    pub fn area(&self) -> usize {
        if self.is_inverted() { return 0; }
        let height = (self.upper_right.row - self.lower_left.row).saturating_add(1);
        let width = (self.upper_right.col - self.lower_left.col).saturating_add(1);
        height.saturating_mul(width)
    }
}

impl fmt::Display for BarrenRectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.lower_left.row, self.lower_left.col, self.upper_right.row, self.upper_right.col
        )
    }
}

/// Parses `x1 y1 x2 y2`. Bounds are checked later, against the grid.
impl FromStr for BarrenRectangle {
    type Err = LandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() != 4 {
            return Err(LandError::parse(
                s,
                format!("expected 4 integers, found {} token(s)", tokens.len()),
            ));
        }

        let mut coords = [0usize; 4];
        for (slot, token) in coords.iter_mut().zip(&tokens) {
            let value: i64 = token
                .parse()
                .map_err(|_| LandError::parse(s, format!("{:?} is not an integer", token)))?;
            if value < 0 {
                return Err(LandError::parse(s, format!("coordinate {} is negative", value)));
            }
            *slot = usize::try_from(value)
                .map_err(|_| LandError::parse(s, format!("coordinate {} is too large", value)))?;
        }

        Ok(Self::from_coords(coords[0], coords[1], coords[2], coords[3]))
    }
}

/// Component tag carried by every cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Label {
    #[default]
    Unlabeled,
    Barren,
    Component(u32),
}

impl Label {
    /// Integer encoding: 0 unlabeled, -1 barren, n > 0 component.
    pub fn raw(self) -> i64 {
        match self {
            Label::Unlabeled => 0,
            Label::Barren => -1,
            Label::Component(n) => n as i64,
        }
    }

    pub fn component(self) -> Option<u32> {
        match self {
            Label::Component(n) => Some(n),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quadruple() {
        let rect: BarrenRectangle = "0 292 399 307".parse().unwrap();
        assert_eq!(rect.lower_left, Location::new(0, 292));
        assert_eq!(rect.upper_right, Location::new(399, 307));
        assert_eq!(rect.to_string(), "0 292 399 307");
    }

    #[test]
    fn parse_tolerates_surrounding_whitespace() {
        let rect: BarrenRectangle = "  48 192\t351 207\r\n".parse().unwrap();
        assert_eq!(rect, BarrenRectangle::from_coords(48, 192, 351, 207));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!("abc".parse::<BarrenRectangle>(), Err(LandError::Parse { .. })));
        assert!(matches!("1 2 3".parse::<BarrenRectangle>(), Err(LandError::Parse { .. })));
        assert!(matches!("1 2 3 4 5".parse::<BarrenRectangle>(), Err(LandError::Parse { .. })));
        assert!(matches!("1 2 x 4".parse::<BarrenRectangle>(), Err(LandError::Parse { .. })));
        assert!(matches!("-1 2 3 4".parse::<BarrenRectangle>(), Err(LandError::Parse { .. })));
    }

    #[test]
    fn area_and_inversion() {
        let rect = BarrenRectangle::from_coords(2, 3, 4, 5);
        assert_eq!(rect.area(), 9);
        assert!(!rect.is_inverted());
        assert_eq!(BarrenRectangle::from_coords(4, 3, 2, 5).area(), 0);
        assert!(BarrenRectangle::from_coords(4, 3, 2, 5).is_inverted());
    }

    #[test]
    fn huge_parsed_rectangle_area_saturates() {
        let rect: BarrenRectangle = "0 0 9223372036854775807 9223372036854775807".parse().unwrap();
        assert_eq!(rect.area(), usize::MAX);
        assert!(!rect.fits_within(GRID_ROWS, GRID_COLS));

        let full = BarrenRectangle::from_coords(0, 0, usize::MAX, 0);
        assert_eq!(full.area(), usize::MAX);
    }

    #[test]
    fn offset_stops_at_zero() {
        let loc = Location::new(0, 5);
        assert_eq!(loc.offset(-1, 0), None);
        assert_eq!(loc.offset(1, -1), Some(Location::new(1, 4)));
    }

    #[test]
    fn label_encoding() {
        assert_eq!(Label::default().raw(), 0);
        assert_eq!(Label::Barren.raw(), -1);
        assert_eq!(Label::Component(7).raw(), 7);
        assert_eq!(Label::Component(7).component(), Some(7));
        assert_eq!(Label::Barren.component(), None);
    }
}
