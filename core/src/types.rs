use core::fmt;
use serde::{Deserialize, Serialize};

/// Single coordinate axis, signed so that clicks left of or above the board stay representable.
pub type Coord = i16;

/// An immutable `(row, col)` board coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: Coord,
    pub col: Coord,
}

impl Position {
    pub const fn new(row: Coord, col: Coord) -> Self {
        Self { row, col }
    }

    /// Absolute row and column distance to `other`.
    pub const fn delta(self, other: Self) -> (u32, u32) {
        (
            self.row.abs_diff(other.row) as u32,
            self.col.abs_diff(other.col) as u32,
        )
    }
}

impl From<(Coord, Coord)> for Position {
    fn from((row, col): (Coord, Coord)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Which destinations count as one step away from a source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepRule {
    /// Up, down, left or right by one cell.
    Orthogonal,
    /// Any of the eight surrounding cells, diagonals included.
    Adjacent,
}

impl StepRule {
    pub const fn is_legal_step(self, from: Position, to: Position) -> bool {
        let (drow, dcol) = from.delta(to);
        match self {
            Self::Orthogonal => drow + dcol == 1,
            Self::Adjacent => drow + dcol == 1 || drow * dcol == 1,
        }
    }
}

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Position {
    type Output = Option<[usize; 2]>;

    /// Fails for negative coordinates only, bounds are checked against the array.
    fn to_nd_index(self) -> Self::Output {
        Some([self.row.try_into().ok()?, self.col.try_into().ok()?])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Position = Position::new(2, 2);

    #[test]
    fn orthogonal_rule_rejects_diagonals_and_jumps() {
        let rule = StepRule::Orthogonal;

        assert!(rule.is_legal_step(CENTER, Position::new(1, 2)));
        assert!(rule.is_legal_step(CENTER, Position::new(2, 3)));
        assert!(!rule.is_legal_step(CENTER, Position::new(3, 3)));
        assert!(!rule.is_legal_step(CENTER, Position::new(2, 4)));
        assert!(!rule.is_legal_step(CENTER, CENTER));
    }

    #[test]
    fn adjacent_rule_accepts_all_eight_neighbors() {
        let rule = StepRule::Adjacent;
        let mut legal = 0;
        for row in 0..5 {
            for col in 0..5 {
                if rule.is_legal_step(CENTER, Position::new(row, col)) {
                    legal += 1;
                }
            }
        }

        assert_eq!(legal, 8);
        assert!(!rule.is_legal_step(CENTER, Position::new(0, 1)));
    }

    #[test]
    fn negative_positions_have_no_nd_index() {
        assert_eq!(Position::new(-1, 0).to_nd_index(), None);
        assert_eq!(Position::new(1, 3).to_nd_index(), Some([1, 3]));
    }
}
