//! Two-sided pawn game on a square board, pawns step to any of the eight neighbors.

use serde::{Deserialize, Serialize};

use crate::*;

/// Default edge length of the pawn board.
pub const SIZE: Coord = 5;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pawn {
    Empty,
    Red,
    Blue,
}

impl CellLabel for Pawn {
    const EMPTY: Self = Self::Empty;

    fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Red => 'R',
            Self::Blue => 'B',
        }
    }
}

/// Red pawns fill the first row, blue pawns the last one.
pub fn board(size: Coord) -> Result<Board<Pawn>, LayoutError> {
    Board::from_fn((size, size), StepRule::Adjacent, |pos| match pos.row {
        0 => Pawn::Red,
        row if row == size - 1 => Pawn::Blue,
        _ => Pawn::Empty,
    })
}
