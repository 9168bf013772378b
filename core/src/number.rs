//! Number puzzle: digits slide orthogonally through the gaps of a partially blocked board.

use serde::{Deserialize, Serialize};

use crate::*;

pub const ROWS: Coord = 2;
pub const COLS: Coord = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberTile {
    Empty,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    /// Part of the board, but never usable.
    Blocked,
}

impl NumberTile {
    pub const DIGITS: [Self; 9] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
    ];
}

impl CellLabel for NumberTile {
    const EMPTY: Self = Self::Empty;

    fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }

    fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Blocked => '#',
            Self::One => '1',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
        }
    }
}

fn initial_tile(pos: Position) -> NumberTile {
    use NumberTile::*;
    match (pos.row, pos.col) {
        (0, 0 | 1 | 2 | 4 | 6 | 8 | 9) => Blocked,
        (1, 1) => Two,
        (1, 2) => Three,
        (1, 3) => Four,
        (1, 4) => Five,
        (1, 5) => Six,
        (1, 6) => Seven,
        (1, 7) => Eight,
        (1, 8) => Nine,
        (1, 9) => One,
        _ => Empty,
    }
}

/// The 2x10 starting board: the one sits at the far right and has to travel to the front.
pub fn board() -> Board<NumberTile> {
    let cells = ndarray::Array2::from_shape_fn([ROWS as usize, COLS as usize], |(row, col)| {
        initial_tile(Position::new(row as Coord, col as Coord))
    });
    Board::from_cells(cells, StepRule::Orthogonal)
}

/// Whether the bottom row reads one to nine from the second column onwards.
pub fn is_solved(board: &Board<NumberTile>) -> bool {
    NumberTile::DIGITS
        .iter()
        .zip(1..)
        .all(|(&digit, col)| board.get(Position::new(ROWS - 1, col)) == Some(digit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn starting_board_matches_puzzle() {
        let board = board();

        assert_eq!(
            board.to_string(),
            "# # # . # . # . # # \n. 2 3 4 5 6 7 8 9 1 \n"
        );
        assert_eq!(board.count(NumberTile::Blocked), 7);
        assert!(NumberTile::DIGITS.iter().all(|&digit| board.count(digit) == 1));
    }

    #[test]
    fn every_tile_has_its_own_symbol() {
        let symbols: alloc::string::String = [NumberTile::Empty, NumberTile::Blocked]
            .into_iter()
            .chain(NumberTile::DIGITS)
            .map(NumberTile::symbol)
            .collect();

        assert_eq!(symbols, ".#123456789");
    }

    #[test]
    fn blocked_cells_cannot_be_picked() {
        let board = board();

        assert!(!board.can_pick(Position::new(0, 0)));
        assert!(!board.can_pick(Position::new(0, 3)));
        assert!(board.can_pick(Position::new(1, 9)));
    }

    #[test]
    fn starting_board_is_not_solved() {
        assert!(!is_solved(&board()));
    }

    #[test]
    fn ordered_bottom_row_is_solved() {
        let start = board().snapshot();
        let solved = Board::try_from(Layout {
            step: StepRule::Orthogonal,
            rows: alloc::vec![
                start.rows[0].clone(),
                [NumberTile::Empty]
                    .into_iter()
                    .chain(NumberTile::DIGITS)
                    .collect(),
            ],
        })
        .unwrap();

        assert!(is_solved(&solved));
    }
}
