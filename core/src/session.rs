use crate::*;

/// Result of feeding one click through [`Session::click`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Rejected,
    Selected(Position),
    Moved { from: Position, to: Position },
}

impl ClickOutcome {
    /// Whether the board content changed.
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// One game session: a board, the selector driving it and a tally of committed moves.
#[derive(Debug)]
pub struct Session<C: CellLabel> {
    board: Board<C>,
    selector: MoveSelector,
    moves: u32,
}

impl<C: CellLabel> Session<C> {
    pub fn new(board: Board<C>) -> Self {
        Self {
            board,
            selector: MoveSelector::new(),
            moves: 0,
        }
    }

    pub fn board(&self) -> &Board<C> {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board<C> {
        &mut self.board
    }

    pub fn selector(&self) -> &MoveSelector {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut MoveSelector {
        &mut self.selector
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Selects `pos` and commits the move as soon as both ends are picked.
    pub fn click(&mut self, pos: Position) -> Result<ClickOutcome, SelectorError> {
        match self.selector.select(&self.board, pos)? {
            SelectOutcome::Rejected => Ok(ClickOutcome::Rejected),
            SelectOutcome::Source => Ok(ClickOutcome::Selected(pos)),
            SelectOutcome::Destination => {
                let (from, to) = self.selector.make_move(&mut self.board)?;
                self.moves += 1;
                log::debug!("Move {} committed: {} -> {}", self.moves, from, to);
                Ok(ClickOutcome::Moved { from, to })
            }
        }
    }

    /// Abandons a half-made selection.
    pub fn cancel(&mut self) {
        self.selector.reset();
    }

    pub fn into_board(self) -> Board<C> {
        self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: Coord, col: Coord) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn click_commits_on_second_pick() {
        let mut session = Session::new(pawn::board(5).unwrap());

        assert_eq!(session.click(pos(4, 2)), Ok(ClickOutcome::Selected(pos(4, 2))));
        assert_eq!(
            session.click(pos(3, 1)),
            Ok(ClickOutcome::Moved {
                from: pos(4, 2),
                to: pos(3, 1),
            })
        );
        assert_eq!(session.moves(), 1);
        assert_eq!(session.board().cell_at(pos(3, 1)), Pawn::Blue);
        assert_eq!(session.selector().phase(), Phase::SelectFrom);
    }

    #[test]
    fn cancel_drops_half_made_selection() {
        let mut session = Session::new(number::board());
        session.click(pos(1, 3)).unwrap();

        session.cancel();

        assert_eq!(session.selector().phase(), Phase::SelectFrom);
        assert_eq!(session.click(pos(0, 3)), Ok(ClickOutcome::Rejected));
        assert_eq!(session.moves(), 0);
    }

    #[test]
    fn click_never_leaves_selector_ready() {
        let mut session = Session::new(number::board());

        for (row, col) in [(1, 9), (0, 9), (1, 8), (1, 9), (1, 8), (0, 8), (0, 7)] {
            session.click(pos(row, col)).unwrap();
            assert!(!session.selector().is_ready_to_move());
        }

        session.cancel();
        session.click(pos(1, 7)).unwrap();
        assert!(session.click(pos(0, 7)).unwrap().has_update());
        assert!(!session.selector().is_ready_to_move());
        assert_eq!(session.moves(), 1);
    }
}
