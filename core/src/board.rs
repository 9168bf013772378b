use core::fmt;
use ndarray::Array2;

use crate::*;

/// Notification delivered to board listeners after a cell's content changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellChange<C> {
    pub position: Position,
    pub previous: C,
    pub current: C,
}

/// Fixed-size grid of cell contents and the single source of truth for move legality.
///
/// The board is only ever mutated through [`Board::move_piece`], every other method is a read.
pub struct Board<C: CellLabel> {
    cells: Array2<C>,
    step: StepRule,
    listeners: Listeners<CellChange<C>>,
}

impl<C: CellLabel> Board<C> {
    /// Builds a `rows` x `cols` board whose initial content is a pure function of the position.
    pub fn from_fn(
        (rows, cols): (Coord, Coord),
        step: StepRule,
        mut init: impl FnMut(Position) -> C,
    ) -> Result<Self, LayoutError> {
        if rows <= 0 || cols <= 0 {
            return Err(LayoutError::Empty);
        }
        let cells = Array2::from_shape_fn([rows as usize, cols as usize], |(row, col)| {
            init(Position::new(row as Coord, col as Coord))
        });
        Ok(Self::from_cells(cells, step))
    }

    pub(crate) fn from_cells(cells: Array2<C>, step: StepRule) -> Self {
        Self {
            cells,
            step,
            listeners: Listeners::new(),
        }
    }

    pub fn step_rule(&self) -> StepRule {
        self.step
    }

    /// Number of rows and columns.
    pub fn size(&self) -> (Coord, Coord) {
        let (rows, cols) = self.cells.dim();
        // Layout validation keeps both dimensions within `Coord`.
        (rows as Coord, cols as Coord)
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<C> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    pub fn is_on_board(&self, pos: Position) -> bool {
        let (rows, cols) = self.size();
        0 <= pos.row && pos.row < rows && 0 <= pos.col && pos.col < cols
    }

    /// Content at `pos`, or `None` when the position is off the board.
    pub fn get(&self, pos: Position) -> Option<C> {
        self.cells.get(pos.to_nd_index()?).copied()
    }

    /// Content at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board. Check [`Board::is_on_board`] first or use
    /// [`Board::get`].
    pub fn cell_at(&self, pos: Position) -> C {
        match self.get(pos) {
            Some(cell) => cell,
            None => {
                let (rows, cols) = self.size();
                panic!("position {pos} is outside the {rows}x{cols} board")
            }
        }
    }

    /// # Panics
    ///
    /// Panics if `pos` is off the board.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell_at(pos).is_empty()
    }

    /// # Panics
    ///
    /// Panics if `pos` is off the board.
    pub fn is_blocked(&self, pos: Position) -> bool {
        self.cell_at(pos).is_blocked()
    }

    pub fn is_legal_step(&self, from: Position, to: Position) -> bool {
        self.step.is_legal_step(from, to)
    }

    /// Whether `pos` holds a piece that may be picked up as a move source.
    pub fn can_pick(&self, pos: Position) -> bool {
        self.is_on_board(pos) && !self.is_empty(pos) && !self.is_blocked(pos)
    }

    pub fn can_move(&self, from: Position, to: Position) -> bool {
        self.is_on_board(from)
            && self.is_on_board(to)
            && !self.is_empty(from)
            && self.is_empty(to)
            && self.is_legal_step(from, to)
            && !self.is_blocked(from)
            && !self.is_blocked(to)
    }

    /// Moves the content of `from` to `to` and empties `from`, without any legality check.
    ///
    /// Listeners are notified after both cells were written, destination first.
    ///
    /// # Panics
    ///
    /// Panics if either position is off the board.
    pub fn move_piece(&mut self, from: Position, to: Position) {
        let moved = self.cell_at(from);
        let replaced = self.cell_at(to);
        self.set(to, moved);
        self.set(from, C::EMPTY);
        log::debug!("Moved {:?} from {} to {}", moved, from, to);

        self.listeners.notify(&CellChange {
            position: to,
            previous: replaced,
            current: moved,
        });
        self.listeners.notify(&CellChange {
            position: from,
            previous: moved,
            current: C::EMPTY,
        });
    }

    /// Number of cells currently holding `cell`.
    pub fn count(&self, cell: C) -> usize {
        self.cells.iter().filter(|&&other| other == cell).count()
    }

    /// Listens to changes of every cell.
    pub fn subscribe(&mut self, callback: impl FnMut(&CellChange<C>) + 'static) -> SubscriptionId {
        self.listeners.subscribe(callback)
    }

    /// Listens to changes of the cell at `pos` only.
    pub fn subscribe_cell(
        &mut self,
        pos: Position,
        mut callback: impl FnMut(&CellChange<C>) + 'static,
    ) -> SubscriptionId {
        self.listeners.subscribe(move |change: &CellChange<C>| {
            if change.position == pos {
                callback(change);
            }
        })
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Current content as a layout that rebuilds an identical board.
    pub fn snapshot(&self) -> Layout<C> {
        Layout {
            step: self.step,
            rows: self.cells.rows().into_iter().map(|row| row.to_vec()).collect(),
        }
    }

    fn set(&mut self, pos: Position, cell: C) {
        if let Some(slot) = pos.to_nd_index().and_then(|index| self.cells.get_mut(index)) {
            *slot = cell;
        }
    }
}

impl<C: CellLabel> fmt::Display for Board<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                write!(f, "{} ", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<C: CellLabel> fmt::Debug for Board<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("cells", &self.cells)
            .field("step", &self.step)
            .field("listeners", &self.listeners)
            .finish()
    }
}
