use crate::*;

/// Step of the two-pick selection protocol, each phase carries the picks made so far.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    SelectFrom,
    SelectTo { from: Position },
    ReadyToMove { from: Position, to: Position },
}

impl Phase {
    pub const fn is_ready_to_move(self) -> bool {
        matches!(self, Self::ReadyToMove { .. })
    }

    pub const fn source(self) -> Option<Position> {
        match self {
            Self::SelectFrom => None,
            Self::SelectTo { from } | Self::ReadyToMove { from, .. } => Some(from),
        }
    }

    pub const fn destination(self) -> Option<Position> {
        match self {
            Self::ReadyToMove { to, .. } => Some(to),
            _ => None,
        }
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::SelectFrom
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PhaseChange {
    pub previous: Phase,
    pub current: Phase,
}

/// Outcome of a single pick
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// A movable piece was picked as the source.
    Source,
    /// A legal destination was picked, the move is ready to commit.
    Destination,
    /// The pick was not acceptable in the current phase, nothing changed.
    Rejected,
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        use SelectOutcome::*;
        match self {
            Source => true,
            Destination => true,
            Rejected => false,
        }
    }
}

/// Turns a sequence of position picks into validated moves.
///
/// The selector does not own the board, it is passed in on every call that needs it, so the
/// board stays readable by renderers while a selection is in progress.
#[derive(Debug, Default)]
pub struct MoveSelector {
    phase: Phase,
    invalid_selection: bool,
    listeners: Listeners<PhaseChange>,
}

impl MoveSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_ready_to_move(&self) -> bool {
        self.phase.is_ready_to_move()
    }

    /// Whether the most recent pick was rejected.
    pub fn is_invalid_selection(&self) -> bool {
        self.invalid_selection
    }

    pub fn from(&self) -> Result<Position, SelectorError> {
        self.phase.source().ok_or(SelectorError::NoSourceSelected)
    }

    pub fn to(&self) -> Result<Position, SelectorError> {
        self.phase.destination().ok_or(SelectorError::NoDestinationSelected)
    }

    pub fn select<C: CellLabel>(
        &mut self,
        board: &Board<C>,
        pos: Position,
    ) -> Result<SelectOutcome, SelectorError> {
        let (next, outcome) = match self.phase {
            Phase::SelectFrom if board.can_pick(pos) => {
                (Phase::SelectTo { from: pos }, SelectOutcome::Source)
            }
            Phase::SelectTo { from } if board.can_move(from, pos) => (
                Phase::ReadyToMove { from, to: pos },
                SelectOutcome::Destination,
            ),
            Phase::SelectFrom | Phase::SelectTo { .. } => {
                log::trace!("Rejected pick {} in phase {:?}", pos, self.phase);
                self.invalid_selection = true;
                return Ok(SelectOutcome::Rejected);
            }
            Phase::ReadyToMove { .. } => return Err(SelectorError::SelectWhileReady),
        };

        log::debug!("Accepted pick {} as {:?}", pos, outcome);
        self.invalid_selection = false;
        self.set_phase(next);
        Ok(outcome)
    }

    /// Applies the selected move to `board` and starts over.
    pub fn make_move<C: CellLabel>(
        &mut self,
        board: &mut Board<C>,
    ) -> Result<(Position, Position), SelectorError> {
        let Phase::ReadyToMove { from, to } = self.phase else {
            return Err(SelectorError::NotReadyToMove);
        };
        board.move_piece(from, to);
        self.reset();
        Ok((from, to))
    }

    /// Drops any picks made so far, callable from every phase.
    pub fn reset(&mut self) {
        self.invalid_selection = false;
        self.set_phase(Phase::SelectFrom);
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&PhaseChange) + 'static) -> SubscriptionId {
        self.listeners.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn set_phase(&mut self, next: Phase) {
        let previous = self.phase;
        if previous == next {
            return;
        }
        self.phase = next;
        self.listeners.notify(&PhaseChange {
            previous,
            current: next,
        });
    }
}
