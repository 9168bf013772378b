use thiserror::Error;

/// Protocol violations of the two-step selection, these are caller bugs.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("Selection is complete, the move must be committed or reset first")]
    SelectWhileReady,
    #[error("No source position has been selected yet")]
    NoSourceSelected,
    #[error("No destination position has been selected yet")]
    NoDestinationSelected,
    #[error("Selection is not ready to move")]
    NotReadyToMove,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Layout has no cells")]
    Empty,
    #[error("Layout row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Layout is too large for the board coordinates")]
    TooLarge,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Selector(#[from] SelectorError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

pub type Result<T, E = GameError> = core::result::Result<T, E>;
