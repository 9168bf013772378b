use core::fmt::Debug;

/// Content that can occupy a board cell.
///
/// Each game supplies its own closed enum. Exactly one value is designated as empty, games with
/// obstacles additionally report which values are blocked.
pub trait CellLabel: Copy + Eq + Debug + 'static {
    const EMPTY: Self;

    fn is_empty(self) -> bool {
        self == Self::EMPTY
    }

    fn is_blocked(self) -> bool {
        false
    }

    /// Single character used for the textual board rendering.
    fn symbol(self) -> char;
}
