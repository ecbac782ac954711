// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Error types for the cursor list and the compressed table.

/// Error returned when a cursor list operation's precondition does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The list has no nodes.
    #[error("Empty list, cannot {action}")]
    Empty {
        /// What the caller was trying to do.
        action: &'static str,
    },

    /// The cursor is off the left or right end of the list.
    #[error("Current is off list")]
    OffList,

    /// `retreat` was called while already off the left end.
    #[error("Current is already off left, cannot move it further")]
    AlreadyOffLeft,

    /// `advance` was called while already off the right end.
    #[error("Current is already off right, cannot move it further")]
    AlreadyOffRight,

    /// The cursor has not been placed since the list was created or cleared.
    #[error("Current has not been positioned")]
    Unpositioned,
}

/// Error returned by table mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A cursor list operation failed underneath the table.
    #[error(transparent)]
    List(#[from] ListError),

    /// No run covers `(row, col)`, or the run after it shares its value.
    /// The run sequence is left untouched when this is returned.
    #[error("corrupt run sequence around cell ({row}, {col})")]
    CorruptRuns { row: usize, col: usize },
}
