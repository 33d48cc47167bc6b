/// Error type of this crate.
///
/// Both variants denote a broken protocol in the surrounding engine, and
/// should be treated as fatal by the owning debug session.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A transition observed a stop state it doesn't handle.
    #[error("Invariant violation: {operation} observed stop state {}", crate::state::describe_raw(.state))]
    InvariantViolation {
        /// Name of the failing operation.
        operation: &'static str,

        /// Raw value of the observed stop state.
        state: u8,
    },

    /// A synthetic stop completion was required, but no stopping event
    /// thread was ever recorded.
    #[error("Missing origin thread for synthetic stop completion")]
    MissingOriginThread,
}

/// Result type of this crate.
pub type Result<T> = core::result::Result<T, Error>;
