//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// No network worker is attached to the state
    #[error("Network worker is not available")]
    NetworkUnavailable,

    /// Network worker stopped receiving events
    #[error("Failed to dispatch network event: {0}")]
    DispatchFailed(String),
}
