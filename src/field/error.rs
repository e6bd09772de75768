//! Soft validation states for the field builder.
//!
//! None of these are failures in the usual sense. They are returned as values
//! to drive hint text and the enabled state of the add/save actions, and their
//! `Display` output is the message shown to the user.

use super::choices::{MAX_CHOICES, MAX_CHOICE_LENGTH};
use super::form::ValidationErrors;

/// Reasons a candidate choice cannot be added.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ChoiceRejection {
    /// Candidate is empty once trimmed
    #[error("Enter a choice")]
    Empty,

    /// Candidate is longer than the per-item limit once trimmed
    #[error("Name is too long (max {} characters)", MAX_CHOICE_LENGTH)]
    TooLong,

    /// Candidate already exists (exact, case-sensitive match)
    #[error("Item already exists")]
    Duplicate,

    /// List already holds the maximum number of choices
    #[error("Maximum choices reached (max {} items)", MAX_CHOICES)]
    CapacityReached,
}

/// Field-level validation errors that block submission.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum FieldError {
    #[error("Label is required")]
    LabelRequired,

    #[error("Choices are required")]
    ChoicesRequired,
}

/// Reasons a submission did not start.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejection {
    /// The definition failed validation
    #[error("Field definition is invalid: {0}")]
    Invalid(ValidationErrors),

    /// A submission is already outstanding
    #[error("A submission is already in progress")]
    InProgress,
}
