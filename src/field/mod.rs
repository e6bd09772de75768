//! Select field model.
//!
//! This module contains the domain core of the builder:
//! - `ChoiceList`: the choice list editor and its invariants
//! - `FieldDefinition`: the record that is submitted
//! - `FieldForm`: the form controller owning the definition
//! - Soft validation error types

mod choices;
mod definition;
mod error;
mod form;

pub use choices::{ChoiceEvent, ChoiceList, MAX_CHOICES, MAX_CHOICE_LENGTH};
pub use definition::{FieldDefinition, OrderPolicy};
pub use error::{ChoiceRejection, FieldError, SubmitRejection};
pub use form::{FieldForm, FieldName, FieldUpdate, SubmitOutcome, ValidationErrors};
