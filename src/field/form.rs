//! Form controller for a select field definition.
//!
//! `FieldForm` owns the authoritative `FieldDefinition`, the set of displayed
//! validation errors, and the submission flag. It performs no I/O: starting a
//! submission hands back a payload snapshot, and the caller reports the
//! outcome once the request has completed.

use super::choices::{ChoiceEvent, ChoiceList};
use super::definition::{FieldDefinition, OrderPolicy};
use super::error::{FieldError, SubmitRejection};
use chrono::{DateTime, Local};
use log::*;
use std::collections::BTreeSet;
use std::fmt;

/// Attributes of a field definition.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    Label,
    Required,
    Choices,
    Default,
    Order,
}

/// A write to a single attribute.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Label(String),
    Required(bool),
    /// Choice list edits, including default changes.
    Choices(ChoiceEvent),
    Order(OrderPolicy),
}

impl FieldUpdate {
    /// Return the attribute this update writes.
    ///
    pub fn field_name(&self) -> FieldName {
        match self {
            FieldUpdate::Label(_) => FieldName::Label,
            FieldUpdate::Required(_) => FieldName::Required,
            FieldUpdate::Choices(ChoiceEvent::DefaultChanged(_)) => FieldName::Default,
            FieldUpdate::Choices(_) => FieldName::Choices,
            FieldUpdate::Order(_) => FieldName::Order,
        }
    }
}

impl FieldError {
    /// Return the attribute this error is reported against.
    ///
    pub fn field_name(&self) -> FieldName {
        match self {
            FieldError::LabelRequired => FieldName::Label,
            FieldError::ChoicesRequired => FieldName::Choices,
        }
    }
}

/// Set of field-level validation errors.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeSet<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, error: FieldError) -> bool {
        self.0.contains(&error)
    }

    /// Return the error reported against the attribute, if any.
    ///
    pub fn for_field(&self, name: FieldName) -> Option<FieldError> {
        self.0.iter().copied().find(|error| error.field_name() == name)
    }

    fn clear_field(&mut self, name: FieldName) {
        self.0.retain(|error| error.field_name() != name);
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        ValidationErrors(iter.into_iter().collect())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(|error| error.to_string()).collect();
        write!(f, "{}", messages.join(", "))
    }
}

/// How a submission ended.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The endpoint answered with the given HTTP status.
    Delivered { status: u16 },
    /// The request could not be completed.
    Failed(String),
}

/// Controller for the field definition form.
///
#[derive(Debug, Clone, Default)]
pub struct FieldForm {
    definition: FieldDefinition,
    errors: ValidationErrors,
    submitting: bool,
    last_outcome: Option<(SubmitOutcome, DateTime<Local>)>,
}

impl FieldForm {
    /// Return a form holding the initial definition.
    ///
    pub fn new() -> Self {
        Self::default()
    }

    pub fn definition(&self) -> &FieldDefinition {
        &self.definition
    }

    pub fn choices(&self) -> &ChoiceList {
        &self.definition.choices
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn last_outcome(&self) -> Option<&(SubmitOutcome, DateTime<Local>)> {
        self.last_outcome.as_ref()
    }

    /// Write one attribute and drop any displayed error for it. Errors are
    /// not re-checked until the next submission attempt.
    ///
    pub fn update_field(&mut self, update: FieldUpdate) {
        let name = update.field_name();
        match update {
            FieldUpdate::Label(label) => self.definition.label = label,
            FieldUpdate::Required(required) => self.definition.required = required,
            FieldUpdate::Choices(event) => {
                if !self.definition.choices.apply(&event) {
                    warn!("Ignored choice event that would corrupt the list: {:?}", event);
                    return;
                }
            }
            FieldUpdate::Order(order) => self.definition.order = order,
        }
        self.errors.clear_field(name);
    }

    /// Apply the events produced by the choice list editor, in order.
    ///
    pub fn apply_choice_events(&mut self, events: Vec<ChoiceEvent>) {
        for event in events {
            self.update_field(FieldUpdate::Choices(event));
        }
    }

    /// Check the definition. Both checks always run.
    ///
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        if self.definition.label.trim().is_empty() {
            errors.0.insert(FieldError::LabelRequired);
        }
        if self.definition.choices.is_empty() {
            errors.0.insert(FieldError::ChoicesRequired);
        }
        errors
    }

    /// Validate and, if valid, mark the form as submitting and return the
    /// payload to send. The validation result replaces the displayed errors.
    ///
    pub fn begin_submit(&mut self) -> Result<FieldDefinition, SubmitRejection> {
        if self.submitting {
            return Err(SubmitRejection::InProgress);
        }
        self.errors = self.validate();
        if !self.errors.is_empty() {
            return Err(SubmitRejection::Invalid(self.errors.clone()));
        }
        self.submitting = true;
        Ok(self.definition.clone())
    }

    /// Record the end of a submission. The flag is cleared whatever the
    /// outcome.
    ///
    pub fn finish_submit(&mut self, outcome: SubmitOutcome) {
        self.submitting = false;
        self.last_outcome = Some((outcome, Local::now()));
    }

    /// Restore the initial definition and drop all errors.
    ///
    pub fn clear(&mut self) {
        self.definition = FieldDefinition::new();
        self.errors = ValidationErrors::default();
        self.last_outcome = None;
    }
}
