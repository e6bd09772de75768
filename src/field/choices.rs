//! Choice list editing.
//!
//! `ChoiceList` holds the ordered, unique choices of a select field together
//! with the designated default. Editing is split in two steps: the query
//! methods (`propose_add`, `remove_item`, `select_default`) inspect the list
//! and return the `ChoiceEvent`s the edit amounts to, and `apply` performs
//! them. The form controller owns the list and is the only caller of `apply`.

use super::error::ChoiceRejection;
use serde::{Deserialize, Serialize};

/// Maximum number of choices a field may hold.
pub const MAX_CHOICES: usize = 50;

/// Maximum length of a single choice, in characters.
pub const MAX_CHOICE_LENGTH: usize = 40;

/// Intent emitted by the choice list editor.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceEvent {
    ItemAdded(String),
    ItemRemoved(String),
    /// New default, or an empty string when no default remains.
    DefaultChanged(String),
}

/// Ordered collection of unique choices with an optional default.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceList {
    #[serde(rename = "choices")]
    items: Vec<String>,
    default: String,
}

impl ChoiceList {
    /// Return a new empty list.
    ///
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Return the default choice, or an empty string if there is none.
    ///
    pub fn default_item(&self) -> &str {
        &self.default
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_CHOICES
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|existing| existing == item)
    }

    pub fn is_default(&self, item: &str) -> bool {
        !self.default.is_empty() && self.default == item
    }

    /// Check a raw candidate and return its trimmed form if it can be added.
    ///
    /// A full list rejects every candidate with `CapacityReached`. The other
    /// reasons are mutually exclusive.
    ///
    pub fn check_candidate(&self, candidate: &str) -> Result<String, ChoiceRejection> {
        if self.is_full() {
            return Err(ChoiceRejection::CapacityReached);
        }
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            return Err(ChoiceRejection::Empty);
        }
        if trimmed.chars().count() > MAX_CHOICE_LENGTH {
            return Err(ChoiceRejection::TooLong);
        }
        if self.contains(trimmed) {
            return Err(ChoiceRejection::Duplicate);
        }
        Ok(trimmed.to_owned())
    }

    /// Return the events that add the candidate, or the reason it is
    /// rejected. The first item added to an empty list also becomes the
    /// default.
    ///
    pub fn propose_add(&self, candidate: &str) -> Result<Vec<ChoiceEvent>, ChoiceRejection> {
        let item = self.check_candidate(candidate)?;
        let mut events = vec![ChoiceEvent::ItemAdded(item.clone())];
        if self.is_empty() {
            events.push(ChoiceEvent::DefaultChanged(item));
        }
        Ok(events)
    }

    /// Return the events that remove the item. Removing the default moves it
    /// to the first remaining item, or clears it when none remain. Unknown
    /// items produce no events.
    ///
    pub fn remove_item(&self, item: &str) -> Vec<ChoiceEvent> {
        if !self.contains(item) {
            return vec![];
        }
        let mut events = vec![ChoiceEvent::ItemRemoved(item.to_owned())];
        if self.default == item {
            let next = self
                .items
                .iter()
                .find(|existing| existing.as_str() != item)
                .cloned()
                .unwrap_or_default();
            events.push(ChoiceEvent::DefaultChanged(next));
        }
        events
    }

    /// Return the event that makes the item the default, if it is present.
    ///
    pub fn select_default(&self, item: &str) -> Option<ChoiceEvent> {
        if self.contains(item) {
            Some(ChoiceEvent::DefaultChanged(item.to_owned()))
        } else {
            None
        }
    }

    /// Apply an event to the list. Events that would break an invariant are
    /// ignored and `false` is returned.
    ///
    pub fn apply(&mut self, event: &ChoiceEvent) -> bool {
        match event {
            ChoiceEvent::ItemAdded(item) => {
                if self.is_full()
                    || item.is_empty()
                    || item.chars().count() > MAX_CHOICE_LENGTH
                    || self.contains(item)
                {
                    return false;
                }
                self.items.push(item.clone());
                true
            }
            ChoiceEvent::ItemRemoved(item) => {
                let Some(index) = self.items.iter().position(|existing| existing == item) else {
                    return false;
                };
                self.items.remove(index);
                // The default must always name a remaining item
                if self.default == *item {
                    self.default = self.items.first().cloned().unwrap_or_default();
                }
                true
            }
            ChoiceEvent::DefaultChanged(item) => {
                if !item.is_empty() && !self.contains(item) {
                    return false;
                }
                self.default = item.clone();
                true
            }
        }
    }

    /// Apply a sequence of events in order. Returns `true` if all applied.
    ///
    pub fn apply_all<'a>(&mut self, events: impl IntoIterator<Item = &'a ChoiceEvent>) -> bool {
        events
            .into_iter()
            .fold(true, |applied, event| self.apply(event) && applied)
    }
}
