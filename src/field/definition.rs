//! Field definition record submitted by the builder.

use super::choices::ChoiceList;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How choices are displayed downstream. The builder only stores the policy.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(test, derive(fake::Dummy))]
#[serde(rename_all = "kebab-case")]
pub enum OrderPolicy {
    #[default]
    Alphabetical,
    UserSpecified,
}

impl OrderPolicy {
    /// Return the other policy.
    ///
    pub fn toggled(self) -> Self {
        match self {
            OrderPolicy::Alphabetical => OrderPolicy::UserSpecified,
            OrderPolicy::UserSpecified => OrderPolicy::Alphabetical,
        }
    }

    /// Return the text used for the policy's radio option.
    ///
    pub fn description(&self) -> &'static str {
        match self {
            OrderPolicy::Alphabetical => "Display choices in alphabetical order",
            OrderPolicy::UserSpecified => "Keep the custom order",
        }
    }
}

impl fmt::Display for OrderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderPolicy::Alphabetical => write!(f, "alphabetical"),
            OrderPolicy::UserSpecified => write!(f, "user-specified"),
        }
    }
}

/// Complete definition of a select field.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub label: String,
    pub required: bool,
    #[serde(flatten)]
    pub choices: ChoiceList,
    pub order: OrderPolicy,
}

impl FieldDefinition {
    /// Return the initial, empty definition.
    ///
    pub fn new() -> Self {
        Self::default()
    }
}
