//! Field definition submission.
//!
//! Sends the serialized definition to the configured endpoint. The response
//! status is reported back but never treated as an error; only transport
//! failures are.

mod client;
mod error;

pub use error::SubmitError;

use crate::field::FieldDefinition;
use client::Client;
use log::*;

/// Responsible for delivering field definitions to the submission endpoint.
///
pub struct Submitter {
    client: Client,
}

impl Submitter {
    /// Returns a new instance for the given endpoint.
    ///
    pub fn new(endpoint: &str) -> Result<Submitter, SubmitError> {
        debug!("Initializing submitter for endpoint {}...", endpoint);
        Ok(Submitter {
            client: Client::new(endpoint)?,
        })
    }

    /// Post the definition and return the HTTP status of the response.
    ///
    pub async fn submit(&self, definition: &FieldDefinition) -> Result<u16, SubmitError> {
        debug!(
            "Posting field definition '{}' with {} choices to {}...",
            definition.label,
            definition.choices.len(),
            self.client.endpoint()
        );
        let status = self.client.post_json(definition).await?;
        if !status.is_success() {
            warn!("Submission endpoint answered with status {}", status);
        }
        Ok(status.as_u16())
    }
}
