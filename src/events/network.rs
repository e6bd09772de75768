use crate::field::{FieldDefinition, SubmitOutcome};
use crate::state::State;
use crate::submit::Submitter;
use anyhow::Result;
use log::*;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    SubmitField { definition: FieldDefinition },
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    submitter: &'a Submitter,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, submitter: &'a Submitter) -> Self {
        Handler { state, submitter }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::SubmitField { definition } => self.submit_field(definition).await?,
        }
        Ok(())
    }

    /// Send the definition and report the outcome back to state. Transport
    /// failures are logged, never retried.
    ///
    async fn submit_field(&mut self, definition: FieldDefinition) -> Result<()> {
        let outcome = match self.submitter.submit(&definition).await {
            Ok(status) => {
                info!(
                    "Field '{}' submitted (status {}).",
                    definition.label, status
                );
                SubmitOutcome::Delivered { status }
            }
            Err(e) => {
                error!("Failed to submit field '{}': {}", definition.label, e);
                let mut source = e.source();
                while let Some(err) = source {
                    error!("  Submission error chain - Caused by: {}", err);
                    source = err.source();
                }
                SubmitOutcome::Failed(e.to_string())
            }
        };
        let mut state = self.state.lock().await;
        state.finish_submit(outcome);
        Ok(())
    }
}
