use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::field::{ChoiceRejection, FieldForm, FieldUpdate, SubmitOutcome, SubmitRejection};
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;

use super::error::StateError;
use super::navigation::Focus;

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    form: FieldForm,
    choice_input: String,
    focus: Focus,
    choice_cursor: usize,
    spinner_index: usize,
    log_visible: bool,
    theme: Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            form: FieldForm::new(),
            choice_input: String::new(),
            focus: Focus::Label,
            choice_cursor: 0,
            spinner_index: 0,
            log_visible: false,
            theme: Theme::default(),
        }
    }
}

impl State {
    /// Return new state attached to the network worker.
    ///
    pub fn new(net_sender: NetworkEventSender, theme: Theme) -> Self {
        State {
            net_sender: Some(net_sender),
            theme,
            ..State::default()
        }
    }

    pub fn form(&self) -> &FieldForm {
        &self.form
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    /// Move focus to the next row. The choice list is skipped while empty.
    ///
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        if self.focus == Focus::ChoiceList && self.form.choices().is_empty() {
            self.focus = self.focus.next();
        }
    }

    /// Move focus to the previous row. The choice list is skipped while empty.
    ///
    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
        if self.focus == Focus::ChoiceList && self.form.choices().is_empty() {
            self.focus = self.focus.previous();
        }
    }

    pub fn label(&self) -> &str {
        &self.form.definition().label
    }

    pub fn add_label_char(&mut self, c: char) {
        let mut label = self.label().to_owned();
        label.push(c);
        self.form.update_field(FieldUpdate::Label(label));
    }

    pub fn remove_label_char(&mut self) {
        let mut label = self.label().to_owned();
        if label.pop().is_some() {
            self.form.update_field(FieldUpdate::Label(label));
        }
    }

    pub fn toggle_required(&mut self) {
        let required = !self.form.definition().required;
        self.form.update_field(FieldUpdate::Required(required));
    }

    pub fn toggle_order(&mut self) {
        let order = self.form.definition().order.toggled();
        debug!("Order policy set to {}", order);
        self.form.update_field(FieldUpdate::Order(order));
    }

    pub fn choice_input(&self) -> &str {
        &self.choice_input
    }

    /// Append to the choice input. Input is disabled while the list is full.
    ///
    pub fn add_choice_char(&mut self, c: char) {
        if !self.form.choices().is_full() {
            self.choice_input.push(c);
        }
    }

    pub fn remove_choice_char(&mut self) {
        self.choice_input.pop();
    }

    /// Check the current choice input without adding it.
    ///
    pub fn choice_check(&self) -> Result<String, ChoiceRejection> {
        self.form.choices().check_candidate(&self.choice_input)
    }

    /// Add the current choice input to the list and clear the input.
    ///
    pub fn add_choice(&mut self) -> Result<(), ChoiceRejection> {
        let events = self.form.choices().propose_add(&self.choice_input)?;
        self.form.apply_choice_events(events);
        self.choice_input.clear();
        Ok(())
    }

    pub fn choice_cursor(&self) -> usize {
        self.choice_cursor
    }

    pub fn next_choice(&mut self) {
        let len = self.form.choices().len();
        if len > 0 {
            self.choice_cursor = (self.choice_cursor + 1).min(len - 1);
        }
    }

    pub fn previous_choice(&mut self) {
        self.choice_cursor = self.choice_cursor.saturating_sub(1);
    }

    fn choice_at_cursor(&self) -> Option<String> {
        self.form.choices().items().get(self.choice_cursor).cloned()
    }

    /// Make the choice under the cursor the default.
    ///
    pub fn select_default_at_cursor(&mut self) {
        let Some(item) = self.choice_at_cursor() else {
            return;
        };
        if let Some(event) = self.form.choices().select_default(&item) {
            self.form.apply_choice_events(vec![event]);
        }
    }

    /// Remove the choice under the cursor, keeping the cursor in range.
    ///
    pub fn remove_choice_at_cursor(&mut self) {
        let Some(item) = self.choice_at_cursor() else {
            return;
        };
        let events = self.form.choices().remove_item(&item);
        self.form.apply_choice_events(events);
        let len = self.form.choices().len();
        self.choice_cursor = self.choice_cursor.min(len.saturating_sub(1));
        if len == 0 && self.focus == Focus::ChoiceList {
            self.focus = Focus::ChoiceInput;
        }
    }

    /// Validate the form and hand the definition to the network worker.
    /// Returns `true` if a submission was started.
    ///
    pub fn submit(&mut self) -> bool {
        let definition = match self.form.begin_submit() {
            Ok(definition) => definition,
            Err(SubmitRejection::InProgress) => {
                debug!("Ignoring submit request while a submission is in progress.");
                return false;
            }
            Err(rejection) => {
                warn!("{}", rejection);
                return false;
            }
        };
        info!("Submitting field '{}'...", definition.label);
        if let Err(e) = self.dispatch(NetworkEvent::SubmitField { definition }) {
            error!("Failed to start submission: {}", e);
            self.form.finish_submit(SubmitOutcome::Failed(e.to_string()));
            return false;
        }
        true
    }

    /// Record the end of a submission started with `submit`.
    ///
    pub fn finish_submit(&mut self, outcome: SubmitOutcome) {
        self.form.finish_submit(outcome);
    }

    /// Reset the form and the choice input.
    ///
    pub fn clear(&mut self) {
        info!("Clearing field definition.");
        self.form.clear();
        self.choice_input.clear();
        self.choice_cursor = 0;
        if self.focus == Focus::ChoiceList {
            self.focus = Focus::ChoiceInput;
        }
    }

    pub fn spinner_index(&self) -> usize {
        self.spinner_index
    }

    /// Advance the spinner while a submission is outstanding.
    ///
    pub fn advance_spinner(&mut self) {
        if self.form.is_submitting() {
            self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
        }
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    pub fn toggle_log(&mut self) {
        self.log_visible = !self.log_visible;
    }

    /// Send a network event to the network worker.
    ///
    pub fn dispatch(&self, event: NetworkEvent) -> Result<(), StateError> {
        let net_sender = self
            .net_sender
            .as_ref()
            .ok_or(StateError::NetworkUnavailable)?;
        net_sender
            .send(event)
            .map_err(|e| StateError::DispatchFailed(e.to_string()))
    }
}
