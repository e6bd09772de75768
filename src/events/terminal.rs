use crate::state::{Focus, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            if tx_clone.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(e) => error!("Failed to read terminal event: {}", e),
                    },
                    Ok(false) => {}
                    Err(e) => error!("Failed to poll terminal events: {}", e),
                }
                if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(state, key)),
            Event::Tick => {
                state.advance_spinner();
                Ok(true)
            }
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

/// Route a key press to the focused row. Returns false if exit was requested.
///
pub fn handle_key(state: &mut State, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyCode::Esc => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyCode::Char('s') if ctrl => {
            state.submit();
        }
        KeyCode::Char('r') if ctrl => state.clear(),
        KeyCode::Char('l') if ctrl => state.toggle_log(),
        KeyCode::Tab => state.focus_next(),
        KeyCode::BackTab => state.focus_previous(),
        _ => handle_focused_key(state, key),
    }
    true
}

fn handle_focused_key(state: &mut State, key: KeyEvent) {
    // Only the text inputs take typed characters
    let typed = match key.code {
        KeyCode::Char(c)
            if state.focus().is_text_input()
                && !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    };

    match state.focus() {
        Focus::Label => match key.code {
            KeyCode::Backspace => state.remove_label_char(),
            KeyCode::Enter | KeyCode::Down => state.focus_next(),
            _ => {
                if let Some(c) = typed {
                    state.add_label_char(c);
                }
            }
        },
        Focus::Required => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => state.toggle_required(),
            KeyCode::Down => state.focus_next(),
            KeyCode::Up => state.focus_previous(),
            _ => {}
        },
        Focus::ChoiceInput => match key.code {
            KeyCode::Backspace => state.remove_choice_char(),
            KeyCode::Enter => {
                if let Err(reason) = state.add_choice() {
                    debug!("Choice not added: {}", reason);
                }
            }
            KeyCode::Down => state.focus_next(),
            KeyCode::Up => state.focus_previous(),
            _ => {
                if let Some(c) = typed {
                    state.add_choice_char(c);
                }
            }
        },
        Focus::ChoiceList => match key.code {
            KeyCode::Down | KeyCode::Char('j') => state.next_choice(),
            KeyCode::Up | KeyCode::Char('k') => state.previous_choice(),
            KeyCode::Char(' ') | KeyCode::Enter => state.select_default_at_cursor(),
            KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('d') => {
                state.remove_choice_at_cursor()
            }
            _ => {}
        },
        Focus::Order => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Left | KeyCode::Right => {
                state.toggle_order()
            }
            KeyCode::Down => state.focus_next(),
            KeyCode::Up => state.focus_previous(),
            _ => {}
        },
        Focus::Save => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                state.submit();
            }
            KeyCode::Right => state.focus_next(),
            KeyCode::Up => state.focus_previous(),
            _ => {}
        },
        Focus::Clear => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => state.clear(),
            KeyCode::Left => state.focus_previous(),
            _ => {}
        },
    }
}
