use super::{choices, field_builder, footer, log, Frame};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

/// Height of the log panel when visible.
const LOG_HEIGHT: u16 = 10;

/// Render the whole application according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(1),    // Form
            Constraint::Length(1), // Footer
        ])
        .split(size);

    banner(frame, chunks[0], state);

    let form_area = if state.is_log_visible() {
        let body = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(LOG_HEIGHT)])
            .split(chunks[1]);
        log(frame, body[1], state);
        body[0]
    } else {
        chunks[1]
    };

    let form_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Label and type
            Constraint::Min(6),    // Choices
            Constraint::Length(7), // Order and buttons
        ])
        .split(form_area);

    field_builder::top(frame, form_chunks[0], state);
    choices(frame, form_chunks[1], state);
    field_builder::bottom(frame, form_chunks[2], state);
    footer(frame, chunks[2], state);
}

fn banner(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let title = Paragraph::new("Field Builder")
        .style(styling::banner_style(theme))
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(title, size);
}
