use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders},
};
use tui_logger::TuiLoggerWidget;

/// Render the log panel.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let block = Block::default()
        .title("Log (ctrl-l: hide)")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let widget = TuiLoggerWidget::default()
        .block(block)
        .style_error(Style::default().fg(theme.error.to_color()))
        .style_warn(Style::default().fg(theme.warning.to_color()))
        .style_info(Style::default().fg(theme.text.to_color()))
        .style_debug(Style::default().fg(theme.text_muted.to_color()))
        .style_trace(Style::default().fg(theme.text_muted.to_color()));
    frame.render_widget(widget, size);
}
