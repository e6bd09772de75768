use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the key hints for the focused control.
///
fn focus_hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Label => "type: edit label",
        Focus::Required => "space: toggle required",
        Focus::ChoiceInput => "enter: add choice",
        Focus::ChoiceList => "j/k: move, space: set default, d: remove",
        Focus::Order => "space: toggle order",
        Focus::Save => "enter: save",
        Focus::Clear => "enter: clear",
    }
}

/// Render the key hint line.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", focus_hints(state.focus())),
            styling::normal_text_style(theme),
        ),
        Span::styled(
            "| tab: next, ctrl-s: save, ctrl-r: clear, ctrl-l: log, esc: quit",
            styling::muted_text_style(theme),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render::test_support::{render_rows, screen_contains};

    #[test]
    fn hints_follow_focus() {
        let mut state = State::default();
        state.set_focus(Focus::Order);
        let rows = render_rows(&mut state, 120, 40);
        assert!(screen_contains(&rows, "space: toggle order"));
        assert!(screen_contains(&rows, "ctrl-s: save"));
    }
}
