use super::{input_cursor, Frame};
use crate::field::{FieldName, OrderPolicy, SubmitOutcome};
use crate::state::{Focus, State};
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the label and type rows.
///
pub fn top(frame: &mut Frame, size: Rect, state: &State) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Label input
            Constraint::Length(1), // Label error
            Constraint::Length(3), // Type / required
        ])
        .split(size);

    label(frame, chunks[0], chunks[1], state);
    required(frame, chunks[2], state);
}

/// Render the order row and the action buttons.
///
pub fn bottom(frame: &mut Frame, size: Rect, state: &State) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Order radio group
            Constraint::Length(3), // Buttons
        ])
        .split(size);

    order(frame, chunks[0], state);
    buttons(frame, chunks[1], state);
}

fn label(frame: &mut Frame, size: Rect, error_size: Rect, state: &State) {
    let theme = state.theme();
    let focused = state.focus() == Focus::Label;
    let error = state.form().errors().for_field(FieldName::Label);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Label *", styling::active_block_title_style()))
        .border_style(styling::block_border_style(theme, focused, error.is_some()));

    let text = if state.label().is_empty() && !focused {
        Line::from(Span::styled(
            "Enter the label for the field...",
            styling::muted_text_style(theme),
        ))
    } else {
        Line::from(Span::styled(state.label(), styling::normal_text_style(theme)))
    };
    frame.render_widget(Paragraph::new(text).block(block), size);

    if let Some(error) = error {
        let message = Paragraph::new(format!(" ! {}", error)).style(styling::error_text_style(theme));
        frame.render_widget(message, error_size);
    }

    if focused {
        if let Some((x, y)) = input_cursor(size, state.label()) {
            frame.set_cursor(x, y);
        }
    }
}

fn required(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let focused = state.focus() == Focus::Required;
    let checkbox = if state.form().definition().required {
        "[x]"
    } else {
        "[ ]"
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Type", styling::active_block_title_style()))
        .border_style(styling::block_border_style(theme, focused, false));
    let line = Line::from(vec![
        Span::styled("Multi-select    ", styling::muted_text_style(theme)),
        Span::styled(
            format!("{} A value is required", checkbox),
            styling::normal_text_style(theme),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), size);
}

fn order(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let focused = state.focus() == Focus::Order;
    let current = state.form().definition().order;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Order", styling::active_block_title_style()))
        .border_style(styling::block_border_style(theme, focused, false));

    let lines: Vec<Line> = [OrderPolicy::Alphabetical, OrderPolicy::UserSpecified]
        .iter()
        .map(|policy| {
            let marker = if *policy == current { "(•)" } else { "( )" };
            Line::from(Span::styled(
                format!("{} {}", marker, policy.description()),
                styling::normal_text_style(theme),
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), size);
}

fn buttons(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // Save
            Constraint::Length(12), // Clear
            Constraint::Min(0),     // Status
        ])
        .split(size);

    let submitting = state.form().is_submitting();
    let save_label = if submitting {
        format!("{} Save changes", spinner::frame(state.spinner_index()))
    } else {
        "Save changes".to_string()
    };
    let save_style = if submitting {
        styling::muted_text_style(theme)
    } else {
        styling::normal_text_style(theme).add_modifier(ratatui::style::Modifier::BOLD)
    };
    let save = Paragraph::new(save_label)
        .style(save_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::block_border_style(
                    theme,
                    state.focus() == Focus::Save,
                    false,
                )),
        );
    frame.render_widget(save, chunks[0]);

    let clear = Paragraph::new("Clear")
        .style(styling::normal_text_style(theme))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::block_border_style(
                    theme,
                    state.focus() == Focus::Clear,
                    false,
                )),
        );
    frame.render_widget(clear, chunks[1]);

    let status = match state.form().last_outcome() {
        _ if submitting => Span::styled(" Saving...", styling::muted_text_style(theme)),
        Some((SubmitOutcome::Delivered { status }, at)) => Span::styled(
            format!(" Saved at {} (status {})", at.format("%H:%M:%S"), status),
            styling::normal_text_style(theme).fg(theme.success.to_color()),
        ),
        Some((SubmitOutcome::Failed(message), at)) => Span::styled(
            format!(" Save failed at {}: {}", at.format("%H:%M:%S"), message),
            styling::error_text_style(theme),
        ),
        None => Span::raw(""),
    };
    // The status sits on the middle line of the button row; short
    // terminals leave no room for it.
    if chunks[2].height < 2 {
        return;
    }
    let status_area = Rect {
        y: chunks[2].y + 1,
        height: 1,
        ..chunks[2]
    }
    .intersection(frame.size());
    if status_area.is_empty() {
        return;
    }
    frame.render_widget(Paragraph::new(Line::from(status)), status_area);
}

#[cfg(test)]
mod tests {
    use crate::field::SubmitOutcome;
    use crate::state::{Focus, State};
    use crate::ui::render::test_support::{render_rows, screen_contains};
    use crate::ui::Theme;
    use std::sync::mpsc;

    #[test]
    fn renders_empty_form() {
        let mut state = State::default();
        state.set_focus(Focus::Required);
        let rows = render_rows(&mut state, 80, 40);
        assert!(screen_contains(&rows, "Field Builder"));
        assert!(screen_contains(&rows, "Enter the label for the field..."));
        assert!(screen_contains(&rows, "[ ] A value is required"));
        assert!(screen_contains(&rows, "(•) Display choices in alphabetical order"));
        assert!(screen_contains(&rows, "( ) Keep the custom order"));
        assert!(screen_contains(&rows, "Save changes"));
        assert!(!screen_contains(&rows, "Label is required"));
    }

    #[test]
    fn renders_field_errors_after_submit() {
        let mut state = State::default();
        state.submit();
        let rows = render_rows(&mut state, 80, 40);
        assert!(screen_contains(&rows, "Label is required"));
        assert!(screen_contains(&rows, "Choices are required"));
    }

    #[test]
    fn renders_label_and_toggles() {
        let mut state = State::default();
        for c in "Colour".chars() {
            state.add_label_char(c);
        }
        state.toggle_required();
        state.toggle_order();
        let rows = render_rows(&mut state, 80, 40);
        assert!(screen_contains(&rows, "Colour"));
        assert!(screen_contains(&rows, "[x] A value is required"));
        assert!(screen_contains(&rows, "(•) Keep the custom order"));
    }

    #[test]
    fn renders_submission_status() {
        let mut state = State::default();
        state.finish_submit(SubmitOutcome::Delivered { status: 200 });
        let rows = render_rows(&mut state, 100, 40);
        assert!(screen_contains(&rows, "(status 200)"));

        state.finish_submit(SubmitOutcome::Failed("connection refused".to_string()));
        let rows = render_rows(&mut state, 100, 40);
        assert!(screen_contains(&rows, "Save failed"));
    }

    #[test]
    fn renders_on_short_terminals() {
        let mut state = State::default();
        state.finish_submit(SubmitOutcome::Delivered { status: 200 });
        let rows = render_rows(&mut state, 80, 10);
        assert!(screen_contains(&rows, "Field Builder"));
        for height in 4..40 {
            render_rows(&mut state, 80, height);
        }
    }

    #[test]
    fn renders_submitting_on_short_terminals() {
        let (tx, _rx) = mpsc::channel();
        let mut state = State::new(tx, Theme::default());
        for c in "Colour".chars() {
            state.add_label_char(c);
        }
        state.add_choice_char('R');
        state.add_choice().unwrap();
        assert!(state.submit());
        for height in 4..40 {
            render_rows(&mut state, 80, height);
        }
        let rows = render_rows(&mut state, 80, 40);
        assert!(screen_contains(&rows, "Saving..."));
    }
}
