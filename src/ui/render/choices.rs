use super::{input_cursor, Frame};
use crate::field::{ChoiceRejection, FieldName, MAX_CHOICES, MAX_CHOICE_LENGTH};
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

/// Render the choice input, its hint line and the list of choices.
///
pub fn choices(frame: &mut Frame, size: Rect, state: &State) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Length(1), // Hint or error
            Constraint::Min(2),    // List
        ])
        .split(size);

    input(frame, chunks[0], state);
    hint(frame, chunks[1], state);
    list(frame, chunks[2], state);
}

fn input(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let focused = state.focus() == Focus::ChoiceInput;
    let has_error = state.form().errors().for_field(FieldName::Choices).is_some();
    let full = state.form().choices().is_full();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Choices *", styling::active_block_title_style()))
        .border_style(styling::block_border_style(theme, focused, has_error));

    let text = state.choice_input();
    let line = if full {
        Line::from(Span::styled(
            "Maximum choices reached",
            styling::muted_text_style(theme),
        ))
    } else if text.is_empty() {
        Line::from(Span::styled("Enter choice...", styling::muted_text_style(theme)))
    } else {
        // Characters past the limit are highlighted rather than dropped.
        let fitting: String = text.chars().take(MAX_CHOICE_LENGTH).collect();
        let overflow: String = text.chars().skip(MAX_CHOICE_LENGTH).collect();
        Line::from(vec![
            Span::styled(fitting, styling::normal_text_style(theme)),
            Span::styled(overflow, styling::overflow_text_style(theme)),
        ])
    };
    frame.render_widget(Paragraph::new(line).block(block), size);

    if focused && !full {
        if let Some((x, y)) = input_cursor(size, text) {
            frame.set_cursor(x, y);
        }
    }
}

fn hint(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let line = match state.choice_check() {
        Err(rejection @ (ChoiceRejection::TooLong | ChoiceRejection::Duplicate)) => {
            Span::styled(format!(" ! {}", rejection), styling::error_text_style(theme))
        }
        _ => match state.form().errors().for_field(FieldName::Choices) {
            Some(error) => Span::styled(format!(" ! {}", error), styling::error_text_style(theme)),
            None => Span::styled(
                format!(
                    " Max {} items, {} characters per item ({}/{})",
                    MAX_CHOICES,
                    MAX_CHOICE_LENGTH,
                    state.form().choices().len(),
                    MAX_CHOICES
                ),
                styling::muted_text_style(theme),
            ),
        },
    };
    frame.render_widget(Paragraph::new(Line::from(line)), size);
}

fn list(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let focused = state.focus() == Focus::ChoiceList;
    let choices = state.form().choices();

    let items: Vec<ListItem> = choices
        .items()
        .iter()
        .map(|item| {
            let mut spans = Vec::with_capacity(4);
            if choices.is_default(item) {
                spans.push(Span::styled("(•) ", styling::normal_text_style(theme)));
                spans.push(Span::styled(item.as_str(), styling::normal_text_style(theme)));
                spans.push(Span::raw(" "));
                spans.push(Span::styled(" Default ", styling::badge_style(theme)));
            } else {
                spans.push(Span::styled("( ) ", styling::normal_text_style(theme)));
                spans.push(Span::styled(item.as_str(), styling::normal_text_style(theme)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            "Default value",
            styling::active_block_title_style(),
        ))
        .border_style(styling::block_border_style(theme, focused, false));

    if items.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No choices yet",
            styling::muted_text_style(theme),
        ))
        .block(block);
        frame.render_widget(empty, size);
        return;
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(styling::active_list_item_style(theme));
    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(state.choice_cursor()));
    }
    frame.render_stateful_widget(list, size, &mut list_state);
}

#[cfg(test)]
mod tests {
    use crate::field::MAX_CHOICE_LENGTH;
    use crate::state::{Focus, State};
    use crate::ui::render::test_support::{render_rows, screen_contains};

    fn type_choice(state: &mut State, text: &str) {
        for c in text.chars() {
            state.add_choice_char(c);
        }
    }

    #[test]
    fn renders_placeholder_and_hint() {
        let mut state = State::default();
        let rows = render_rows(&mut state, 80, 40);
        assert!(screen_contains(&rows, "Enter choice..."));
        assert!(screen_contains(&rows, "Max 50 items, 40 characters per item (0/50)"));
        assert!(screen_contains(&rows, "No choices yet"));
    }

    #[test]
    fn renders_choices_with_default_badge() {
        let mut state = State::default();
        for choice in ["Red", "Green"] {
            type_choice(&mut state, choice);
            state.add_choice().unwrap();
        }
        let rows = render_rows(&mut state, 80, 40);
        assert!(screen_contains(&rows, "(•) Red  Default"));
        assert!(screen_contains(&rows, "( ) Green"));
        assert!(screen_contains(&rows, "(2/50)"));
    }

    #[test]
    fn renders_duplicate_hint() {
        let mut state = State::default();
        type_choice(&mut state, "Red");
        state.add_choice().unwrap();
        type_choice(&mut state, "Red");
        let rows = render_rows(&mut state, 80, 40);
        assert!(screen_contains(&rows, "Item already exists"));
    }

    #[test]
    fn renders_too_long_hint() {
        let mut state = State::default();
        type_choice(&mut state, &"x".repeat(MAX_CHOICE_LENGTH + 2));
        let rows = render_rows(&mut state, 80, 40);
        assert!(screen_contains(&rows, "Name is too long (max 40 characters)"));
    }

    #[test]
    fn renders_capacity_placeholder() {
        let mut state = State::default();
        for i in 0..crate::field::MAX_CHOICES {
            type_choice(&mut state, &format!("choice {}", i));
            state.add_choice().unwrap();
        }
        state.set_focus(Focus::ChoiceInput);
        let rows = render_rows(&mut state, 80, 40);
        assert!(screen_contains(&rows, "Maximum choices reached"));
    }

    #[test]
    fn renders_long_input_on_short_terminals() {
        let mut state = State::default();
        state.set_focus(Focus::ChoiceInput);
        type_choice(&mut state, &"x".repeat(300));
        for height in 4..30 {
            render_rows(&mut state, 20, height);
        }
    }
}
