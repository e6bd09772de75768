mod all;
mod choices;
mod field_builder;
mod footer;
mod log;

use self::log::log;
use super::*;
use choices::choices;
use footer::footer;
use ratatui::layout::Rect;

pub use all::all as render;

/// Return the cursor position after `text` inside a bordered single-line
/// input, or `None` when the input has no room for a cursor.
///
pub(super) fn input_cursor(area: Rect, text: &str) -> Option<(u16, u16)> {
    if area.width < 3 || area.height < 3 {
        return None;
    }
    let offset = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    let x = area
        .x
        .saturating_add(1)
        .saturating_add(offset)
        .min(area.right().saturating_sub(2));
    Some((x, area.y.saturating_add(1)))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::state::State;
    use ratatui::{backend::TestBackend, Terminal};

    /// Render the whole screen into a test backend and return its rows.
    ///
    pub fn render_rows(state: &mut State, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| super::render(frame, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer.get(x, y).symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    pub fn screen_contains(rows: &[String], needle: &str) -> bool {
        rows.iter().any(|row| row.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_cursor_follows_text() {
        let area = Rect::new(2, 5, 20, 3);
        assert_eq!(input_cursor(area, ""), Some((3, 6)));
        assert_eq!(input_cursor(area, "abc"), Some((6, 6)));
    }

    #[test]
    fn input_cursor_stays_inside_border() {
        let area = Rect::new(2, 5, 20, 3);
        let long = "x".repeat(usize::from(u16::MAX) + 10);
        assert_eq!(input_cursor(area, &long), Some((20, 6)));

        let edge = Rect::new(u16::MAX - 10, 0, 10, 3);
        assert_eq!(input_cursor(edge, &long), Some((u16::MAX - 2, 1)));
    }

    #[test]
    fn input_cursor_needs_room() {
        assert_eq!(input_cursor(Rect::new(0, 0, 20, 2), "a"), None);
        assert_eq!(input_cursor(Rect::new(0, 0, 2, 3), "a"), None);
    }
}
