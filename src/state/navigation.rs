//! Navigation types for the builder form.

/// Focusable rows of the builder form, in tab order.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Label,
    Required,
    ChoiceInput,
    ChoiceList,
    Order,
    Save,
    Clear,
}

impl Focus {
    const ORDER: [Focus; 7] = [
        Focus::Label,
        Focus::Required,
        Focus::ChoiceInput,
        Focus::ChoiceList,
        Focus::Order,
        Focus::Save,
        Focus::Clear,
    ];

    fn position(self) -> usize {
        Focus::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }

    /// Return the next row, wrapping around.
    ///
    pub fn next(self) -> Focus {
        Focus::ORDER[(self.position() + 1) % Focus::ORDER.len()]
    }

    /// Return the previous row, wrapping around.
    ///
    pub fn previous(self) -> Focus {
        let len = Focus::ORDER.len();
        Focus::ORDER[(self.position() + len - 1) % len]
    }

    /// Whether typed characters go into a text buffer on this row.
    ///
    pub fn is_text_input(self) -> bool {
        matches!(self, Focus::Label | Focus::ChoiceInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle() {
        assert_eq!(Focus::Label.next(), Focus::Required);
        assert_eq!(Focus::Clear.next(), Focus::Label);
        assert_eq!(Focus::Label.previous(), Focus::Clear);
        assert_eq!(Focus::Order.previous(), Focus::ChoiceList);

        let mut focus = Focus::Label;
        for _ in 0..7 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Label);
    }

    #[test]
    fn test_text_input_rows() {
        assert!(Focus::Label.is_text_input());
        assert!(Focus::ChoiceInput.is_text_input());
        assert!(!Focus::ChoiceList.is_text_input());
        assert!(!Focus::Save.is_text_input());
    }
}
