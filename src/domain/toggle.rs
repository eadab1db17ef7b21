//! Toggle - One-Way Click Latch

/// State of a click toggle
///
/// `NotClicked` is initial, `Clicked` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ClickState {
    /// Never clicked
    #[default]
    NotClicked,
    /// Clicked at least once
    Clicked,
}

impl ClickState {
    /// Apply a click trigger
    ///
    /// Always lands on `Clicked`, whatever the current state.
    #[must_use]
    pub fn click(self) -> Self {
        ClickState::Clicked
    }

    /// Whether the latch has been set
    pub fn is_clicked(self) -> bool {
        matches!(self, ClickState::Clicked)
    }

    /// Translation key for the displayed text
    pub fn label_key(self) -> &'static str {
        match self {
            ClickState::NotClicked => "toggle-not-clicked",
            ClickState::Clicked => "toggle-clicked",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_not_clicked() {
        let state = ClickState::default();
        assert_eq!(state, ClickState::NotClicked);
        assert!(!state.is_clicked());
        assert_eq!(state.label_key(), "toggle-not-clicked");
    }

    #[test]
    fn test_first_click_latches() {
        let state = ClickState::default().click();
        assert!(state.is_clicked());
        assert_eq!(state.label_key(), "toggle-clicked");
    }

    #[test]
    fn test_clicked_is_terminal() {
        let mut state = ClickState::default();
        for n in 1..=50 {
            state = state.click();
            assert!(state.is_clicked(), "not clicked after {n} triggers");
        }
        assert_eq!(ClickState::Clicked.click(), ClickState::Clicked);
    }
}
