//! # Settings Screen
//!
//! Placeholder for future game settings. Nothing here is configurable yet.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::tui::component::Component;
use crate::tui::components::placeholder::{PlaceholderContent, PlaceholderScreen, PlaceholderState};

pub const SETTINGS_CONTENT: PlaceholderContent = PlaceholderContent {
    heading: "Настройки",
    body: "Здесь будут настройки игры",
    background: Color::Rgb(0x2D, 0x2D, 0x2D),
};

pub struct SettingsScreen<'a> {
    state: &'a mut PlaceholderState,
}

impl<'a> SettingsScreen<'a> {
    pub fn new(state: &'a mut PlaceholderState) -> Self {
        Self { state }
    }
}

impl Component for SettingsScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        PlaceholderScreen::new(self.state, &SETTINGS_CONTENT).render(frame, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_settings_screen_text() {
        let mut state = PlaceholderState::new();
        let mut terminal = Terminal::new(TestBackend::new(50, 16)).unwrap();
        terminal
            .draw(|f| SettingsScreen::new(&mut state).render(f, f.area()))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Настройки"));
        assert!(text.contains("Здесь будут настройки игры"));
        assert!(text.contains("Назад в меню"));
    }
}
