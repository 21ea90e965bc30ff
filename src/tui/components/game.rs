//! # Game Screen
//!
//! Where the puzzle will live. For now only a heading and a way back.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::tui::component::Component;
use crate::tui::components::placeholder::{PlaceholderContent, PlaceholderScreen, PlaceholderState};

pub const GAME_CONTENT: PlaceholderContent = PlaceholderContent {
    heading: "Игровой экран",
    body: "Здесь будет игра-пазл",
    background: Color::Rgb(0x1A, 0x1A, 0x2E),
};

pub struct GameScreen<'a> {
    state: &'a mut PlaceholderState,
}

impl<'a> GameScreen<'a> {
    pub fn new(state: &'a mut PlaceholderState) -> Self {
        Self { state }
    }
}

impl Component for GameScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        PlaceholderScreen::new(self.state, &GAME_CONTENT).render(frame, area);
    }
}
