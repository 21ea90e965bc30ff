//! # Placeholder Screen
//!
//! Shared body of the settings and game screens: a heading, one line of
//! text and a "Назад в меню" button, centred on a solid background.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::game_button::{BUTTON_HEIGHT, GameButton, button_column};
use crate::tui::event::TuiEvent;
use crate::tui::ui::hit_test;

pub const BACK_BUTTON_TEXT: &str = "Назад в меню";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderEvent {
    Back,
}

/// Persistent state: only where the back button was drawn.
#[derive(Debug, Default)]
pub struct PlaceholderState {
    pub button_rect: Option<Rect>,
}

impl PlaceholderState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for PlaceholderState {
    type Event = PlaceholderEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PlaceholderEvent> {
        match event {
            TuiEvent::Submit => Some(PlaceholderEvent::Back),
            TuiEvent::MouseClick(col, row) => {
                let rects: Vec<Rect> = self.button_rect.into_iter().collect();
                hit_test(&rects, *col, *row).map(|_| PlaceholderEvent::Back)
            }
            _ => None,
        }
    }
}

/// Static content of one placeholder screen.
pub struct PlaceholderContent {
    pub heading: &'static str,
    pub body: &'static str,
    pub background: Color,
}

pub struct PlaceholderScreen<'a> {
    state: &'a mut PlaceholderState,
    content: &'a PlaceholderContent,
}

impl<'a> PlaceholderScreen<'a> {
    pub fn new(state: &'a mut PlaceholderState, content: &'a PlaceholderContent) -> Self {
        Self { state, content }
    }
}

impl Component for PlaceholderScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::Length;

        frame.render_widget(
            Block::new().style(Style::default().bg(self.content.background)),
            area,
        );

        let [heading_area, _, body_area, _, button_row] = Layout::vertical([
            Length(1),
            Length(1),
            Length(1),
            Length(1),
            Length(BUTTON_HEIGHT),
        ])
        .flex(Flex::Center)
        .areas(area);

        let heading = Paragraph::new(Line::from(self.content.heading))
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(heading, heading_area);

        let body = Paragraph::new(self.content.body)
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        frame.render_widget(body, body_area);

        let button_rect = button_column(button_row, 1)
            .into_iter()
            .next()
            .filter(|rect| rect.height > 0);
        self.state.button_rect = button_rect;
        if let Some(rect) = button_rect {
            // Only one button: it always carries focus, shown on its border.
            GameButton::new(BACK_BUTTON_TEXT)
                .focused(true)
                .render(frame, rect);
        }
    }
}
