//! # GameTitle Component
//!
//! The long application title on a dark rounded plate. The plate grows to fit
//! the wrapped title, so the parent asks for `required_height` before laying
//! out the rest of the screen.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::tui::component::Component;

pub const TITLE_PLATE_COLOR: Color = Color::Rgb(0x10, 0x10, 0x10);

const HORIZONTAL_PADDING: u16 = 2;
const VERTICAL_PADDING: u16 = 1;
/// Borders plus padding on each axis.
const HORIZONTAL_OVERHEAD: u16 = 2 + 2 * HORIZONTAL_PADDING;
const VERTICAL_OVERHEAD: u16 = 2 + 2 * VERTICAL_PADDING;

pub struct GameTitle<'a> {
    pub text: &'a str,
}

impl<'a> GameTitle<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Rows needed to show the whole title at `width` columns.
    pub fn required_height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(HORIZONTAL_OVERHEAD) as usize;
        if inner == 0 {
            return VERTICAL_OVERHEAD;
        }
        let lines = textwrap::wrap(self.text, inner).len() as u16;
        lines + VERTICAL_OVERHEAD
    }
}

impl Component for GameTitle<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::new(
                HORIZONTAL_PADDING,
                HORIZONTAL_PADDING,
                VERTICAL_PADDING,
                VERTICAL_PADDING,
            ))
            .style(Style::default().bg(TITLE_PLATE_COLOR));

        let paragraph = Paragraph::new(self.text)
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);

        frame.render_widget(paragraph, area);
    }
}
