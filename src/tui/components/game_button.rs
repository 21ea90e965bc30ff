//! # GameButton Component
//!
//! The one button style used across every screen: tan fill, thick dark
//! border, bold white label. An optional icon is pushed to the right edge,
//! with the label on the left; without an icon the label is centred.
//!
//! Stateless. The parent owns focus and passes it in as a prop.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

pub const BUTTON_COLOR: Color = Color::Rgb(0xA1, 0x90, 0x6E);
pub const BUTTON_BORDER_COLOR: Color = Color::Rgb(0x00, 0x00, 0x00);
pub const BUTTON_TEXT_COLOR: Color = Color::White;

/// Border (2) + one line of label.
pub const BUTTON_HEIGHT: u16 = 3;
/// Share of the parent width a button takes.
pub const BUTTON_WIDTH_PERCENT: u16 = 70;
pub const BUTTON_SPACING: u16 = 1;

pub struct GameButton<'a> {
    pub text: &'a str,
    pub icon: Option<&'a str>,
    pub focused: bool,
}

impl<'a> GameButton<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            icon: None,
            focused: false,
        }
    }

    pub fn icon(mut self, icon: Option<&'a str>) -> Self {
        self.icon = icon;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn label_line(&self, inner_width: u16) -> Line<'a> {
        let label_style = Style::default()
            .fg(BUTTON_TEXT_COLOR)
            .add_modifier(Modifier::BOLD);

        match self.icon {
            Some(icon) => {
                // Space-between row: label hugs the left edge, icon the right.
                let used = self.text.width() + icon.width() + 2;
                let gap = (inner_width as usize).saturating_sub(used);
                Line::from(vec![
                    Span::raw(" "),
                    Span::styled(self.text, label_style),
                    Span::raw(" ".repeat(gap)),
                    Span::styled(icon, Style::default().fg(BUTTON_TEXT_COLOR)),
                    Span::raw(" "),
                ])
            }
            None => Line::from(Span::styled(self.text, label_style)).alignment(Alignment::Center),
        }
    }
}

impl Component for GameButton<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default()
                .fg(BUTTON_TEXT_COLOR)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(BUTTON_BORDER_COLOR)
        };

        // Focus only changes the border; the fill stays tan
        let style = Style::default().bg(BUTTON_COLOR).fg(BUTTON_TEXT_COLOR);

        let block = Block::bordered()
            .border_type(BorderType::Thick)
            .border_style(border_style)
            .style(style);

        let inner_width = block.inner(area).width;
        let paragraph = Paragraph::new(self.label_line(inner_width)).block(block);
        frame.render_widget(paragraph, area);
    }
}

/// Lay out `count` buttons in a centred column inside `area`.
///
/// Buttons that don't fit are returned with zero height so indices stay
/// aligned with the caller's button list.
pub fn button_column(area: Rect, count: usize) -> Vec<Rect> {
    let [column] = Layout::horizontal([Constraint::Percentage(BUTTON_WIDTH_PERCENT)])
        .flex(Flex::Center)
        .areas(area);

    let mut rects = Vec::with_capacity(count);
    let mut y = column.y;
    for _ in 0..count {
        let bottom = column.y + column.height;
        let height = BUTTON_HEIGHT.min(bottom.saturating_sub(y));
        rects.push(Rect::new(column.x, y, column.width, height));
        y = y.saturating_add(BUTTON_HEIGHT + BUTTON_SPACING).min(bottom);
    }
    rects
}

/// Height of a column of `count` buttons.
pub fn column_height(count: usize) -> u16 {
    let count = count as u16;
    count * BUTTON_HEIGHT + count.saturating_sub(1) * BUTTON_SPACING
}
