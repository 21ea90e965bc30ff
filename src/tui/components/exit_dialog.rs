//! # Exit Confirmation Dialog
//!
//! Modal overlay shown over the main menu after "Выход". "Да" confirms,
//! "Нет" dismisses. Esc and a click anywhere outside the dialog are dismiss
//! requests too.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ExitDialogState` lives in `TuiState`
//! - `ExitConfirmationDialog` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const DIALOG_TITLE: &str = "Выход из игры";
pub const DIALOG_TEXT: &str = "Вы действительно хотите выйти из игры?";
pub const CONFIRM_TEXT: &str = "Да";
pub const DISMISS_TEXT: &str = "Нет";

pub const CONFIRM_COLOR: Color = Color::Rgb(0xD3, 0x2F, 0x2F);
pub const DISMISS_COLOR: Color = Color::Rgb(0x67, 0x50, 0xA4);
const DIALOG_COLOR: Color = Color::Rgb(0x2B, 0x29, 0x30);

const DIALOG_WIDTH: u16 = 48;
const DIALOG_HEIGHT: u16 = 9;
const DIALOG_BUTTON_WIDTH: u16 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogChoice {
    Confirm,
    #[default]
    Dismiss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    Confirm,
    Dismiss,
}

impl From<DialogChoice> for DialogEvent {
    fn from(choice: DialogChoice) -> Self {
        match choice {
            DialogChoice::Confirm => DialogEvent::Confirm,
            DialogChoice::Dismiss => DialogEvent::Dismiss,
        }
    }
}

/// Persistent state for the exit dialog.
#[derive(Debug, Default)]
pub struct ExitDialogState {
    /// Starts on "Нет" so a stray Enter doesn't close the app.
    pub focused: DialogChoice,
    pub dialog_rect: Option<Rect>,
    pub confirm_rect: Option<Rect>,
    pub dismiss_rect: Option<Rect>,
}

impl ExitDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    fn toggle_focus(&mut self) {
        self.focused = match self.focused {
            DialogChoice::Confirm => DialogChoice::Dismiss,
            DialogChoice::Dismiss => DialogChoice::Confirm,
        };
    }
}

fn contains(rect: Option<Rect>, col: u16, row: u16) -> bool {
    rect.is_some_and(|rect| rect.contains((col, row).into()))
}

impl EventHandler for ExitDialogState {
    type Event = DialogEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DialogEvent> {
        match event {
            TuiEvent::FocusNext | TuiEvent::FocusPrev => {
                self.toggle_focus();
                None
            }
            TuiEvent::Submit => Some(self.focused.into()),
            TuiEvent::Back => Some(DialogEvent::Dismiss),
            TuiEvent::MouseClick(col, row) => {
                let (col, row) = (*col, *row);
                if contains(self.confirm_rect, col, row) {
                    Some(DialogEvent::Confirm)
                } else if contains(self.dismiss_rect, col, row) {
                    Some(DialogEvent::Dismiss)
                } else if contains(self.dialog_rect, col, row) {
                    None
                } else {
                    // Click outside the dialog is a dismiss request.
                    Some(DialogEvent::Dismiss)
                }
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the exit dialog.
pub struct ExitConfirmationDialog<'a> {
    state: &'a mut ExitDialogState,
}

impl<'a> ExitConfirmationDialog<'a> {
    pub fn new(state: &'a mut ExitDialogState) -> Self {
        Self { state }
    }
}

impl Component for ExitConfirmationDialog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(Line::from(DIALOG_TITLE).bold())
            .title_alignment(Alignment::Left)
            .padding(Padding::new(2, 2, 1, 0))
            .style(Style::default().bg(DIALOG_COLOR).fg(Color::White));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [text_area, _, buttons_row] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(inner);

        let text = Paragraph::new(DIALOG_TEXT).wrap(Wrap { trim: true });
        frame.render_widget(text, text_area);

        // Dismiss sits left of confirm, both aligned to the right edge.
        let [dismiss_area, confirm_area] = Layout::horizontal([
            Constraint::Length(DIALOG_BUTTON_WIDTH),
            Constraint::Length(DIALOG_BUTTON_WIDTH),
        ])
        .flex(Flex::End)
        .spacing(2)
        .areas(buttons_row);

        render_dialog_button(
            frame,
            dismiss_area,
            DISMISS_TEXT,
            DISMISS_COLOR,
            self.state.focused == DialogChoice::Dismiss,
        );
        render_dialog_button(
            frame,
            confirm_area,
            CONFIRM_TEXT,
            CONFIRM_COLOR,
            self.state.focused == DialogChoice::Confirm,
        );

        self.state.dialog_rect = Some(overlay);
        self.state.dismiss_rect = Some(dismiss_area).filter(|rect| !rect.is_empty());
        self.state.confirm_rect = Some(confirm_area).filter(|rect| !rect.is_empty());
    }
}

fn render_dialog_button(frame: &mut Frame, area: Rect, text: &str, color: Color, focused: bool) {
    let mut border_style = Style::default().fg(color);
    if focused {
        border_style = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
    }
    let button = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .bg(color)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::bordered()
                .border_type(BorderType::Thick)
                .border_style(border_style),
        );
    frame.render_widget(button, area);
}

/// A `width` x `height` rect centred in `outer`, clamped to fit.
fn centered_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let [center_v] = Layout::vertical([Constraint::Length(height.min(outer.height))])
        .flex(Flex::Center)
        .areas(outer);
    let [center] = Layout::horizontal([Constraint::Length(width.min(outer.width))])
        .flex(Flex::Center)
        .areas(center_v);
    center
}
