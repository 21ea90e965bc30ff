//! # Main Menu Screen
//!
//! Title plate on a backdrop, then three buttons: start the game, open
//! settings, exit. Tapping a button emits a `MenuEvent`; the caller turns
//! it into a core action.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `MainMenuState` lives in `TuiState`
//! - `MainMenuScreen` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::game_button::{GameButton, button_column, column_height};
use crate::tui::components::game_title::GameTitle;
use crate::tui::event::TuiEvent;
use crate::tui::ui::hit_test;

pub const MENU_BACKGROUND: Color = Color::Rgb(0x2B, 0x22, 0x1A);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    StartGame,
    OpenSettings,
    Exit,
}

struct MenuItem {
    text: &'static str,
    icon: &'static str,
    event: MenuEvent,
}

const MENU_ITEMS: [MenuItem; 3] = [
    MenuItem {
        text: "Начать игру",
        icon: "▶",
        event: MenuEvent::StartGame,
    },
    MenuItem {
        text: "Настройки",
        icon: "⚙",
        event: MenuEvent::OpenSettings,
    },
    MenuItem {
        text: "Выход",
        icon: "⏻",
        event: MenuEvent::Exit,
    },
];

/// Persistent state for the main menu.
#[derive(Debug, Default)]
pub struct MainMenuState {
    pub focused: usize,
    /// Where each button was drawn last frame, for click hit testing.
    pub button_rects: Vec<Rect>,
}

impl MainMenuState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for MainMenuState {
    type Event = MenuEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<MenuEvent> {
        match event {
            TuiEvent::FocusNext => {
                self.focused = (self.focused + 1) % MENU_ITEMS.len();
                None
            }
            TuiEvent::FocusPrev => {
                self.focused = (self.focused + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
                None
            }
            TuiEvent::Submit => MENU_ITEMS.get(self.focused).map(|item| item.event),
            TuiEvent::MouseClick(col, row) => {
                let index = hit_test(&self.button_rects, *col, *row)?;
                self.focused = index;
                MENU_ITEMS.get(index).map(|item| item.event)
            }
            TuiEvent::InputChar('q') => Some(MenuEvent::Exit),
            _ => None,
        }
    }
}

/// Transient render wrapper for the main menu.
pub struct MainMenuScreen<'a> {
    state: &'a mut MainMenuState,
    title: &'a str,
    icons: bool,
}

impl<'a> MainMenuScreen<'a> {
    pub fn new(state: &'a mut MainMenuState, title: &'a str, icons: bool) -> Self {
        Self { state, title, icons }
    }
}

impl Component for MainMenuScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Fill, Length};

        frame.render_widget(Block::new().style(Style::default().bg(MENU_BACKGROUND)), area);

        let title_width = area.width.saturating_sub(4);
        let mut title = GameTitle::new(self.title);
        let title_height = title.required_height(title_width);

        let [_, title_row, _, buttons_area, _] = Layout::vertical([
            Length(1),
            Length(title_height),
            Fill(1),
            Length(column_height(MENU_ITEMS.len())),
            Fill(1),
        ])
        .areas(area);

        let [_, title_area, _] =
            Layout::horizontal([Length(2), Fill(1), Length(2)]).areas(title_row);
        title.render(frame, title_area);

        self.state.button_rects = button_column(buttons_area, MENU_ITEMS.len());
        for (index, (item, rect)) in MENU_ITEMS
            .iter()
            .zip(self.state.button_rects.iter())
            .enumerate()
        {
            if rect.height == 0 {
                continue;
            }
            GameButton::new(item.text)
                .icon(self.icons.then_some(item.icon))
                .focused(index == self.state.focused)
                .render(frame, *rect);
        }
    }
}
