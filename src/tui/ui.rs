use ratatui::Frame;
use ratatui::layout::{Position, Rect};

use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ExitConfirmationDialog, GameScreen, MainMenuScreen, SettingsScreen};

/// Draw the screen on top of the back stack, plus the exit dialog if open.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let area = frame.area();

    match app.current_screen() {
        Route::MainMenu => {
            MainMenuScreen::new(&mut tui.main_menu, &app.title, tui.icons).render(frame, area)
        }
        Route::Settings => SettingsScreen::new(&mut tui.settings).render(frame, area),
        Route::Game => GameScreen::new(&mut tui.game).render(frame, area),
    }

    if app.exit_dialog_visible() {
        ExitConfirmationDialog::new(&mut tui.exit_dialog).render(frame, area);
    }
}

/// Hit test: index of the first rect containing the screen cell `(col, row)`.
pub fn hit_test(rects: &[Rect], col: u16, row: u16) -> Option<usize> {
    let position = Position::new(col, row);
    rects.iter().position(|rect| rect.contains(position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{buffer_text, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_hit_test() {
        let rects = [Rect::new(0, 0, 10, 3), Rect::new(0, 4, 10, 3)];
        assert_eq!(hit_test(&rects, 0, 0), Some(0));
        assert_eq!(hit_test(&rects, 9, 2), Some(0));
        assert_eq!(hit_test(&rects, 5, 3), None);
        assert_eq!(hit_test(&rects, 5, 6), Some(1));
        assert_eq!(hit_test(&rects, 10, 5), None);
        assert_eq!(hit_test(&[], 0, 0), None);
    }

    #[test]
    fn test_hit_test_skips_empty_rects() {
        let rects = [Rect::new(0, 0, 10, 0), Rect::new(0, 0, 10, 3)];
        assert_eq!(hit_test(&rects, 1, 0), Some(1));
    }

    #[test]
    fn test_draws_main_menu() {
        let app = test_app();
        let mut tui = TuiState::new(true);
        let text = draw(&app, &mut tui);
        assert!(text.contains("Начать игру"));
        assert!(!text.contains("Выход из игры"));
        assert_eq!(tui.main_menu.button_rects.len(), 3);
    }

    #[test]
    fn test_draws_settings_and_game() {
        let mut app = test_app();
        let mut tui = TuiState::new(true);

        update(&mut app, Action::Navigate(Route::Settings));
        assert!(draw(&app, &mut tui).contains("Здесь будут настройки игры"));

        update(&mut app, Action::NavigateBack);
        update(&mut app, Action::Navigate(Route::Game));
        assert!(draw(&app, &mut tui).contains("Здесь будет игра-пазл"));
    }

    #[test]
    fn test_draws_dialog_over_menu() {
        let mut app = test_app();
        let mut tui = TuiState::new(true);
        update(&mut app, Action::RequestExit);
        let text = draw(&app, &mut tui);
        assert!(text.contains("Выход из игры"));
        assert!(tui.exit_dialog.dialog_rect.is_some());
    }
}
