use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use log::{debug, warn};
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Ctrl+C: leave immediately
    ForceQuit,
    /// Esc / Backspace: platform back, or dismiss request when a dialog is open
    Back,
    /// Enter / Space: tap the focused button
    Submit,
    FocusNext,
    FocusPrev,
    InputChar(char),
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(event) => translate(event),
        Err(e) => {
            warn!("Event read failed: {}", e);
            None
        }
    }
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Release/repeat events arrive on terminals with keyboard enhancement
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Esc | KeyCode::Backspace) => Some(TuiEvent::Back),
        (_, KeyCode::Enter | KeyCode::Char(' ')) => Some(TuiEvent::Submit),
        (_, KeyCode::Down | KeyCode::Right | KeyCode::Tab) => Some(TuiEvent::FocusNext),
        (_, KeyCode::Up | KeyCode::Left | KeyCode::BackTab) => Some(TuiEvent::FocusPrev),
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        _ => None,
    }
}
