//! Keyboard input → application events.

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::state::{AppState, LogView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    Refresh,
    NextContainer,
    PreviousContainer,
    OpenLogs,
    CloseLogs,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        // The log view captures input while open.
        if state.log_view != LogView::Closed {
            return match key_event.code {
                KeyCode::Esc | KeyCode::Char('q') => Some(AppEvent::CloseLogs),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::Char('q') => Some(AppEvent::Quit),
            KeyCode::Char('r') => Some(AppEvent::Refresh),
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::PreviousContainer),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::NextContainer),
            KeyCode::Enter => Some(AppEvent::OpenLogs),
            _ => None,
        }
    }
}
