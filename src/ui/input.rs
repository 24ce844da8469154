use crate::controller::intent::Intent;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    /// Keys that work in every view unless the view consumed them first.
    pub fn handle_key(key: KeyEvent) -> Option<Intent> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Intent::Quit),
            (KeyCode::Char('q'), _) => Some(Intent::Quit),
            (KeyCode::Char('r'), _) => Some(Intent::ToggleRecommender),
            _ => None,
        }
    }
}
