use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::controller::{intent::Intent, state::ViewState};

/// A screen. Reads controller state, reports what the user asked for.
pub trait View: Send {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &ViewState);

    /// `Some(Intent::None)` consumes the key without doing anything.
    fn handle_input(&mut self, key: KeyEvent, state: &ViewState) -> Option<Intent>;

    /// Short key legend for the status line.
    fn hints(&self, state: &ViewState) -> &'static str;
}
