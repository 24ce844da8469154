use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::{
    controller::intent::Intent,
    ui::{
        app::App,
        input::InputHandler,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    /// Waits for the next terminal event or fetch completion and applies it.
    /// Returns whether the screen needs redrawing.
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let fetch_rx = app.controller.event_rx.clone();

        let mut should_render = tokio::select! {
            evt = tui.next() => match evt {
                Some(evt) => Self::handle_event(app, evt, tui)?,
                None => {
                    app.should_quit = true;
                    false
                }
            },
            Ok(evt) = fetch_rx.recv_async() => {
                app.controller.handle_event(evt);
                true
            }
        };

        if app.controller.drain_events() {
            should_render = true;
        }

        Ok(should_render)
    }

    pub fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => app.controller.init(),
            TerminalEvent::Quit => app.should_quit = true,
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Tick => return Ok(app.has_focus),
            TerminalEvent::Resize(..) => {}
        }

        Ok(true)
    }

    fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }
        if evt.code == KeyCode::Char('c') && evt.modifiers == KeyModifiers::CONTROL {
            Self::dispatch(app, Intent::Quit);
            return;
        }

        let intent = app.router.handle_input(evt, app.controller.state());
        if let Some(intent) = intent {
            Self::dispatch(app, intent);
            return;
        }

        if let Some(intent) = InputHandler::handle_key(evt) {
            Self::dispatch(app, intent);
        }
    }

    fn dispatch(app: &mut App, intent: Intent) {
        match intent {
            Intent::Quit => app.should_quit = true,
            Intent::None => {}
            Intent::RequestSelect(id) if app.controller.state().recommender.visible => {
                debug!("Opening song {} from recommendations", id);
                app.controller.dispatch(Intent::RequestSelect(id));
                app.controller.dispatch(Intent::ToggleRecommender);
            }
            intent => app.controller.dispatch(intent),
        }
    }
}
