use std::sync::Arc;

use ratatui::Frame;
use tracing::info;

use crate::{config::AppConfig, controller::Controller, http::ApiService};

use super::{
    layout::AppLayout,
    router::Router,
    tui::{self, TerminalEvent},
    util::handler::EventHandler,
};

pub struct App {
    pub controller: Controller,
    pub router: Router,
    pub config: AppConfig,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> color_eyre::Result<Self> {
        let api = Arc::new(ApiService::new(config.api_url.clone())?);
        info!("Using lyrics API at {}", config.api_url);

        Ok(Self {
            controller: Controller::new(api, config.discard_stale),
            router: Router::new(),
            config,
            has_focus: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new(self.config.tick_rate)?;
        tui.enter()?;

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui)?;
        let mut should_render = true;
        while !self.should_quit {
            if should_render {
                tui.draw(|f| self.ui(f))?;
            }
            should_render = EventHandler::handle_events(self, &mut tui).await?;
        }

        self.controller.shutdown();
        tui.exit()?;
        Ok(())
    }

    fn ui(&mut self, frame: &mut Frame) {
        if self.has_focus {
            let area = frame.area();
            AppLayout::new(self).render(frame, area);
        }
    }
}
