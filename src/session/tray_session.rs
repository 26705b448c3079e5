//! Tray session: the live application state.
//!
//! Owns the active configuration, the config store and the carousel, and
//! drives a [`TrayHost`]. All mutation goes through [`TraySession::handle`];
//! settings changes re-run the whole setup sequence.

use std::path::PathBuf;

use super::commands::Command;
use super::host::TrayHost;
use super::notices::{Alert, Notice};
use crate::carousel::{prepare_icon, resolve_icons, IconCarousel, StartError};
use crate::model::Configuration;
use crate::settings::SettingsEditor;
use crate::storage::{ConfigOrigin, ConfigStore};

/// What the event loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct TraySession<H: TrayHost> {
    host: H,
    store: ConfigStore,
    config: Configuration,
    carousel: IconCarousel,
    fallback_dir: PathBuf,
}

impl<H: TrayHost> TraySession<H> {
    /// Load the configuration and set up the carousel.
    pub fn new(host: H, store: ConfigStore, fallback_dir: impl Into<PathBuf>) -> Self {
        let loaded = store.load();
        // Store already logged the fallback cases.
        if let ConfigOrigin::File = loaded.origin {
            tracing::info!("Loaded {}", store.path().display());
        }

        let mut session = Self {
            host,
            store,
            config: loaded.config,
            carousel: IconCarousel::new(),
            fallback_dir: fallback_dir.into(),
        };
        session.setup();
        session
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn carousel(&self) -> &IconCarousel {
        &self.carousel
    }

    pub fn is_running(&self) -> bool {
        self.carousel.is_running()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Apply one command.
    pub fn handle(&mut self, command: Command) -> Flow {
        if command != Command::Tick {
            tracing::debug!("Command: {}", command.description());
        }

        match command {
            Command::Tick => self.tick(),
            Command::Start => self.start(),
            Command::Stop => self.stop(),
            Command::OpenSettings => {
                let editor = SettingsEditor::new(&self.config);
                match self.host.edit_settings(editor) {
                    Some(config) => self.apply_settings(config),
                    None => tracing::debug!("Settings dismissed"),
                }
            }
            Command::About => self.host.alert(&Alert::About),
            Command::Exit => {
                self.shutdown();
                return Flow::Exit;
            }
        }
        Flow::Continue
    }

    /// Replace the configuration, persist it and redo the setup.
    pub fn apply_settings(&mut self, config: Configuration) {
        self.halt();
        self.config = config;

        if let Err(e) = self.store.save(&self.config) {
            tracing::error!("Failed to save configuration: {}", e);
            self.host.alert(&Alert::SaveFailed {
                reason: e.to_string(),
            });
        }

        self.setup();
    }

    fn setup(&mut self) {
        let icons = resolve_icons(&self.config.icon_paths, &self.fallback_dir);
        tracing::info!("Resolved {} icon(s)", icons.len());
        self.carousel.load(icons);

        if self.carousel.is_empty() {
            self.host.set_default_icon();
            self.host.alert(&Alert::NoIconsFound);
            return;
        }

        self.show_current();

        if self.config.auto_start && self.carousel.start().is_ok() {
            self.host.start_timer(self.config.interval());
            tracing::info!("Carousel auto-started ({} ms)", self.config.interval_ms);
        }
    }

    fn tick(&mut self) {
        if !self.carousel.is_running() {
            return;
        }
        let index = self.carousel.advance();
        tracing::debug!("Tick: icon {}", index);
        self.show_current();
    }

    fn start(&mut self) {
        match self.carousel.start() {
            Ok(()) => {
                self.host.start_timer(self.config.interval());
                self.host.notify(Notice::CarouselStarted);
                tracing::info!("Carousel started");
            }
            Err(StartError::NotEnoughIcons { found }) => {
                tracing::info!("Start rejected: {} icon(s)", found);
                self.host.alert(&Alert::NeedMoreIcons { found });
            }
        }
    }

    fn stop(&mut self) {
        self.halt();
        self.host.notify(Notice::CarouselStopped);
        tracing::info!("Carousel stopped");
    }

    fn shutdown(&mut self) {
        self.halt();
        self.host.quit();
        tracing::info!("Exiting");
    }

    fn halt(&mut self) {
        self.carousel.stop();
        self.host.stop_timer();
    }

    fn show_current(&mut self) {
        let Some(path) = self.carousel.current_icon() else {
            return;
        };

        let result = prepare_icon(path).and_then(|icon| self.host.set_icon(&icon));
        if let Err(e) = result {
            tracing::error!("{}", e);
            self.host.alert(&Alert::IconLoadFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
        }
    }
}
