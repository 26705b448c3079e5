//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use icon_carousel::carousel::TrayIcon;
use icon_carousel::error::IconError;
use icon_carousel::model::Configuration;
use icon_carousel::session::{Alert, Notice, TrayHost};
use icon_carousel::settings::SettingsEditor;

/// Something the session asked the host to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Icon(PathBuf),
    DefaultIcon,
    TimerStarted(Duration),
    TimerStopped,
    Notice(Notice),
    Alert(Alert),
    Quit,
}

type SettingsResponder = Box<dyn FnMut(SettingsEditor) -> Option<Configuration>>;

/// Host that records every call instead of touching the shell.
#[derive(Default)]
pub struct FakeHost {
    pub events: Vec<Event>,
    responder: Option<SettingsResponder>,
    rejected: Vec<PathBuf>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the next settings dialogs with `responder`.
    pub fn on_settings(
        &mut self,
        responder: impl FnMut(SettingsEditor) -> Option<Configuration> + 'static,
    ) {
        self.responder = Some(Box::new(responder));
    }

    /// Make `set_icon` fail for `path`, as the shell would for a bad icon.
    pub fn reject_icon(&mut self, path: impl Into<PathBuf>) {
        self.rejected.push(path.into());
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Icons shown so far, in order.
    pub fn shown_icons(&self) -> Vec<PathBuf> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Icon(path) => Some(path.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Alert(alert) => Some(alert.clone()),
                _ => None,
            })
            .collect()
    }
}

impl TrayHost for FakeHost {
    fn set_icon(&mut self, icon: &TrayIcon) -> Result<(), IconError> {
        if self.rejected.contains(&icon.path) {
            return Err(IconError::Platform {
                path: icon.path.clone(),
                message: "rejected".to_string(),
            });
        }
        self.events.push(Event::Icon(icon.path.clone()));
        Ok(())
    }

    fn set_default_icon(&mut self) {
        self.events.push(Event::DefaultIcon);
    }

    fn start_timer(&mut self, interval: Duration) {
        self.events.push(Event::TimerStarted(interval));
    }

    fn stop_timer(&mut self) {
        self.events.push(Event::TimerStopped);
    }

    fn notify(&mut self, notice: Notice) {
        self.events.push(Event::Notice(notice));
    }

    fn alert(&mut self, alert: &Alert) {
        self.events.push(Event::Alert(alert.clone()));
    }

    fn edit_settings(&mut self, editor: SettingsEditor) -> Option<Configuration> {
        self.responder.as_mut().and_then(|respond| respond(editor))
    }

    fn quit(&mut self) {
        self.events.push(Event::Quit);
    }
}

/// Write a small solid-color PNG.
pub fn write_png(path: &Path) {
    let img = image::RgbaImage::from_pixel(32, 32, image::Rgba([200, 40, 40, 255]));
    img.save(path).expect("write png");
}

/// Write a placeholder `.ico` (passed through to the shell, never decoded here).
pub fn write_ico(path: &Path) {
    fs::write(path, [0u8, 0, 1, 0]).expect("write ico");
}

/// Write a `config.json` with the given icons.
pub fn write_config(path: &Path, icons: &[PathBuf], interval_ms: u32, auto_start: bool) {
    let config = Configuration {
        icon_paths: icons.to_vec(),
        interval_ms,
        auto_start,
    };
    let json = serde_json::to_string_pretty(&config).expect("serialize config");
    fs::write(path, json).expect("write config");
}
