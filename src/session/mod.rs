//! Tray session and its command/notification vocabulary.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐
//! │  Tray menu  │     │    Timer    │
//! └──────┬──────┘     └──────┬──────┘
//!        │ Command           │ Command::Tick
//!        ▼                   ▼
//! ┌─────────────────────────────────────────┐
//! │              TraySession                │
//! │  ConfigStore · IconCarousel · Config    │
//! └────────────────────┬────────────────────┘
//!                      │ TrayHost calls
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │   Platform (icon, timer, dialogs)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Module Structure
//!
//! - [`commands`]: `Command` enum and the tray menu layout
//! - [`notices`]: balloon and message box content
//! - [`host`]: the `TrayHost` trait
//! - [`tray_session`]: `TraySession`

pub mod commands;
pub mod host;
pub mod notices;
pub mod tray_session;

pub use commands::{Command, MenuEntry, TRAY_MENU};
pub use host::TrayHost;
pub use notices::{Alert, AlertLevel, Notice};
pub use tray_session::{Flow, TraySession};
