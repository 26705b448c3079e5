//! Session commands.
//!
//! Every tray menu click and every timer tick becomes one of these and is
//! applied to the session by [`TraySession::handle`](super::TraySession::handle).
//! This module is pure Rust with no FFI dependencies, making it fully testable.

// Menu item IDs
pub const MENU_SETTINGS: u32 = 1001;
pub const MENU_START: u32 = 1002;
pub const MENU_STOP: u32 = 1003;
pub const MENU_ABOUT: u32 = 1004;
pub const MENU_EXIT: u32 = 1005;

/// A discrete action applied to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Carousel timer fired
    Tick,

    /// Open the settings dialog
    OpenSettings,

    /// Start cycling icons
    Start,

    /// Stop cycling icons
    Stop,

    /// Show the About box
    About,

    /// Shut down the application
    Exit,
}

/// One row of the tray context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Item {
        id: u32,
        label: &'static str,
        command: Command,
    },
    Separator,
}

/// Tray context menu, top to bottom.
pub const TRAY_MENU: [MenuEntry; 7] = [
    MenuEntry::Item {
        id: MENU_SETTINGS,
        label: "Settings",
        command: Command::OpenSettings,
    },
    MenuEntry::Separator,
    MenuEntry::Item {
        id: MENU_START,
        label: "Start carousel",
        command: Command::Start,
    },
    MenuEntry::Item {
        id: MENU_STOP,
        label: "Stop carousel",
        command: Command::Stop,
    },
    MenuEntry::Separator,
    MenuEntry::Item {
        id: MENU_ABOUT,
        label: "About",
        command: Command::About,
    },
    MenuEntry::Item {
        id: MENU_EXIT,
        label: "Exit",
        command: Command::Exit,
    },
];

impl Command {
    /// Map a tray menu item ID to its command.
    pub fn from_menu_id(id: u32) -> Option<Command> {
        TRAY_MENU.iter().find_map(|entry| match *entry {
            MenuEntry::Item {
                id: item_id,
                command,
                ..
            } if item_id == id => Some(command),
            _ => None,
        })
    }

    /// Returns a human-readable description of the command for logging.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Tick => "Advance to next icon",
            Command::OpenSettings => "Open settings dialog",
            Command::Start => "Start carousel",
            Command::Stop => "Stop carousel",
            Command::About => "Show about box",
            Command::Exit => "Exit application",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_ids_map_to_commands() {
        assert_eq!(Command::from_menu_id(MENU_SETTINGS), Some(Command::OpenSettings));
        assert_eq!(Command::from_menu_id(MENU_START), Some(Command::Start));
        assert_eq!(Command::from_menu_id(MENU_STOP), Some(Command::Stop));
        assert_eq!(Command::from_menu_id(MENU_ABOUT), Some(Command::About));
        assert_eq!(Command::from_menu_id(MENU_EXIT), Some(Command::Exit));
    }

    #[test]
    fn test_unknown_menu_id() {
        assert_eq!(Command::from_menu_id(0), None);
        assert_eq!(Command::from_menu_id(9999), None);
    }

    #[test]
    fn test_menu_layout() {
        let labels: Vec<&str> = TRAY_MENU
            .iter()
            .map(|entry| match entry {
                MenuEntry::Item { label, .. } => *label,
                MenuEntry::Separator => "-",
            })
            .collect();
        assert_eq!(
            labels,
            ["Settings", "-", "Start carousel", "Stop carousel", "-", "About", "Exit"]
        );
    }

    #[test]
    fn test_all_commands_have_descriptions() {
        let commands = [
            Command::Tick,
            Command::OpenSettings,
            Command::Start,
            Command::Stop,
            Command::About,
            Command::Exit,
        ];

        for command in commands {
            assert!(!command.description().is_empty());
        }
    }
}
