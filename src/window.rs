//! Launcher window shell configuration.
//!
//! The desktop launcher is a single borderless strip that stays on top of
//! other windows and loads the bundled page. The GUI toolkit is handed this
//! configuration once at startup; nothing here is re-evaluated afterwards.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub frame: bool,
    pub transparent: bool,
    pub resizable: bool,
    pub always_on_top: bool,
    /// Document loaded into the window
    pub document: String,
    /// Quit the app once its last window closes
    pub quit_on_last_close: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 80,
            frame: false,
            transparent: true,
            resizable: false,
            always_on_top: true,
            document: "index.html".to_string(),
            quit_on_last_close: true,
        }
    }
}
