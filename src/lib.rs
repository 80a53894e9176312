//! Keep a page's theme and mode toggle in sync with the system color scheme.
//!
//! The [`ColorSchemeWatcher`] listens on the `(prefers-color-scheme: dark)`
//! and `(prefers-color-scheme: light)` media queries. When one of them
//! changes and currently matches, it runs the page's theme routine and flips
//! the optional mode toggle checkbox to follow.
//!
//! # Examples
//!
//! ```
//! let mode = color_scheme_sync::detect();
//!
//! match mode {
//!     // Dark mode
//!     color_scheme_sync::Mode::Dark => {},
//!     // Light mode
//!     color_scheme_sync::Mode::Light => {},
//!     // Unspecified
//!     color_scheme_sync::Mode::Default => {},
//! }
//! ```

mod config;
mod error;
mod host;
mod notify;
mod platforms;
mod watcher;

use platforms::platform;

pub use config::WatcherConfig;
pub use error::{Result, WatchError};
pub use host::{Host, ModeSwitch, ThemeRoutine};
pub use notify::{detect_with, subscribe_with};
pub use watcher::{ColorSchemeWatcher, Installation};

/// Enum representing dark mode, light mode, or unspecified.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Mode {
    /// Dark mode
    Dark,
    /// Light mode
    Light,
    /// Unspecified
    Default,
}

impl Mode {
    fn from_bool(b: bool) -> Self {
        if b {
            Mode::Dark
        } else {
            Mode::Light
        }
    }
}

impl From<SchemeQuery> for Mode {
    fn from(query: SchemeQuery) -> Self {
        Mode::from_bool(query.is_dark())
    }
}

/// One of the two color-scheme media queries the watcher observes.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum SchemeQuery {
    Dark,
    Light,
}

impl SchemeQuery {
    pub const ALL: [SchemeQuery; 2] = [SchemeQuery::Dark, SchemeQuery::Light];

    pub fn is_dark(self) -> bool {
        self == SchemeQuery::Dark
    }

    /// Checked state the mode toggle should take when this query matches.
    pub fn checked(self) -> bool {
        self.is_dark()
    }
}

/// Detect if light mode or dark mode is preferred. If the preference can't be detected, fall back to [`Mode::Default`].
pub use platform::detect::detect;
/// Stream of preference changes reported by the host environment.
pub use platform::notify::subscribe;

#[cfg(target_arch = "wasm32")]
pub use platform::{init_logging, install, install_with_config, WebHost, WebThemeRoutine};
