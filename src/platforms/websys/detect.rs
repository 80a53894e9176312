use crate::{detect_with, Mode, WatcherConfig};

use super::WebHost;

pub fn detect() -> Mode {
    match WebHost::new() {
        Some(host) => detect_with(&host, &WatcherConfig::default()),
        None => Mode::Default,
    }
}
