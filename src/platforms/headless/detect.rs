use crate::{detect_with, Mode, WatcherConfig};

use super::HeadlessHost;

pub fn detect() -> Mode {
    detect_with(&HeadlessHost, &WatcherConfig::default())
}
