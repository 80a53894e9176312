//! Fallback for targets without a browser: media queries are never
//! available, so the watcher installs nothing and detection reports
//! [`Mode::Default`](crate::Mode::Default).

use crate::{Host, ModeSwitch, Result, SchemeQuery, WatcherConfig};

pub mod detect;
pub mod notify;

/// Host with no media-query support and no document.
#[derive(Copy, Clone, Debug, Default)]
pub struct HeadlessHost;

/// A mode switch that can never exist.
pub enum NoSwitch {}

impl ModeSwitch for NoSwitch {
    fn set_checked(&self, _checked: bool) {
        match *self {}
    }
}

impl Host for HeadlessHost {
    type Switch = NoSwitch;

    fn supports_media_queries(&self) -> bool {
        false
    }

    fn matches(&self, _config: &WatcherConfig, _query: SchemeQuery) -> bool {
        false
    }

    fn on_change(
        &self,
        _config: &WatcherConfig,
        _query: SchemeQuery,
        _listener: Box<dyn FnMut()>,
    ) -> Result<()> {
        Ok(())
    }

    fn mode_switch(&self, _config: &WatcherConfig) -> Option<NoSwitch> {
        None
    }
}
