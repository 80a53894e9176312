use crate::{Result, SchemeQuery, WatcherConfig};

/// Environment the watcher runs in: media queries plus the document.
///
/// Match state must be read live on every call to [`Host::matches`], never
/// cached, since change events can arrive stale or duplicated.
pub trait Host {
    type Switch: ModeSwitch;

    /// Whether the environment can evaluate and observe media queries.
    fn supports_media_queries(&self) -> bool;

    /// Current match state of `query`. Hosts without support report `false`.
    fn matches(&self, config: &WatcherConfig, query: SchemeQuery) -> bool;

    /// Register `listener` for change notifications on `query`. The listener
    /// stays registered for the lifetime of the host.
    fn on_change(
        &self,
        config: &WatcherConfig,
        query: SchemeQuery,
        listener: Box<dyn FnMut()>,
    ) -> Result<()>;

    /// Checkbox of the mode toggle, if the document has both the toggle
    /// element and a checkbox inside it.
    fn mode_switch(&self, config: &WatcherConfig) -> Option<Self::Switch>;
}

/// The checkbox input of the mode toggle.
pub trait ModeSwitch {
    fn set_checked(&self, checked: bool);
}

/// External routine that works out the active theme and applies it.
pub trait ThemeRoutine {
    fn apply(&self);
}

impl<F: Fn()> ThemeRoutine for F {
    fn apply(&self) {
        self()
    }
}
