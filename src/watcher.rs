use std::rc::Rc;

use log::{debug, info};

use crate::{Host, ModeSwitch, Result, SchemeQuery, ThemeRoutine, WatcherConfig};

/// Outcome of [`ColorSchemeWatcher::install`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Installation {
    /// Listeners were registered on both queries.
    Active,
    /// The host can't observe media queries, nothing was registered.
    Unsupported,
}

/// Reacts to system color-scheme changes by running the theme routine and
/// syncing the mode toggle.
///
/// The watcher keeps no state between events. Cloning is cheap: clones
/// share the host, routine and config.
pub struct ColorSchemeWatcher<H, R> {
    host: Rc<H>,
    routine: Rc<R>,
    config: Rc<WatcherConfig>,
}

impl<H, R> Clone for ColorSchemeWatcher<H, R> {
    fn clone(&self) -> Self {
        Self {
            host: self.host.clone(),
            routine: self.routine.clone(),
            config: self.config.clone(),
        }
    }
}

impl<H, R> ColorSchemeWatcher<H, R>
where
    H: Host + 'static,
    R: ThemeRoutine + 'static,
{
    pub fn new(host: H, routine: R, config: WatcherConfig) -> Self {
        Self {
            host: Rc::new(host),
            routine: Rc::new(routine),
            config: Rc::new(config),
        }
    }

    pub fn config(&self) -> &WatcherConfig {
        &self.config
    }

    /// Subscribe to both color-scheme queries.
    ///
    /// Hosts without media-query support get no listeners and this returns
    /// [`Installation::Unsupported`] rather than an error.
    pub fn install(&self) -> Result<Installation> {
        if !self.host.supports_media_queries() {
            info!("media queries not supported, color scheme watcher disabled");
            return Ok(Installation::Unsupported);
        }

        for query in SchemeQuery::ALL {
            let watcher = self.clone();
            self.host.on_change(
                &self.config,
                query,
                Box::new(move || {
                    watcher.handle_change(query);
                }),
            )?;
            debug!("registered change listener on {}", self.config.media_query(query));
        }

        Ok(Installation::Active)
    }

    /// Handle a change notification for `query`.
    ///
    /// Returns whether the event was acted on. Events for a query that does
    /// not currently match are ignored.
    pub fn handle_change(&self, query: SchemeQuery) -> bool {
        if !self.host.matches(&self.config, query) {
            debug!("ignoring change on {}: query does not match", self.config.media_query(query));
            return false;
        }

        self.routine.apply();

        if self.config.sync_toggle {
            self.check_switch(query.checked());
        }

        true
    }

    /// Set the mode toggle's checkbox to `checked`. Does nothing if the page
    /// has no toggle or the toggle has no checkbox.
    pub fn check_switch(&self, checked: bool) {
        match self.host.mode_switch(&self.config) {
            Some(switch) => switch.set_checked(checked),
            None => debug!("no mode toggle found for {}", self.config.toggle_selector),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct Checkbox(Rc<Cell<Option<bool>>>);

    impl ModeSwitch for Checkbox {
        fn set_checked(&self, checked: bool) {
            self.0.set(Some(checked));
        }
    }

    #[derive(Default)]
    struct StubHost {
        dark: Cell<bool>,
        light: Cell<bool>,
        checked: Rc<Cell<Option<bool>>>,
        has_toggle: bool,
        registered: RefCell<Vec<SchemeQuery>>,
    }

    impl Host for StubHost {
        type Switch = Checkbox;

        fn supports_media_queries(&self) -> bool {
            true
        }

        fn matches(&self, _config: &WatcherConfig, query: SchemeQuery) -> bool {
            match query {
                SchemeQuery::Dark => self.dark.get(),
                SchemeQuery::Light => self.light.get(),
            }
        }

        fn on_change(
            &self,
            _config: &WatcherConfig,
            query: SchemeQuery,
            _listener: Box<dyn FnMut()>,
        ) -> Result<()> {
            self.registered.borrow_mut().push(query);
            Ok(())
        }

        fn mode_switch(&self, _config: &WatcherConfig) -> Option<Checkbox> {
            self.has_toggle.then(|| Checkbox(self.checked.clone()))
        }
    }

    fn watcher(host: StubHost, config: WatcherConfig) -> (ColorSchemeWatcher<StubHost, impl Fn()>, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let routine = move || counter.set(counter.get() + 1);
        (ColorSchemeWatcher::new(host, routine, config), calls)
    }

    #[test]
    fn install_registers_both_queries() {
        let (w, _) = watcher(StubHost::default(), WatcherConfig::default());
        assert_eq!(w.install().expect("Expected install to work"), Installation::Active);
        assert_eq!(*w.host.registered.borrow(), vec![SchemeQuery::Dark, SchemeQuery::Light]);
    }

    #[test]
    fn stale_event_is_ignored() {
        let host = StubHost {
            has_toggle: true,
            ..StubHost::default()
        };
        let (w, calls) = watcher(host, WatcherConfig::default());

        assert!(!w.handle_change(SchemeQuery::Dark));
        assert!(!w.handle_change(SchemeQuery::Light));
        assert_eq!(calls.get(), 0);
        assert_eq!(w.host.checked.get(), None);
    }

    #[test]
    fn light_change_unchecks_toggle() {
        let host = StubHost {
            has_toggle: true,
            ..StubHost::default()
        };
        host.light.set(true);
        host.checked.set(Some(true));
        let (w, calls) = watcher(host, WatcherConfig::default());

        assert!(w.handle_change(SchemeQuery::Light));
        assert_eq!(calls.get(), 1);
        assert_eq!(w.host.checked.get(), Some(false));
    }

    #[test]
    fn routine_only_variant_leaves_toggle_alone() {
        let host = StubHost {
            has_toggle: true,
            ..StubHost::default()
        };
        host.dark.set(true);
        let config = WatcherConfig {
            sync_toggle: false,
            ..WatcherConfig::default()
        };
        let (w, calls) = watcher(host, config);

        assert!(w.handle_change(SchemeQuery::Dark));
        assert_eq!(calls.get(), 1);
        assert_eq!(w.host.checked.get(), None);
    }

    #[test]
    fn check_switch_without_toggle_is_silent() {
        let (w, calls) = watcher(StubHost::default(), WatcherConfig::default());
        w.check_switch(true);
        assert_eq!(calls.get(), 0);
        assert_eq!(w.host.checked.get(), None);
    }
}
