//! Browser platform built on `web-sys`.

use std::str::FromStr;

use log::{debug, error, info};
use wasm_bindgen::{closure::Closure, prelude::*, JsCast};
use web_sys::{HtmlInputElement, MediaQueryList, Window};

use crate::{
    ColorSchemeWatcher, Host, Installation, ModeSwitch, Result, SchemeQuery, ThemeRoutine,
    WatchError, WatcherConfig,
};

pub mod detect;
pub mod notify;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = identifyAndSetColorScheme)]
    fn identify_and_set_color_scheme() -> std::result::Result<(), JsValue>;
}

/// Host backed by the global `window` and its document.
#[derive(Clone, Debug)]
pub struct WebHost {
    window: Window,
}

impl WebHost {
    /// Returns `None` outside of a window context (e.g. in a worker).
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }

    fn media_query_list(&self, config: &WatcherConfig, query: SchemeQuery) -> Option<MediaQueryList> {
        self.window
            .match_media(config.media_query(query))
            .ok()
            .flatten()
    }
}

impl Host for WebHost {
    type Switch = HtmlInputElement;

    fn supports_media_queries(&self) -> bool {
        js_sys::Reflect::get(&self.window, &JsValue::from_str("matchMedia"))
            .map(|value| value.is_function())
            .unwrap_or(false)
    }

    fn matches(&self, config: &WatcherConfig, query: SchemeQuery) -> bool {
        self.media_query_list(config, query)
            .map(|list| list.matches())
            .unwrap_or(false)
    }

    fn on_change(
        &self,
        config: &WatcherConfig,
        query: SchemeQuery,
        listener: Box<dyn FnMut()>,
    ) -> Result<()> {
        let list = self
            .media_query_list(config, query)
            .ok_or_else(|| WatchError::Registration {
                query,
                reason: format!("matchMedia returned nothing for {}", config.media_query(query)),
            })?;

        let closure = Closure::wrap(listener);
        list.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .map_err(|err| WatchError::Registration {
                query,
                reason: format!("{:?}", err),
            })?;
        // Listeners live as long as the page.
        closure.forget();

        Ok(())
    }

    fn mode_switch(&self, config: &WatcherConfig) -> Option<HtmlInputElement> {
        let document = self.window.document()?;
        let toggle = document
            .query_selector(&config.toggle_selector)
            .ok()
            .flatten()?;
        let checkbox = toggle
            .query_selector(&config.checkbox_selector)
            .ok()
            .flatten()?;
        checkbox.dyn_into::<HtmlInputElement>().ok()
    }
}

impl ModeSwitch for HtmlInputElement {
    fn set_checked(&self, checked: bool) {
        HtmlInputElement::set_checked(self, checked)
    }
}

/// The page's global `identifyAndSetColorScheme()` function.
#[derive(Copy, Clone, Debug, Default)]
pub struct WebThemeRoutine;

impl ThemeRoutine for WebThemeRoutine {
    fn apply(&self) {
        if let Err(err) = identify_and_set_color_scheme() {
            error!("identifyAndSetColorScheme failed: {:?}", err);
        }
    }
}

fn start(config: WatcherConfig) -> Result<Installation> {
    let Some(host) = WebHost::new() else {
        info!("no global window, color scheme watcher disabled");
        return Ok(Installation::Unsupported);
    };

    ColorSchemeWatcher::new(host, WebThemeRoutine, config).install()
}

/// Install the watcher with the default selectors and queries.
#[wasm_bindgen]
pub fn install() {
    install_config(WatcherConfig::default());
}

/// Install the watcher with a JSON [`WatcherConfig`]. Invalid JSON is logged
/// and nothing is installed.
#[wasm_bindgen(js_name = installWithConfig)]
pub fn install_with_config(json: &str) {
    match WatcherConfig::from_json(json) {
        Ok(config) => install_config(config),
        Err(err) => error!("invalid color scheme watcher config: {}", err),
    }
}

fn install_config(config: WatcherConfig) {
    match start(config) {
        Ok(installation) => debug!("color scheme watcher: {:?}", installation),
        Err(err) => error!("failed to install color scheme watcher: {}", err),
    }
}

/// Route `log` output to the browser console. Unknown levels fall back to `info`.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) {
    let level = log::Level::from_str(level).unwrap_or(log::Level::Info);
    if let Err(err) = console_log::init_with_level(level) {
        // A logger is already set; keep it.
        debug!("console logger not installed: {}", err);
    }
}
