use std::rc::Rc;

use futures::{channel::mpsc, Stream};

use crate::{Host, Mode, SchemeQuery, WatcherConfig};

/// Detect the preferred mode from the live state of `host`.
pub fn detect_with<H: Host>(host: &H, config: &WatcherConfig) -> Mode {
    if !host.supports_media_queries() {
        return Mode::Default;
    }

    if host.matches(config, SchemeQuery::Dark) {
        Mode::Dark
    } else if host.matches(config, SchemeQuery::Light) {
        Mode::Light
    } else {
        Mode::Default
    }
}

/// Stream the mode of every change event whose query matches at dispatch time.
///
/// On hosts without media-query support the stream ends immediately.
pub fn subscribe_with<H: Host + 'static>(
    host: H,
    config: WatcherConfig,
) -> anyhow::Result<impl Stream<Item = Mode> + Send> {
    let (tx, rx) = mpsc::unbounded();
    if !host.supports_media_queries() {
        return Ok(rx);
    }

    let host = Rc::new(host);
    let config = Rc::new(config);
    for query in SchemeQuery::ALL {
        let tx = tx.clone();
        let listener_host = host.clone();
        let listener_config = config.clone();
        host.on_change(
            &config,
            query,
            Box::new(move || {
                if listener_host.matches(&listener_config, query) {
                    // The receiver may be gone; listeners outlive it.
                    let _ = tx.unbounded_send(Mode::from(query));
                }
            }),
        )?;
    }

    Ok(rx)
}
