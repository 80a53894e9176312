use anyhow::Context;
use futures::Stream;

use crate::{subscribe_with, Mode, WatcherConfig};

use super::WebHost;

pub async fn subscribe() -> anyhow::Result<impl Stream<Item = Mode> + Send> {
    let host = WebHost::new().context("no global window")?;
    subscribe_with(host, WatcherConfig::default())
}
