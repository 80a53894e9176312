use futures::Stream;

use crate::{subscribe_with, Mode, WatcherConfig};

use super::HeadlessHost;

pub async fn subscribe() -> anyhow::Result<impl Stream<Item = Mode> + Send> {
    subscribe_with(HeadlessHost, WatcherConfig::default())
}
