use crate::domain::feeds::FeedItem;
use crate::ports::outbound::feed_source::FeedSource;
use std::time::Duration;
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;

/// Polls `source` right away and then once per `delay`, whatever the previous
/// attempt returned. Stops when the update channel is closed.
pub fn spawn<F>(source: F, delay: Duration, updates: Sender<FeedItem>) -> JoinHandle<()>
where
    F: FeedSource + Send + Sync + 'static,
{
    tokio::spawn(async move {
        loop {
            if !tick(&source, &updates).await {
                log::warn!("Update channel for {} closed, stopping", source.feed());
                return;
            }
            tokio::time::sleep(delay).await;
        }
    })
}

/// Returns `false` once nobody listens to the updates anymore.
async fn tick<F: FeedSource>(source: &F, updates: &Sender<FeedItem>) -> bool {
    match source.fetch().await {
        Ok(item) => {
            log::debug!("Polled {}: {:?}", source.feed(), item);
            updates.send(item).await.is_ok()
        }
        Err(why) => {
            log::error!("Could not poll {} - {why}", source.feed());
            !updates.is_closed()
        }
    }
}
