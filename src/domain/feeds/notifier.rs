use crate::domain::feeds::outbox::Outgoing;
use crate::domain::feeds::{Feed, FeedItem};
use crate::ports::inbound::client::{Photo, Picture};
use crate::ports::outbound::property_store::{PropertyStore, Scope};
use tokio::sync::mpsc::{Receiver, UnboundedSender};

/// Turns polled feed items into messages for every subscribed chat, once per
/// distinct item.
pub struct Notifier<S> {
    feed: Feed,
    store: S,
    outbox: UnboundedSender<Outgoing>,
    last_notified: Option<String>,
}

impl<S: PropertyStore + Send + Sync> Notifier<S> {
    pub fn new(feed: Feed, store: S, outbox: UnboundedSender<Outgoing>) -> Self {
        Self {
            feed,
            store,
            outbox,
            last_notified: None,
        }
    }

    pub async fn run(mut self, mut updates: Receiver<FeedItem>) {
        self.last_notified = match self
            .store
            .get(self.feed.last_notified_key(), Scope::Global)
            .await
        {
            Ok(last) => last,
            Err(why) => {
                log::error!("Could not get last notified {} - {why}", self.feed);
                None
            }
        };

        while let Some(item) = updates.recv().await {
            self.handle(item).await;
        }

        log::info!("Stopped {} notifier", self.feed);
    }

    pub async fn handle(&mut self, item: FeedItem) {
        if self.last_notified.as_deref() == Some(item.identity()) {
            log::debug!("{} unchanged: {}", self.feed, item.identity());
            return;
        }

        let identity = item.identity().to_string();
        self.last_notified = Some(identity.clone());
        if let Err(why) = self
            .store
            .set(self.feed.last_notified_key(), Scope::Global, identity)
            .await
        {
            log::warn!("Could not persist last notified {} - {why}", self.feed);
        }

        let subscribers = match self.store.members(self.feed.subscribers_key()).await {
            Ok(subscribers) => subscribers,
            Err(why) => {
                log::error!("Could not get {} subscribers - {why}", self.feed);
                return;
            }
        };

        log::info!(
            "New {}: '{}', notifying {} chats",
            self.feed,
            item.identity(),
            subscribers.len()
        );

        let photo = Photo::new(
            Picture::Remote(item.picture_url().to_string()),
            item.caption(),
        );
        for chat in subscribers {
            if self
                .outbox
                .send(Outgoing::new(chat, photo.clone()))
                .is_err()
            {
                log::error!("Outbox closed, dropping {} notification", self.feed);
                return;
            }
        }
    }
}
