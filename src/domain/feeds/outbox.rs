use crate::ports::inbound::client::{ChatId, Photo};
use crate::ports::outbound::broadcaster::Broadcaster;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub struct Outgoing {
    pub chat: ChatId,
    pub photo: Photo,
}

impl Outgoing {
    #[must_use]
    pub fn new(chat: ChatId, photo: Photo) -> Self {
        Self { chat, photo }
    }
}

/// Drains the shared outbox until every sender is gone.
pub async fn dispatch(
    mut outbox: UnboundedReceiver<Outgoing>,
    broadcaster: Arc<dyn Broadcaster + Send + Sync>,
) {
    while let Some(message) = outbox.recv().await {
        let start = Instant::now();
        match broadcaster.send_photo(message.chat, message.photo).await {
            Ok(()) => log::info!(
                "Broadcast to {} took {}ms",
                message.chat,
                start.elapsed().as_millis()
            ),
            Err(why) => log::warn!("Error broadcasting to {} - {why}", message.chat),
        }
    }
}
