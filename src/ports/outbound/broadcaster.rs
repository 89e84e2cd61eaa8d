use crate::ports::inbound::client::{ChatId, MessageInteractionError, Photo};
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Sends messages to a chat outside of any incoming interaction.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Broadcaster {
    async fn send_photo(&self, chat: ChatId, photo: Photo) -> Result<(), MessageInteractionError>;
}
