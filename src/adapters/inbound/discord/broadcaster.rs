use crate::adapters::inbound::discord::utils::attachment;
use crate::ports::inbound::client::{ChatId, MessageInteractionError, Photo};
use crate::ports::outbound::broadcaster::Broadcaster;
use async_trait::async_trait;
use serenity::all::{ChannelId, CreateMessage, Http};
use std::sync::Arc;

/// Posts to a channel outside of any incoming event, used by the feeds.
pub struct DiscordBroadcaster {
    http: Arc<Http>,
}

impl DiscordBroadcaster {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Broadcaster for DiscordBroadcaster {
    async fn send_photo(&self, chat: ChatId, photo: Photo) -> Result<(), MessageInteractionError> {
        let file = attachment(&self.http, &photo.picture).await?;
        let message = CreateMessage::new().content(photo.caption).add_file(file);

        ChannelId::new(chat)
            .send_message(&self.http, message)
            .await
            .map(|_| ())
            .map_err(|why| MessageInteractionError::new(why.to_string()))
    }
}
