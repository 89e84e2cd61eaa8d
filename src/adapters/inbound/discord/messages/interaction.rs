use crate::adapters::inbound::discord::utils::attachment;
use crate::ports::inbound::client::{ChatId, MessageInteraction, MessageInteractionError, Photo};
use async_trait::async_trait;
use serenity::all::{Context, CreateMessage, Message};
use tokio::time::Instant;

pub struct DiscordMessageInteraction {
    ctx: Context,
    msg: Message,
}

impl DiscordMessageInteraction {
    pub fn new(ctx: Context, msg: Message) -> Self {
        Self { ctx, msg }
    }

    pub fn content(&self) -> &str {
        &self.msg.content
    }

    async fn send_message(&self, message: CreateMessage) -> Result<(), MessageInteractionError> {
        let start = Instant::now();
        match self
            .msg
            .channel_id
            .send_message(&self.ctx.http, message.reference_message(&self.msg))
            .await
        {
            Err(why) => Err(MessageInteractionError::new(why.to_string())),
            Ok(response) => {
                log::info!(
                    "Discord RTT took {}ms to send the message to {:?}",
                    start.elapsed().as_millis(),
                    response.channel_id.to_string()
                );
                Ok(())
            }
        }
    }
}

#[async_trait]
impl MessageInteraction for DiscordMessageInteraction {
    async fn send_photo(&self, photo: Photo) -> Result<(), MessageInteractionError> {
        let file = attachment(&self.ctx.http, &photo.picture).await?;
        let message = CreateMessage::new().content(photo.caption).add_file(file);

        self.send_message(message).await
    }

    async fn reply(&self, message: String) -> Result<(), MessageInteractionError> {
        self.send_message(CreateMessage::new().content(message))
            .await
    }

    fn chat_id(&self) -> ChatId {
        self.msg.channel_id.get()
    }
}
