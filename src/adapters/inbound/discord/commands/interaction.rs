use crate::adapters::inbound::discord::utils::attachment;
use crate::ports::inbound::client::{ChatId, MessageInteraction, MessageInteractionError, Photo};
use async_trait::async_trait;
use serenity::all::{
    CommandInteraction, Context, CreateAttachment, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage,
};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::time::Instant;

/// The first message answers the command, everything after it is a followup.
pub struct DiscordCommand {
    ctx: Context,
    command: CommandInteraction,
    responded: AtomicBool,
}

impl DiscordCommand {
    pub fn new(ctx: Context, command: CommandInteraction) -> Self {
        Self {
            ctx,
            command,
            responded: AtomicBool::new(false),
        }
    }

    /// Acknowledges the command before slow work, replies become followups.
    pub async fn defer(&self) -> Result<(), MessageInteractionError> {
        self.command
            .defer(&self.ctx.http)
            .await
            .map_err(|why| MessageInteractionError::new(why.to_string()))?;
        self.responded.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn send_message(
        &self,
        content: String,
        file: Option<CreateAttachment>,
    ) -> Result<(), MessageInteractionError> {
        let start = Instant::now();
        let result = if self.responded.swap(true, Ordering::SeqCst) {
            let mut followup = CreateInteractionResponseFollowup::new().content(content);
            if let Some(file) = file {
                followup = followup.add_file(file);
            }
            self.command
                .create_followup(&self.ctx.http, followup)
                .await
                .map(|_| ())
        } else {
            let mut message = CreateInteractionResponseMessage::new().content(content);
            if let Some(file) = file {
                message = message.add_file(file);
            }
            self.command
                .create_response(&self.ctx.http, CreateInteractionResponse::Message(message))
                .await
        };

        if let Err(why) = result {
            Err(MessageInteractionError::new(why.to_string()))
        } else {
            log::info!(
                "Discord RTT took {}ms to send the message to {:?}",
                start.elapsed().as_millis(),
                self.command.channel_id.to_string()
            );
            Ok(())
        }
    }
}

#[async_trait]
impl MessageInteraction for DiscordCommand {
    async fn send_photo(&self, photo: Photo) -> Result<(), MessageInteractionError> {
        let file = attachment(&self.ctx.http, &photo.picture).await?;
        self.send_message(photo.caption, Some(file)).await
    }

    async fn reply(&self, message: String) -> Result<(), MessageInteractionError> {
        self.send_message(message, None).await
    }

    fn chat_id(&self) -> ChatId {
        self.command.channel_id.get()
    }
}
