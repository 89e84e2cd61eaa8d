use crate::ports::outbound::broadcaster::Broadcaster;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

pub type ChatId = u64;

#[cfg_attr(test, derive(Clone))]
#[derive(Debug, Error)]
#[error("Error sending message: {0}")]
pub struct MessageInteractionError(String);

impl MessageInteractionError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Picture {
    File(PathBuf),
    Remote(String),
}

/// A picture with a markdown caption.
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub picture: Picture,
    pub caption: String,
}

impl Photo {
    #[must_use]
    pub fn new(picture: Picture, caption: String) -> Self {
        Self { picture, caption }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessageInteraction {
    async fn send_photo(&self, photo: Photo) -> Result<(), MessageInteractionError>;
    async fn reply(&self, message: String) -> Result<(), MessageInteractionError>;
    fn chat_id(&self) -> ChatId;
}

#[async_trait]
pub trait Client {
    fn broadcaster(&self) -> Arc<dyn Broadcaster + Send + Sync>;
    async fn run(&mut self);
}
