use crate::ports::inbound::client::ChatId;
use async_trait::async_trait;
use std::fmt::{Display, Formatter};
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[derive(Error, Debug)]
#[error("Error in property store operation: {0}")]
pub struct PropertyStoreError(String);

impl PropertyStoreError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Global,
    Chat(ChatId),
}

impl Display for Scope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::Global => write!(f, "global"),
            Scope::Chat(chat) => write!(f, "chat:{chat}"),
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait PropertyStore {
    async fn get(&self, key: String, scope: Scope) -> Result<Option<String>, PropertyStoreError>;
    async fn set(&self, key: String, scope: Scope, value: String)
        -> Result<(), PropertyStoreError>;
    async fn members(&self, key: String) -> Result<Vec<ChatId>, PropertyStoreError>;
    async fn add_member(&self, key: String, chat: ChatId) -> Result<(), PropertyStoreError>;
    async fn remove_member(&self, key: String, chat: ChatId) -> Result<(), PropertyStoreError>;
}
