use crate::domain::index::CardIndex;
use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error)]
#[error("Error loading cards: {0}")]
pub struct CardStoreError(String);

impl CardStoreError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CardStore {
    async fn load(&self) -> Result<CardIndex, CardStoreError>;
}
