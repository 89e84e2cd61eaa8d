use crate::domain::feeds::{Feed, FeedItem};
use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, derive(Clone))]
#[derive(Debug, Error)]
#[error("Error polling feed: {0}")]
pub struct FeedError(String);

impl FeedError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait FeedSource {
    fn feed(&self) -> Feed;
    async fn fetch(&self) -> Result<FeedItem, FeedError>;
}
