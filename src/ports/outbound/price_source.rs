use crate::domain::prices::MinPrice;
use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, derive(Clone))]
#[derive(Debug, Error)]
#[error("Error fetching prices: {0}")]
pub struct PriceSourceError(String);

impl PriceSourceError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait PriceSource {
    /// Cheapest offer for a card name, `None` when nobody sells it.
    async fn min_price(&self, name: &str) -> Result<Option<MinPrice>, PriceSourceError>;
}
