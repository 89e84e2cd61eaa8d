use crate::domain::card::Card;
use crate::domain::prices::ScryfallPrices;
use crate::domain::rulings::Ruling;
use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, derive(Clone))]
#[derive(Debug, Error)]
#[error("Error fetching card info: {0}")]
pub struct CardInfoError(String);

impl CardInfoError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

/// Live per-card data that is not part of the dump.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CardInfo {
    async fn prices(&self, card: &Card) -> Result<ScryfallPrices, CardInfoError>;
    async fn rulings(&self, card: &Card) -> Result<Vec<Ruling>, CardInfoError>;
}
