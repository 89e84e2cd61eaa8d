use crate::domain::card::Card;
use crate::domain::prices::ScryfallPrices;
use crate::domain::rulings::Ruling;
use crate::ports::outbound::card_info::{CardInfo, CardInfoError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Deserialize)]
struct CardRecord {
    prices: ScryfallPrices,
}

#[derive(Deserialize)]
struct RulingList {
    data: Vec<Ruling>,
}

/// Live card data from the Scryfall API, addressed through the urls of the dump record.
pub struct Scryfall {
    http_client: reqwest::Client,
}

impl Scryfall {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CardInfoError> {
        self.http_client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|why| CardInfoError::new(format!("GET {url} failed - {why}")))?
            .json()
            .await
            .map_err(|why| CardInfoError::new(format!("Invalid response from {url} - {why}")))
    }
}

#[async_trait]
impl CardInfo for Scryfall {
    async fn prices(&self, card: &Card) -> Result<ScryfallPrices, CardInfoError> {
        let Some(url) = &card.info_url else {
            return Err(CardInfoError::new(format!("{} has no api uri", card.id)));
        };

        let record: CardRecord = self.get_json(url).await?;
        Ok(record.prices)
    }

    async fn rulings(&self, card: &Card) -> Result<Vec<Ruling>, CardInfoError> {
        let Some(url) = &card.rulings_url else {
            return Err(CardInfoError::new(format!("{} has no rulings uri", card.id)));
        };

        let rulings: RulingList = self.get_json(url).await?;
        Ok(rulings.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::tests::create_test_card;

    async fn card_served_by(server: &mockito::ServerGuard) -> Card {
        let mut card = create_test_card();
        card.info_url = Some(format!("{}/cards/{}", server.url(), card.id));
        card.rulings_url = Some(format!("{}/cards/{}/rulings", server.url(), card.id));
        card
    }

    #[tokio::test]
    async fn test_prices() {
        let mut server = mockito::Server::new_async().await;
        let card = card_served_by(&server).await;
        let mock = server
            .mock("GET", format!("/cards/{}", card.id).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"object": "card", "name": "Lightning Bolt",
                    "prices": {"usd": "2.15", "usd_foil": "4.30", "eur": null, "tix": "0.03"}}"#,
            )
            .create_async()
            .await;

        let prices = Scryfall::new(reqwest::Client::new())
            .prices(&card)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(prices.usd.as_deref(), Some("2.15"));
        assert_eq!(prices.usd_foil.as_deref(), Some("4.30"));
        assert!(prices.eur.is_none());
    }

    #[tokio::test]
    async fn test_rulings_keep_source_order() {
        let mut server = mockito::Server::new_async().await;
        let card = card_served_by(&server).await;
        let _mock = server
            .mock("GET", format!("/cards/{}/rulings", card.id).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"object": "list", "has_more": false, "data": [
                    {"source": "wotc", "published_at": "2004-10-04", "comment": "First."},
                    {"source": "wotc", "published_at": "2021-03-19", "comment": "Second."}
                ]}"#,
            )
            .create_async()
            .await;

        let rulings = Scryfall::new(reqwest::Client::new())
            .rulings(&card)
            .await
            .unwrap();

        assert_eq!(
            rulings,
            vec![
                Ruling {
                    published_at: String::from("2004-10-04"),
                    comment: String::from("First."),
                },
                Ruling {
                    published_at: String::from("2021-03-19"),
                    comment: String::from("Second."),
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_http_error_is_reported() {
        let mut server = mockito::Server::new_async().await;
        let card = card_served_by(&server).await;
        let _mock = server
            .mock("GET", mockito::Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let result = Scryfall::new(reqwest::Client::new()).prices(&card).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_card_without_urls() {
        let mut card = create_test_card();
        card.info_url = None;
        card.rulings_url = None;
        let scryfall = Scryfall::new(reqwest::Client::new());

        assert!(scryfall.prices(&card).await.is_err());
        assert!(scryfall.rulings(&card).await.is_err());
    }
}
