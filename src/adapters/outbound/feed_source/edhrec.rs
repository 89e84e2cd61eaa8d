use crate::domain::feeds::{CommanderOfTheDay, Feed, FeedItem};
use crate::ports::outbound::feed_source::{FeedError, FeedSource};
use crate::ports::outbound::price_source::PriceSource;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub const EDHREC_URL: &str = "https://edhrec.com";
pub const EDHREC_JSON_URL: &str = "https://edhrec-json.s3.amazonaws.com";

#[derive(Deserialize)]
struct DailyResponse {
    daily: Daily,
}

#[derive(Deserialize)]
struct Daily {
    name: String,
    url: String,
    image: String,
}

#[derive(Deserialize)]
struct RankResponse {
    container: Container,
}

#[derive(Deserialize)]
struct Container {
    json_dict: JsonDict,
}

#[derive(Deserialize)]
struct JsonDict {
    card: RankedCard,
}

#[derive(Deserialize)]
struct RankedCard {
    #[serde(default)]
    label: String,
    #[serde(default)]
    salt: f32,
}

/// EDHREC commander of the day, priced through `P`.
pub struct Edhrec<P> {
    site_url: String,
    json_url: String,
    http_client: reqwest::Client,
    price_source: P,
}

impl<P: PriceSource + Send + Sync> Edhrec<P> {
    pub fn new(site_url: &str, json_url: &str, http_client: reqwest::Client, price_source: P) -> Self {
        Self {
            site_url: site_url.trim_end_matches('/').to_string(),
            json_url: json_url.trim_end_matches('/').to_string(),
            http_client,
            price_source,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FeedError> {
        self.http_client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|why| FeedError::new(format!("Unable to get {url} - {why}")))?
            .json()
            .await
            .map_err(|why| FeedError::new(format!("Unable to decode {url} - {why}")))
    }
}

#[async_trait]
impl<P: PriceSource + Send + Sync> FeedSource for Edhrec<P> {
    fn feed(&self) -> Feed {
        Feed::CommanderOfTheDay
    }

    async fn fetch(&self) -> Result<FeedItem, FeedError> {
        let DailyResponse { daily } = self
            .get_json(&format!("{}/api/daily/", self.site_url))
            .await?;

        let rank: RankResponse = self
            .get_json(&format!("{}/en{}.json", self.json_url, daily.url))
            .await?;
        let RankedCard { label, salt } = rank.container.json_dict.card;

        let min_price = match self.price_source.min_price(&daily.name).await {
            Ok(min_price) => min_price,
            Err(why) => {
                log::warn!("Unable to get prices for {} - {why}", daily.name);
                None
            }
        };

        let commander = CommanderOfTheDay {
            url: format!("{}{}", self.site_url, daily.url),
            name: daily.name,
            picture_url: daily.image,
            rank_info: label,
            salt,
            min_price,
        };
        log::debug!("Scraped edhrec commander {commander:?}");

        Ok(FeedItem::Commander(commander))
    }
}
