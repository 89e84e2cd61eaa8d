use crate::domain::prices::MinPrice;
use crate::ports::outbound::price_source::{PriceSource, PriceSourceError};
use async_trait::async_trait;
use reqwest::Url;
use scraper::{ElementRef, Html, Selector};

pub const MTGSALE_URL: &str = "https://mtgsale.ru";
const SELLER: &str = "mtgsale";
const SEARCH_PATH: &str = "/home/search-results";

#[derive(Clone)]
pub struct MtgSale {
    base_url: String,
    http_client: reqwest::Client,
}

impl MtgSale {
    pub fn new(base_url: &str, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }

    pub fn search_url(&self, name: &str) -> Result<Url, PriceSourceError> {
        Url::parse_with_params(
            &format!("{}{SEARCH_PATH}", self.base_url),
            &[
                ("Name", name),
                ("Lang", "Any"),
                ("Type", "Any"),
                ("Color", "Any"),
                ("Rarity", "Any"),
            ],
        )
        .map_err(|why| PriceSourceError::new(why.to_string()))
    }
}

fn selector(css: &str) -> Result<Selector, PriceSourceError> {
    Selector::parse(css).map_err(|why| PriceSourceError::new(format!("{css}: {why}")))
}

fn child_text(element: &ElementRef, selector: &Selector) -> String {
    element
        .select(selector)
        .flat_map(|child| child.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Cheapest price among result rows whose name or secondary name equals `name`.
pub fn parse_min_price(html: &str, name: &str) -> Result<Option<u32>, PriceSourceError> {
    let row = selector(".ctclass")?;
    let title = selector(".tnamec")?;
    let subtitle = selector(".smallfont")?;
    let price = selector(".pprice")?;

    let wanted = name.to_lowercase();
    let document = Html::parse_document(html);

    let min = document
        .select(&row)
        .filter(|element| {
            child_text(element, &title).to_lowercase() == wanted
                || child_text(element, &subtitle).to_lowercase() == wanted
        })
        .filter_map(|element| {
            let text = child_text(&element, &price);
            let value = text.trim_matches(|c: char| c.is_whitespace() || c == '₽');
            match value.parse::<u32>() {
                Ok(value) => Some(value),
                Err(why) => {
                    log::error!("Price '{text}' of {name} cannot be parsed - {why}");
                    None
                }
            }
        })
        .min();

    Ok(min)
}

#[async_trait]
impl PriceSource for MtgSale {
    async fn min_price(&self, name: &str) -> Result<Option<MinPrice>, PriceSourceError> {
        let url = self.search_url(name)?;
        let html = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|why| PriceSourceError::new(format!("Unable to visit {url} - {why}")))?
            .text()
            .await
            .map_err(|why| PriceSourceError::new(why.to_string()))?;

        Ok(parse_min_price(&html, name)?.map(|price| MinPrice {
            price,
            seller: String::from(SELLER),
            url: url.to_string(),
        }))
    }
}
