use crate::domain::feeds::{DailyDeal, Feed, FeedItem};
use crate::ports::outbound::feed_source::{FeedError, FeedSource};
use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;

const SCRAPE_TIMEOUT: Duration = Duration::from_secs(20);

pub struct MtgSaleDeal {
    base_url: String,
    http_client: reqwest::Client,
}

impl MtgSaleDeal {
    pub fn new(base_url: &str, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }
}

fn selector(css: &str) -> Result<Selector, FeedError> {
    Selector::parse(css).map_err(|why| FeedError::new(format!("{css}: {why}")))
}

fn child_text(element: &ElementRef, selector: &Selector) -> String {
    element
        .select(selector)
        .next()
        .map(|child| child.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn child_attr(element: &ElementRef, selector: &Selector, attr: &str) -> Option<String> {
    element
        .select(selector)
        .next()
        .and_then(|child| child.value().attr(attr))
        .map(|value| value.trim().to_string())
}

/// Card of the day block of the mtgsale front page, links made absolute with `base_url`.
pub fn parse_deal(html: &str, base_url: &str) -> Result<DailyDeal, FeedError> {
    let block = selector("div.cartday")?;
    let title = selector(".ccart h3 a")?;
    let picture = selector("p.cartday a img")?;
    let price_new = selector(".ccart .price .new")?;
    let price_old = selector(".ccart .price .old")?;

    let document = Html::parse_document(html);
    let Some(deal) = document.select(&block).next() else {
        return Err(FeedError::new(String::from("No card of the day on the page")));
    };

    let name = child_text(&deal, &title);
    if name.is_empty() {
        return Err(FeedError::new(String::from("Card of the day has no name")));
    }

    let href = child_attr(&deal, &title, "href").unwrap_or_default();
    let src = child_attr(&deal, &picture, "src").unwrap_or_default();

    Ok(DailyDeal {
        name,
        url: format!("{base_url}{href}"),
        picture_url: format!("{base_url}{src}"),
        price_new: child_text(&deal, &price_new),
        price_old: child_text(&deal, &price_old),
    })
}

#[async_trait]
impl FeedSource for MtgSaleDeal {
    fn feed(&self) -> Feed {
        Feed::DailyDeal
    }

    async fn fetch(&self) -> Result<FeedItem, FeedError> {
        let html = self
            .http_client
            .get(&self.base_url)
            .timeout(SCRAPE_TIMEOUT)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|why| FeedError::new(format!("Unable to visit mtgsale - {why}")))?
            .text()
            .await
            .map_err(|why| FeedError::new(why.to_string()))?;

        let deal = parse_deal(&html, &self.base_url)?;
        log::debug!("Scraped mtgsale deal {deal:?}");

        Ok(FeedItem::Deal(deal))
    }
}
