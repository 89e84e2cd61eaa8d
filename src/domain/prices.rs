use crate::domain::card::Card;
use crate::domain::utils::escape_markdown;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScryfallPrices {
    pub usd: Option<String>,
    pub usd_foil: Option<String>,
    pub eur: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinPrice {
    pub price: u32,
    pub seller: String,
    pub url: String,
}

impl MinPrice {
    #[must_use]
    pub fn line(&self, prefix: &str) -> String {
        format!(
            "{prefix} {}₽ at [{}]({})",
            self.price,
            escape_markdown(&self.seller),
            self.url
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardPrices {
    pub scryfall: Option<ScryfallPrices>,
    pub min: Option<MinPrice>,
}

impl CardPrices {
    #[must_use]
    pub fn usd(&self) -> Option<&str> {
        self.scryfall
            .as_ref()?
            .usd
            .as_deref()
            .filter(|usd| !usd.is_empty())
    }
}

/// Caption for a card picture: linked name, then whichever prices were found.
#[must_use]
pub fn caption(card: &Card, prices: &CardPrices) -> String {
    let name = escape_markdown(&card.printed_name);
    let mut caption = match &card.scryfall_url {
        Some(url) => format!("[{name}]({url})"),
        None => name,
    };

    if let Some(usd) = prices.usd() {
        caption.push_str(&format!("\n{}$", escape_markdown(usd)));
    }

    if let Some(min) = &prices.min {
        caption.push('\n');
        caption.push_str(&min.line("min"));
    }

    caption
}
