pub mod notifier;
pub mod outbox;
pub mod scheduler;

use crate::domain::prices::MinPrice;
use crate::domain::utils::escape_markdown;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    CommanderOfTheDay,
    DailyDeal,
}

impl Feed {
    pub const ALL: [Feed; 2] = [Feed::CommanderOfTheDay, Feed::DailyDeal];

    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Feed::CommanderOfTheDay => "commander",
            Feed::DailyDeal => "deal",
        }
    }

    #[must_use]
    pub fn subscribers_key(&self) -> String {
        format!("subscribers:{}", self.key())
    }

    #[must_use]
    pub fn last_notified_key(&self) -> String {
        format!("last:{}", self.key())
    }
}

impl Display for Feed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let string = match self {
            Feed::CommanderOfTheDay => "Commander of the day",
            Feed::DailyDeal => "mtgsale daily deal",
        };

        write!(f, "{string}")
    }
}

impl FromStr for Feed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feed::ALL
            .into_iter()
            .find(|feed| feed.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown feed {s}"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommanderOfTheDay {
    pub name: String,
    pub url: String,
    pub picture_url: String,
    pub rank_info: String,
    pub salt: f32,
    pub min_price: Option<MinPrice>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyDeal {
    pub name: String,
    pub url: String,
    pub picture_url: String,
    pub price_new: String,
    pub price_old: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeedItem {
    Commander(CommanderOfTheDay),
    Deal(DailyDeal),
}

impl FeedItem {
    #[must_use]
    pub fn feed(&self) -> Feed {
        match self {
            FeedItem::Commander(_) => Feed::CommanderOfTheDay,
            FeedItem::Deal(_) => Feed::DailyDeal,
        }
    }

    /// Two items with the same identity are the same notification.
    #[must_use]
    pub fn identity(&self) -> &str {
        match self {
            FeedItem::Commander(commander) => &commander.name,
            FeedItem::Deal(deal) => &deal.name,
        }
    }

    #[must_use]
    pub fn picture_url(&self) -> &str {
        match self {
            FeedItem::Commander(commander) => &commander.picture_url,
            FeedItem::Deal(deal) => &deal.picture_url,
        }
    }

    #[must_use]
    pub fn caption(&self) -> String {
        match self {
            FeedItem::Commander(commander) => {
                let salt = escape_markdown(&format!("Salt score: {:.2}", commander.salt));
                let mut text = format!(
                    "Commander of the day\n[{}]({})\n{}\n{}",
                    escape_markdown(&commander.name),
                    commander.url,
                    escape_markdown(&commander.rank_info),
                    salt
                );
                if let Some(min) = &commander.min_price {
                    text.push('\n');
                    text.push_str(&min.line("min"));
                }
                text
            }
            FeedItem::Deal(deal) => format!(
                "Card of the day at mtgsale:\n[{}]({})\n{} ~~{}~~",
                escape_markdown(&deal.name),
                deal.url,
                escape_markdown(&deal.price_new),
                escape_markdown(&deal.price_old)
            ),
        }
    }
}
