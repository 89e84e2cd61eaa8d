pub mod edhrec;
pub mod mtgsale_deal;

use crate::adapters::outbound::feed_source::edhrec::{Edhrec, EDHREC_JSON_URL, EDHREC_URL};
use crate::adapters::outbound::feed_source::mtgsale_deal::MtgSaleDeal;
use crate::adapters::outbound::price_source::mtgsale::MTGSALE_URL;
use crate::ports::outbound::feed_source::FeedSource;
use crate::ports::outbound::price_source::PriceSource;

#[must_use]
pub fn init_commander_feed<P>(http_client: reqwest::Client, price_source: P) -> impl FeedSource
where
    P: PriceSource + Send + Sync + 'static,
{
    Edhrec::new(EDHREC_URL, EDHREC_JSON_URL, http_client, price_source)
}

#[must_use]
pub fn init_deal_feed(http_client: reqwest::Client) -> impl FeedSource {
    MtgSaleDeal::new(MTGSALE_URL, http_client)
}
