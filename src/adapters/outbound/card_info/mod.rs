mod scryfall;

use crate::adapters::outbound::card_info::scryfall::Scryfall;
use crate::ports::outbound::card_info::CardInfo;

#[must_use]
pub fn init_card_info(http_client: reqwest::Client) -> impl CardInfo {
    Scryfall::new(http_client)
}
