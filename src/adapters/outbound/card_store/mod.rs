pub mod scryfall_dump;

use crate::adapters::outbound::card_store::scryfall_dump::ScryfallDump;
use crate::config::Config;
use crate::ports::outbound::card_store::CardStore;

#[must_use]
pub fn init_card_store(config: &Config, http_client: reqwest::Client) -> impl CardStore {
    ScryfallDump::new(
        &config.dump_dir,
        config.dump_url.clone(),
        &config.scryfall_api_url,
        http_client,
    )
}
