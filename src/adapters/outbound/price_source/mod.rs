pub mod mtgsale;

use crate::adapters::outbound::price_source::mtgsale::{MtgSale, MTGSALE_URL};

#[must_use]
pub fn init_price_source(http_client: reqwest::Client) -> MtgSale {
    MtgSale::new(MTGSALE_URL, http_client)
}
