pub mod card_info;
pub mod card_store;
pub mod feed_source;
pub mod http;
pub mod picture_cache;
pub mod price_source;
pub mod property_store;
