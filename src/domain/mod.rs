pub mod app;
pub mod card;
pub mod feeds;
pub mod functions;
pub mod index;
pub mod prices;
pub mod query;
pub mod rulings;
pub mod search;
pub mod utils;
