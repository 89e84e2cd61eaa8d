use crate::adapters::inbound::create_client;
use crate::adapters::outbound::card_info::init_card_info;
use crate::adapters::outbound::card_store::init_card_store;
use crate::adapters::outbound::feed_source::{init_commander_feed, init_deal_feed};
use crate::adapters::outbound::http;
use crate::adapters::outbound::picture_cache::init_picture_cache;
use crate::adapters::outbound::price_source::init_price_source;
use crate::adapters::outbound::property_store::init_property_store;
use crate::config::Config;
use crate::domain::app::App;
use crate::domain::feeds::notifier::Notifier;
use crate::domain::feeds::{outbox, scheduler, Feed};
use crate::ports::inbound::client::Client;
use crate::ports::outbound::card_store::CardStore;
use crate::ports::outbound::feed_source::FeedSource;
use crate::ports::outbound::property_store::PropertyStore;
use dotenv::dotenv;
use std::process;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedSender};

mod adapters;
mod config;
mod domain;
mod ports;

fn fatal(message: String) -> ! {
    log::error!("{message}");
    process::exit(1)
}

fn start_feed<F, S>(
    source: F,
    store: S,
    delay: Duration,
    outbox: UnboundedSender<outbox::Outgoing>,
) where
    F: FeedSource + Send + Sync + 'static,
    S: PropertyStore + Send + Sync + 'static,
{
    let feed: Feed = source.feed();
    let (updates_tx, updates_rx) = mpsc::channel(1);
    tokio::spawn(Notifier::new(feed, store, outbox).run(updates_rx));
    scheduler::spawn(source, delay, updates_tx);
    log::info!("Started {feed} feed, polling every {}m", delay.as_secs() / 60);
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().unwrap_or_else(|why| fatal(format!("Bad config - {why}")));
    let http_client = http::create_client(config.http_timeout)
        .unwrap_or_else(|why| fatal(format!("Failed HTTP Client build - {why}")));
    let property_store = init_property_store(&config.redis_url)
        .unwrap_or_else(|why| fatal(format!("Failed to open property store - {why}")));

    let index = init_card_store(&config, http_client.clone())
        .load()
        .await
        .unwrap_or_else(|why| fatal(format!("Failed to load cards - {why}")));
    log::info!("Loaded {} cards under {} names", index.len(), index.names());

    let price_source = init_price_source(http_client.clone());
    let app = App::new(
        Arc::new(index),
        init_picture_cache(&config.picture_cache_dir, http_client.clone()),
        init_card_info(http_client.clone()),
        price_source.clone(),
        property_store.clone(),
    );

    let mut client = create_client(&config.bot_token, app)
        .await
        .unwrap_or_else(|why| fatal(format!("Error creating client - {why}")));

    let (outbox_tx, outbox_rx) = mpsc::unbounded_channel();
    tokio::spawn(outbox::dispatch(outbox_rx, client.broadcaster()));

    start_feed(
        init_commander_feed(http_client.clone(), price_source),
        property_store.clone(),
        config.feed_interval,
        outbox_tx.clone(),
    );
    start_feed(
        init_deal_feed(http_client),
        property_store,
        config.feed_interval,
        outbox_tx,
    );

    client.run().await;
}
