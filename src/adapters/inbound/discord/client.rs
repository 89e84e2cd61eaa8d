use crate::adapters::inbound::discord::broadcaster::DiscordBroadcaster;
use crate::domain::app::App;
use crate::ports::inbound::client::Client;
use crate::ports::outbound::broadcaster::Broadcaster;
use crate::ports::outbound::card_info::CardInfo;
use crate::ports::outbound::picture_cache::PictureCache;
use crate::ports::outbound::price_source::PriceSource;
use crate::ports::outbound::property_store::PropertyStore;
use async_trait::async_trait;
use serenity::all::GatewayIntents;
use serenity::Client as DiscordClient;
use std::sync::Arc;

pub struct Discord(DiscordClient);

impl Discord {
    pub async fn new<PC, CI, PS, S>(
        token: &str,
        app: App<PC, CI, PS, S>,
    ) -> Result<Self, serenity::Error>
    where
        PC: PictureCache + Send + Sync + 'static,
        CI: CardInfo + Send + Sync + 'static,
        PS: PriceSource + Send + Sync + 'static,
        S: PropertyStore + Send + Sync + 'static,
    {
        let intents = GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::DIRECT_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT;

        let client = DiscordClient::builder(token, intents)
            .event_handler(app)
            .await?;

        Ok(Self(client))
    }
}

#[async_trait]
impl Client for Discord {
    fn broadcaster(&self) -> Arc<dyn Broadcaster + Send + Sync> {
        Arc::new(DiscordBroadcaster::new(Arc::clone(&self.0.http)))
    }

    async fn run(&mut self) {
        if let Err(why) = self.0.start().await {
            log::error!("Error starting client - {why:?}");
        }
    }
}
