use crate::domain::app::App;
use crate::domain::feeds::Feed;
use crate::ports::inbound::client::MessageInteraction;
use crate::ports::outbound::card_info::CardInfo;
use crate::ports::outbound::picture_cache::PictureCache;
use crate::ports::outbound::price_source::PriceSource;
use crate::ports::outbound::property_store::PropertyStore;

#[derive(Debug)]
pub struct SubscribeOptions {
    pub feed: Feed,
}

impl<PC, CI, PS, S> App<PC, CI, PS, S>
where
    PC: PictureCache + Send + Sync,
    CI: CardInfo + Send + Sync,
    PS: PriceSource + Send + Sync,
    S: PropertyStore + Send + Sync,
{
    pub async fn subscribe_command<I: MessageInteraction + Sync>(
        &self,
        interaction: &I,
        options: SubscribeOptions,
    ) {
        let SubscribeOptions { feed } = options;
        let chat = interaction.chat_id();

        let message = match self
            .property_store
            .add_member(feed.subscribers_key(), chat)
            .await
        {
            Ok(()) => {
                log::info!("Chat {chat} subscribed to {feed}");
                format!("This chat is now subscribed to the {feed}")
            }
            Err(why) => {
                log::error!("Could not subscribe {chat} to {feed} - {why}");
                format!("Could not subscribe to the {feed}, please try again later")
            }
        };

        if let Err(why) = interaction.reply(message).await {
            log::error!("couldn't create interaction response: {why:?}");
        }
    }

    pub async fn unsubscribe_command<I: MessageInteraction + Sync>(
        &self,
        interaction: &I,
        options: SubscribeOptions,
    ) {
        let SubscribeOptions { feed } = options;
        let chat = interaction.chat_id();

        let message = match self
            .property_store
            .remove_member(feed.subscribers_key(), chat)
            .await
        {
            Ok(()) => {
                log::info!("Chat {chat} unsubscribed from {feed}");
                format!("This chat will no longer receive the {feed}")
            }
            Err(why) => {
                log::error!("Could not unsubscribe {chat} from {feed} - {why}");
                format!("Could not unsubscribe from the {feed}, please try again later")
            }
        };

        if let Err(why) = interaction.reply(message).await {
            log::error!("couldn't create interaction response: {why:?}");
        }
    }
}
