pub mod discord;

use crate::adapters::inbound::discord::client::Discord;
use crate::domain::app::App;
use crate::ports::inbound::client::Client;
use crate::ports::outbound::card_info::CardInfo;
use crate::ports::outbound::picture_cache::PictureCache;
use crate::ports::outbound::price_source::PriceSource;
use crate::ports::outbound::property_store::PropertyStore;

pub async fn create_client<PC, CI, PS, S>(
    token: &str,
    app: App<PC, CI, PS, S>,
) -> Result<impl Client, serenity::Error>
where
    PC: PictureCache + Send + Sync + 'static,
    CI: CardInfo + Send + Sync + 'static,
    PS: PriceSource + Send + Sync + 'static,
    S: PropertyStore + Send + Sync + 'static,
{
    Discord::new(token, app).await
}
