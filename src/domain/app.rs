use crate::domain::index::CardIndex;
use crate::ports::outbound::card_info::CardInfo;
use crate::ports::outbound::picture_cache::PictureCache;
use crate::ports::outbound::price_source::PriceSource;
use crate::ports::outbound::property_store::PropertyStore;
use std::sync::Arc;

pub struct App<PC, CI, PS, S> {
    pub index: Arc<CardIndex>,
    pub picture_cache: PC,
    pub card_info: CI,
    pub price_source: PS,
    pub property_store: S,
}

impl<PC, CI, PS, S> App<PC, CI, PS, S>
where
    PC: PictureCache + Send + Sync,
    CI: CardInfo + Send + Sync,
    PS: PriceSource + Send + Sync,
    S: PropertyStore + Send + Sync,
{
    pub fn new(
        index: Arc<CardIndex>,
        picture_cache: PC,
        card_info: CI,
        price_source: PS,
        property_store: S,
    ) -> Self {
        Self {
            index,
            picture_cache,
            card_info,
            price_source,
            property_store,
        }
    }
}
