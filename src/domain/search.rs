use crate::domain::app::App;
use crate::domain::card::Card;
use crate::domain::index::CardIndex;
use crate::domain::prices::{self, CardPrices};
use crate::domain::query::{CardQuery, View};
use crate::domain::rulings;
use crate::ports::inbound::client::{MessageInteraction, Photo, Picture};
use crate::ports::outbound::card_info::CardInfo;
use crate::ports::outbound::picture_cache::PictureCache;
use crate::ports::outbound::price_source::PriceSource;
use crate::ports::outbound::property_store::PropertyStore;
use std::collections::HashSet;
use tokio::time::Instant;

const NOT_FOUND_HEADER: &str = "I could not recognize the following cards:";
const NOTHING_SENT: &str = "Sorry, I could not show that card right now";

#[derive(Debug)]
pub struct FindOptions {
    pub name: String,
}

#[derive(Debug, PartialEq)]
pub enum Resolution<'a> {
    Found(&'a Card),
    NotFound(String),
}

/// Exact lookup of a single query; a miss echoes what the user asked for.
#[must_use]
pub fn resolve<'a>(index: &'a CardIndex, query: &CardQuery) -> Resolution<'a> {
    match index.by_name(query.key()) {
        Some(card) => Resolution::Found(card),
        None => Resolution::NotFound(query.requested().to_string()),
    }
}

/// Resolved queries of one message, grouped by the reply they produce.
#[derive(Debug, Default, PartialEq)]
pub struct Replies<'a> {
    pub images: Vec<&'a Card>,
    pub rulings: Vec<&'a Card>,
    pub not_found: Vec<String>,
}

impl<'a> Replies<'a> {
    #[must_use]
    pub fn collect(index: &'a CardIndex, queries: &[CardQuery]) -> Self {
        let mut replies = Self::default();
        let mut seen_images = HashSet::new();
        let mut seen_rulings = HashSet::new();

        for query in queries {
            let card = match resolve(index, query) {
                Resolution::Found(card) => card,
                Resolution::NotFound(requested) => {
                    replies.not_found.push(requested);
                    continue;
                }
            };

            match query.view() {
                View::Image | View::Price => {
                    if seen_images.insert(query.key()) {
                        replies.images.push(card);
                    }
                }
                View::Rulings => {
                    if seen_rulings.insert(query.key()) {
                        replies.rulings.push(card);
                    }
                }
            }
        }

        replies
    }
}

#[must_use]
pub fn not_found_message(names: &[String]) -> String {
    let mut message = String::from(NOT_FOUND_HEADER);
    for name in names {
        message.push('\n');
        message.push_str(name);
    }
    message
}

impl<PC, CI, PS, S> App<PC, CI, PS, S>
where
    PC: PictureCache + Send + Sync,
    CI: CardInfo + Send + Sync,
    PS: PriceSource + Send + Sync,
    S: PropertyStore + Send + Sync,
{
    /// A command argument is a single reference, brackets optional.
    pub async fn find_command<I: MessageInteraction + Sync>(
        &self,
        interaction: &I,
        options: FindOptions,
    ) {
        let Some(query) = CardQuery::parse(&options.name) else {
            if let Err(why) = interaction
                .reply(String::from("Please tell me which card to look up"))
                .await
            {
                log::warn!("couldn't create interaction response: {why:?}");
            }
            return;
        };

        if self.find(interaction, &[query]).await == 0 {
            if let Err(why) = interaction.reply(String::from(NOTHING_SENT)).await {
                log::warn!("Error sending find fallback - {why}");
            }
        }
    }

    /// Sends every reply for the queries, returns how many messages went out.
    pub async fn find<I: MessageInteraction + Sync>(
        &self,
        interaction: &I,
        queries: &[CardQuery],
    ) -> usize {
        let start = Instant::now();
        let replies = Replies::collect(&self.index, queries);
        log::info!(
            "Resolved {} queries in {} us: {} cards, {} rulings, {} not found",
            queries.len(),
            start.elapsed().as_micros(),
            replies.images.len(),
            replies.rulings.len(),
            replies.not_found.len()
        );

        let mut sent = 0;
        for card in &replies.images {
            sent += usize::from(self.send_card(interaction, card).await);
        }

        for card in &replies.rulings {
            sent += self.send_rulings(interaction, card).await;
        }

        if !replies.not_found.is_empty() {
            match interaction
                .reply(not_found_message(&replies.not_found))
                .await
            {
                Ok(()) => sent += 1,
                Err(why) => log::warn!("Error sending not found message - {why}"),
            }
        }
        sent
    }

    async fn send_card<I: MessageInteraction + Sync>(&self, interaction: &I, card: &Card) -> bool {
        let Some(image_url) = card.image_url.as_deref() else {
            log::warn!("Card {} ({}) has no picture", card.name, card.id);
            return false;
        };

        let path = match self.picture_cache.get(&card.id, image_url).await {
            Ok(path) => path,
            Err(why) => {
                log::error!("Unable to get a picture for {} - {why}", card.id);
                return false;
            }
        };

        let prices = self.prices(card).await;
        let photo = Photo::new(Picture::File(path), prices::caption(card, &prices));

        if let Err(why) = interaction.send_photo(photo).await {
            log::warn!("Error sending card {} - {why}", card.id);
            return false;
        }
        true
    }

    /// Prices from every source; a failing source only leaves its part empty.
    pub async fn prices(&self, card: &Card) -> CardPrices {
        let (scryfall, min) = tokio::join!(
            self.card_info.prices(card),
            self.price_source.min_price(&card.printed_name)
        );

        let scryfall = scryfall
            .map_err(|why| log::warn!("Cannot load Scryfall prices for {} - {why}", card.id))
            .ok();
        let min = min
            .map_err(|why| {
                log::warn!("Cannot get min price for {} - {why}", card.printed_name);
            })
            .ok()
            .flatten();

        CardPrices { scryfall, min }
    }

    async fn send_rulings<I: MessageInteraction + Sync>(
        &self,
        interaction: &I,
        card: &Card,
    ) -> usize {
        let rulings = match self.card_info.rulings(card).await {
            Ok(rulings) => rulings,
            Err(why) => {
                log::error!("Cannot load rulings for {} - {why}", card.id);
                return 0;
            }
        };

        let mut sent = 0;
        for message in rulings::format(card, &rulings) {
            if let Err(why) = interaction.reply(message).await {
                log::warn!("Error sending rulings for {} - {why}", card.id);
                break;
            }
            sent += 1;
        }
        sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::tests::create_test_card;
    use crate::domain::prices::{MinPrice, ScryfallPrices};
    use crate::domain::rulings::Ruling;
    use crate::ports::inbound::client::MockMessageInteraction;
    use crate::ports::outbound::card_info::{CardInfoError, MockCardInfo};
    use crate::ports::outbound::picture_cache::{MockPictureCache, PictureCacheError};
    use crate::ports::outbound::price_source::{MockPriceSource, PriceSourceError};
    use crate::ports::outbound::property_store::MockPropertyStore;
    use mockall::predicate::*;
    use std::path::PathBuf;
    use std::sync::Arc;
    use uuid::uuid;

    fn fire_ice() -> Card {
        let mut card = create_test_card();
        card.id = uuid!("55555555-5555-5555-5555-555555555555");
        card.name = String::from("Fire // Ice");
        card.printed_name = String::from("Fire // Ice");
        card.scryfall_url = Some(String::from("https://scryfall.com/card/mh2/290/fire-ice"));
        card
    }

    fn test_index() -> CardIndex {
        CardIndex::from_cards([create_test_card(), fire_ice()])
    }

    type TestApp = App<MockPictureCache, MockCardInfo, MockPriceSource, MockPropertyStore>;

    fn create_app(
        picture_cache: MockPictureCache,
        card_info: MockCardInfo,
        price_source: MockPriceSource,
    ) -> TestApp {
        App::new(
            Arc::new(test_index()),
            picture_cache,
            card_info,
            price_source,
            MockPropertyStore::new(),
        )
    }

    #[test]
    fn test_resolve_found() {
        let index = test_index();
        let query = CardQuery::parse("[[$Lightning Bolt]]").unwrap();

        assert_eq!(
            resolve(&index, &query),
            Resolution::Found(index.by_name("lightning bolt").unwrap())
        );
    }

    #[test]
    fn test_resolve_not_found_echoes_request() {
        let index = test_index();
        let query = CardQuery::parse("  [[Black Lotus]] ").unwrap();

        assert_eq!(
            resolve(&index, &query),
            Resolution::NotFound(String::from("Black Lotus"))
        );
    }

    #[test]
    fn test_collect_groups_replies() {
        let index = test_index();
        let queries = CardQuery::extract(
            "[[lightning bolt]] [[$Lightning Bolt]] [[#ice]] [[Black Lotus]] [[#Fire]] [[mox]]",
        );

        let replies = Replies::collect(&index, &queries);

        assert_eq!(replies.images.len(), 1);
        assert_eq!(replies.images[0].name, "Lightning Bolt");
        assert_eq!(replies.rulings.len(), 2);
        assert_eq!(replies.not_found, vec!["Black Lotus", "mox"]);
    }

    #[test]
    fn test_price_request_folds_into_image() {
        let index = test_index();
        let queries = CardQuery::extract("[[$fire]]");

        let replies = Replies::collect(&index, &queries);

        assert_eq!(replies.images.len(), 1);
        assert!(replies.rulings.is_empty());
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            not_found_message(&[String::from("Black Lotus"), String::from("mox")]),
            "I could not recognize the following cards:\nBlack Lotus\nmox"
        );
    }

    #[tokio::test]
    async fn test_find_sends_card_with_prices() {
        let card = create_test_card();
        let id = card.id;

        let mut picture_cache = MockPictureCache::new();
        picture_cache
            .expect_get()
            .withf(move |cached_id, url| {
                cached_id == &id && url == "https://cards.scryfall.io/normal/front/e/3/e3285e6b.jpg"
            })
            .times(1)
            .returning(|_, _| Ok(PathBuf::from("/tmp/piccache/bolt.jpg")));

        let mut card_info = MockCardInfo::new();
        card_info.expect_prices().times(1).returning(|_| {
            Ok(ScryfallPrices {
                usd: Some(String::from("1.99")),
                ..ScryfallPrices::default()
            })
        });

        let mut price_source = MockPriceSource::new();
        price_source
            .expect_min_price()
            .with(eq("Lightning Bolt"))
            .times(1)
            .returning(|_| {
                Ok(Some(MinPrice {
                    price: 35,
                    seller: String::from("mtgsale"),
                    url: String::from("https://mtgsale.ru/bolt"),
                }))
            });

        let mut interaction = MockMessageInteraction::new();
        interaction
            .expect_send_photo()
            .withf(|photo: &Photo| {
                photo.picture == Picture::File(PathBuf::from("/tmp/piccache/bolt.jpg"))
                    && photo.caption
                        == "[Lightning Bolt](https://scryfall.com/card/m11/149/lightning-bolt)\n1\\.99$\nmin 35₽ at [mtgsale](https://mtgsale.ru/bolt)"
            })
            .times(1)
            .returning(|_| Ok(()));

        let app = create_app(picture_cache, card_info, price_source);
        app.find(&interaction, &CardQuery::extract("[[$Lightning Bolt]]"))
            .await;
    }

    #[tokio::test]
    async fn test_find_without_prices_still_sends_card() {
        let mut picture_cache = MockPictureCache::new();
        picture_cache
            .expect_get()
            .returning(|_, _| Ok(PathBuf::from("/tmp/piccache/bolt.jpg")));

        let mut card_info = MockCardInfo::new();
        card_info
            .expect_prices()
            .returning(|_| Err(CardInfoError::new(String::from("timeout"))));

        let mut price_source = MockPriceSource::new();
        price_source
            .expect_min_price()
            .returning(|_| Err(PriceSourceError::new(String::from("timeout"))));

        let mut interaction = MockMessageInteraction::new();
        interaction
            .expect_send_photo()
            .withf(|photo: &Photo| {
                photo.caption == "[Lightning Bolt](https://scryfall.com/card/m11/149/lightning-bolt)"
            })
            .times(1)
            .returning(|_| Ok(()));

        let app = create_app(picture_cache, card_info, price_source);
        app.find(&interaction, &CardQuery::extract("[[lightning bolt]]"))
            .await;
    }

    #[tokio::test]
    async fn test_find_skips_card_when_picture_fails() {
        let mut picture_cache = MockPictureCache::new();
        picture_cache
            .expect_get()
            .times(1)
            .returning(|_, _| Err(PictureCacheError::new(String::from("404"))));

        let mut card_info = MockCardInfo::new();
        card_info.expect_prices().never();

        let mut interaction = MockMessageInteraction::new();
        interaction.expect_send_photo().never();
        interaction.expect_reply().never();

        let app = create_app(picture_cache, card_info, MockPriceSource::new());
        app.find(&interaction, &CardQuery::extract("[[lightning bolt]]"))
            .await;
    }

    #[tokio::test]
    async fn test_find_sends_rulings() {
        let mut card_info = MockCardInfo::new();
        card_info
            .expect_rulings()
            .withf(|card: &Card| card.name == "Fire // Ice")
            .times(1)
            .returning(|_| {
                Ok(vec![Ruling {
                    published_at: String::from("2021-06-18"),
                    comment: String::from("You may cast either half."),
                }])
            });

        let mut interaction = MockMessageInteraction::new();
        interaction
            .expect_reply()
            .with(eq(String::from("2021-06-18: You may cast either half.")))
            .times(1)
            .returning(|_| Ok(()));

        let app = create_app(MockPictureCache::new(), card_info, MockPriceSource::new());
        app.find(&interaction, &CardQuery::extract("[[#Ice]]")).await;
    }

    #[tokio::test]
    async fn test_find_splits_long_rulings() {
        let mut card_info = MockCardInfo::new();
        card_info.expect_rulings().times(1).returning(|_| {
            Ok((0..40)
                .map(|i| Ruling {
                    published_at: String::from("2004-10-04"),
                    comment: format!("Ruling number {i:02}. {}", "z".repeat(120)),
                })
                .collect())
        });

        let replies = Arc::new(std::sync::Mutex::new(Vec::new()));
        let mut interaction = MockMessageInteraction::new();
        let recorded = replies.clone();
        interaction.expect_reply().returning(move |message| {
            recorded.lock().unwrap().push(message);
            Ok(())
        });

        let app = create_app(MockPictureCache::new(), card_info, MockPriceSource::new());
        let sent = app
            .find(&interaction, &CardQuery::extract("[[#lightning bolt]]"))
            .await;

        let replies = replies.lock().unwrap();
        assert_eq!(sent, replies.len());
        assert!(replies.len() >= 3);
        assert!(replies.iter().all(|reply| reply.chars().count() <= 2000));
        let numbers: Vec<String> = replies
            .iter()
            .flat_map(|reply| reply.lines())
            .map(|line| line[26..28].to_string())
            .collect();
        let expected: Vec<String> = (0..40).map(|i| format!("{i:02}")).collect();
        assert_eq!(numbers, expected);
    }

    #[tokio::test]
    async fn test_find_command_falls_back_when_nothing_sent() {
        let mut picture_cache = MockPictureCache::new();
        picture_cache
            .expect_get()
            .times(1)
            .returning(|_, _| Err(PictureCacheError::new(String::from("404"))));

        let mut interaction = MockMessageInteraction::new();
        interaction.expect_send_photo().never();
        interaction
            .expect_reply()
            .with(eq(String::from("Sorry, I could not show that card right now")))
            .times(1)
            .returning(|_| Ok(()));

        let app = create_app(picture_cache, MockCardInfo::new(), MockPriceSource::new());
        app.find_command(
            &interaction,
            FindOptions {
                name: String::from("Lightning Bolt"),
            },
        )
        .await;
    }

    #[tokio::test]
    async fn test_find_reports_empty_rulings() {
        let mut card_info = MockCardInfo::new();
        card_info.expect_rulings().returning(|_| Ok(Vec::new()));

        let mut interaction = MockMessageInteraction::new();
        interaction
            .expect_reply()
            .with(eq(String::from(
                "Card \"Lightning Bolt\" does not have specific rulings",
            )))
            .times(1)
            .returning(|_| Ok(()));

        let app = create_app(MockPictureCache::new(), card_info, MockPriceSource::new());
        app.find(&interaction, &CardQuery::extract("[[#lightning bolt]]"))
            .await;
    }

    #[tokio::test]
    async fn test_find_command_with_empty_name() {
        let mut interaction = MockMessageInteraction::new();
        interaction
            .expect_reply()
            .with(eq(String::from("Please tell me which card to look up")))
            .times(1)
            .returning(|_| Ok(()));

        let app = create_app(
            MockPictureCache::new(),
            MockCardInfo::new(),
            MockPriceSource::new(),
        );
        app.find_command(
            &interaction,
            FindOptions {
                name: String::from(" [[ ]] "),
            },
        )
        .await;
    }

    #[tokio::test]
    async fn test_find_command_reports_unknown_card() {
        let mut interaction = MockMessageInteraction::new();
        interaction
            .expect_reply()
            .with(eq(String::from(
                "I could not recognize the following cards:\nBlack Lotus",
            )))
            .times(1)
            .returning(|_| Ok(()));

        let app = create_app(
            MockPictureCache::new(),
            MockCardInfo::new(),
            MockPriceSource::new(),
        );
        app.find_command(
            &interaction,
            FindOptions {
                name: String::from("$Black Lotus"),
            },
        )
        .await;
    }

    #[tokio::test]
    async fn test_find_reports_not_found_once() {
        let mut interaction = MockMessageInteraction::new();
        interaction
            .expect_reply()
            .with(eq(String::from(
                "I could not recognize the following cards:\nBlack Lotus\nMox Pearl",
            )))
            .times(1)
            .returning(|_| Ok(()));

        let app = create_app(
            MockPictureCache::new(),
            MockCardInfo::new(),
            MockPriceSource::new(),
        );
        app.find(
            &interaction,
            &CardQuery::extract("[[Black Lotus]] and [[#Mox Pearl]]"),
        )
        .await;
    }
}
