use crate::domain::card::Card;
use crate::domain::utils::normalise;
use serde::de::{Deserializer, SeqAccess, Visitor};
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Instant;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Could not open card dump: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not decode card dump: {0}")]
    Decode(#[from] serde_json::Error),
}

/// In-memory lookup over every printed card in the dump.
///
/// Built once before the bot starts serving and never mutated afterwards.
#[derive(Debug, Default)]
pub struct CardIndex {
    by_id: HashMap<Uuid, Card>,
    by_name: HashMap<String, Card>,
}

impl CardIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        let mut index = Self::new();
        for card in cards {
            index.insert(card);
        }
        index
    }

    /// Decodes a JSON array of cards one element at a time.
    ///
    /// # Errors
    /// Fails on the first unreadable or malformed record; no partial index is returned.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, IndexError> {
        let start = Instant::now();
        let mut index = Self::new();

        let mut deserializer = serde_json::Deserializer::from_reader(reader);
        deserializer.deserialize_seq(IndexVisitor(&mut index))?;
        deserializer.end()?;

        log::info!(
            "Indexed {} cards under {} names in {} ms",
            index.by_id.len(),
            index.by_name.len(),
            start.elapsed().as_millis()
        );

        Ok(index)
    }

    /// # Errors
    /// See [`CardIndex::from_reader`].
    pub fn from_path(path: &Path) -> Result<Self, IndexError> {
        log::info!("Decoding card dump {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn insert(&mut self, card: Card) {
        let keys: Vec<String> = card
            .lookup_names()
            .into_iter()
            .map(normalise)
            .collect();

        for key in keys {
            match self.by_name.get(&key) {
                Some(_) if !card.is_base_language() => {}
                _ => {
                    self.by_name.insert(key, card.clone());
                }
            }
        }

        self.by_id.insert(card.id, card);
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Card> {
        self.by_name.get(&normalise(name))
    }

    #[must_use]
    pub fn by_id(&self, id: &Uuid) -> Option<&Card> {
        self.by_id.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    #[must_use]
    pub fn names(&self) -> usize {
        self.by_name.len()
    }
}

struct IndexVisitor<'a>(&'a mut CardIndex);

impl<'de> Visitor<'de> for IndexVisitor<'_> {
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an array of cards")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<(), A::Error> {
        while let Some(card) = seq.next_element::<Card>()? {
            self.0.insert(card);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::tests::create_test_card;
    use uuid::uuid;

    fn printed(id: Uuid, name: &str, printed_name: &str, lang: &str) -> Card {
        Card::new(
            id,
            name.to_string(),
            printed_name.to_string(),
            lang.to_string(),
            None,
            None,
            None,
            None,
        )
    }

    fn russian_bolt() -> Card {
        printed(
            uuid!("11111111-1111-1111-1111-111111111111"),
            "Lightning Bolt",
            "Молния",
            "ru",
        )
    }

    fn english_bolt() -> Card {
        printed(
            uuid!("22222222-2222-2222-2222-222222222222"),
            "Lightning Bolt",
            "",
            "en",
        )
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let index = CardIndex::from_cards([create_test_card()]);

        let card = index.by_name("LIGHTNING bolt").unwrap();
        assert_eq!(card.name, "Lightning Bolt");
    }

    #[test]
    fn test_indexed_card_has_backfilled_printed_name() {
        let index = CardIndex::from_cards([english_bolt()]);

        let card = index.by_name("lightning bolt").unwrap();
        assert_eq!(card.printed_name, "Lightning Bolt");
    }

    #[test]
    fn test_english_overrides_earlier_translation() {
        let index = CardIndex::from_cards([russian_bolt(), english_bolt()]);

        assert_eq!(index.by_name("lightning bolt").unwrap().lang, "en");
    }

    #[test]
    fn test_translation_does_not_override_english() {
        let index = CardIndex::from_cards([english_bolt(), russian_bolt()]);

        assert_eq!(index.by_name("lightning bolt").unwrap().lang, "en");
    }

    #[test]
    fn test_translated_name_resolves_to_translation() {
        let index = CardIndex::from_cards([english_bolt(), russian_bolt()]);

        let card = index.by_name("молния").unwrap();
        assert_eq!(card.lang, "ru");
    }

    #[test]
    fn test_first_non_english_writer_wins() {
        let german = printed(
            uuid!("33333333-3333-3333-3333-333333333333"),
            "Lightning Bolt",
            "Blitzschlag",
            "de",
        );
        let index = CardIndex::from_cards([russian_bolt(), german]);

        assert_eq!(index.by_name("lightning bolt").unwrap().lang, "ru");
        assert_eq!(index.by_name("blitzschlag").unwrap().lang, "de");
    }

    #[test]
    fn test_later_english_print_wins() {
        let reprint = printed(
            uuid!("44444444-4444-4444-4444-444444444444"),
            "Lightning Bolt",
            "",
            "en",
        );
        let index = CardIndex::from_cards([english_bolt(), reprint.clone()]);

        assert_eq!(index.by_name("lightning bolt").unwrap().id, reprint.id);
    }

    #[test]
    fn test_split_card_faces_resolve_to_same_card() {
        let fire_ice = printed(
            uuid!("55555555-5555-5555-5555-555555555555"),
            "Fire // Ice",
            "",
            "en",
        );
        let index = CardIndex::from_cards([fire_ice]);

        let fire = index.by_name("fire").unwrap();
        let ice = index.by_name("ICE").unwrap();
        assert_eq!(fire.id, ice.id);
        assert!(index.by_name("fire // ice").is_none());
    }

    #[test]
    fn test_split_card_printed_faces_are_indexed() {
        let feu_glace = printed(
            uuid!("66666666-6666-6666-6666-666666666666"),
            "Fire // Ice",
            "Feu // Glace",
            "fr",
        );
        let index = CardIndex::from_cards([feu_glace]);

        assert!(index.by_name("feu").is_some());
        assert!(index.by_name("glace").is_some());
        assert!(index.by_name("fire").is_some());
    }

    #[test]
    fn test_id_index_holds_every_print() {
        let index = CardIndex::from_cards([russian_bolt(), english_bolt()]);

        assert_eq!(index.len(), 2);
        assert_eq!(
            index
                .by_id(&uuid!("11111111-1111-1111-1111-111111111111"))
                .unwrap()
                .lang,
            "ru"
        );
    }

    #[test]
    fn test_from_reader_streams_array() {
        let dump = r#"[
            {"id": "11111111-1111-1111-1111-111111111111", "name": "Lightning Bolt", "printed_name": "Молния", "lang": "ru"},
            {"id": "22222222-2222-2222-2222-222222222222", "name": "Lightning Bolt", "lang": "en"},
            {"id": "55555555-5555-5555-5555-555555555555", "name": "Fire // Ice", "lang": "en"}
        ]"#;

        let index = CardIndex::from_reader(dump.as_bytes()).unwrap();

        assert_eq!(index.len(), 3);
        assert_eq!(index.by_name("lightning bolt").unwrap().lang, "en");
        assert_eq!(index.by_name("молния").unwrap().lang, "ru");
        assert!(index.by_name("ice").is_some());
    }

    #[test]
    fn test_from_reader_empty_array() {
        let index = CardIndex::from_reader("[]".as_bytes()).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_from_reader_rejects_malformed_record() {
        let dump = r#"[
            {"id": "11111111-1111-1111-1111-111111111111", "name": "Lightning Bolt", "lang": "en"},
            {"id": "not-a-uuid", "name": "Counterspell", "lang": "en"}
        ]"#;

        assert!(matches!(
            CardIndex::from_reader(dump.as_bytes()),
            Err(IndexError::Decode(_))
        ));
    }

    #[test]
    fn test_from_reader_rejects_truncated_dump() {
        let dump = r#"[{"id": "11111111-1111-1111-1111-111111111111", "name": "Lightning Bolt", "lang": "en"}"#;

        assert!(CardIndex::from_reader(dump.as_bytes()).is_err());
    }

    #[test]
    fn test_from_reader_rejects_trailing_garbage() {
        assert!(CardIndex::from_reader("[] []".as_bytes()).is_err());
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = CardIndex::from_path(Path::new("/definitely/not/here/all.dump.json"));
        assert!(matches!(result, Err(IndexError::Io(_))));
    }
}
