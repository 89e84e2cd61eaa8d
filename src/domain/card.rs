use serde::Deserialize;
use uuid::Uuid;

pub const BASE_LANGUAGE: &str = "en";
pub const FACE_SEPARATOR: &str = " // ";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "ScryfallCard")]
pub struct Card {
    pub id: Uuid,
    pub name: String,
    pub printed_name: String,
    pub lang: String,
    pub image_url: Option<String>,
    pub info_url: Option<String>,
    pub rulings_url: Option<String>,
    pub scryfall_url: Option<String>,
}

#[derive(Deserialize)]
struct ImageUris {
    normal: Option<String>,
}

#[derive(Deserialize)]
struct CardFace {
    image_uris: Option<ImageUris>,
}

#[derive(Deserialize)]
struct ScryfallCard {
    id: Uuid,
    name: String,
    #[serde(default)]
    printed_name: Option<String>,
    #[serde(default)]
    lang: String,
    image_uris: Option<ImageUris>,
    #[serde(default)]
    card_faces: Vec<CardFace>,
    uri: Option<String>,
    rulings_uri: Option<String>,
    scryfall_uri: Option<String>,
}

impl From<ScryfallCard> for Card {
    fn from(raw: ScryfallCard) -> Self {
        let image_url = raw
            .image_uris
            .and_then(|uris| uris.normal)
            .or_else(|| {
                raw.card_faces
                    .into_iter()
                    .find_map(|face| face.image_uris.and_then(|uris| uris.normal))
            });

        Self::new(
            raw.id,
            raw.name,
            raw.printed_name.unwrap_or_default(),
            raw.lang,
            image_url,
            raw.uri,
            raw.rulings_uri,
            raw.scryfall_uri,
        )
    }
}

impl Card {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        id: Uuid,
        name: String,
        printed_name: String,
        lang: String,
        image_url: Option<String>,
        info_url: Option<String>,
        rulings_url: Option<String>,
        scryfall_url: Option<String>,
    ) -> Self {
        let printed_name = if printed_name.is_empty() {
            name.clone()
        } else {
            printed_name
        };

        Self {
            id,
            name,
            printed_name,
            lang,
            image_url,
            info_url,
            rulings_url,
            scryfall_url,
        }
    }

    #[must_use]
    pub fn is_base_language(&self) -> bool {
        self.lang == BASE_LANGUAGE
    }

    /// Every name this card can be looked up by, not yet lowercased.
    ///
    /// Multi-faced cards answer to each face of both the canonical and the
    /// printed name instead of the combined name.
    #[must_use]
    pub fn lookup_names(&self) -> Vec<&str> {
        if self.name.contains("//") {
            self.name
                .split(FACE_SEPARATOR)
                .chain(self.printed_name.split(FACE_SEPARATOR))
                .collect()
        } else {
            vec![self.name.as_str(), self.printed_name.as_str()]
        }
    }
}
