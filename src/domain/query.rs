use crate::domain::utils::{self, REGEX_COLLECTION};

const PRICE_SIGIL: char = '$';
const RULINGS_SIGIL: char = '#';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Image,
    Price,
    Rulings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardQuery {
    requested: String,
    key: String,
    view: View,
}

impl CardQuery {
    /// Parses one raw reference such as `[[#Fire // Ice]]` or a command argument.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == '[' || c == ']');

        let (view, rest) = if let Some(rest) = trimmed.strip_prefix(PRICE_SIGIL) {
            (View::Price, rest)
        } else if let Some(rest) = trimmed.strip_prefix(RULINGS_SIGIL) {
            (View::Rulings, rest)
        } else {
            (View::Image, trimmed)
        };

        let requested = rest.trim();
        if requested.is_empty() {
            return None;
        }

        Some(Self {
            requested: requested.to_string(),
            key: utils::normalise(requested),
            view,
        })
    }

    /// Every bracketed reference in a free-text message, in order of appearance.
    #[must_use]
    pub fn extract(message: &str) -> Vec<Self> {
        REGEX_COLLECTION
            .cards
            .captures_iter(message)
            .filter_map(|capture| Self::parse(capture.get(1)?.as_str()))
            .collect()
    }

    #[must_use]
    pub fn requested(&self) -> &str {
        &self.requested
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }
}
