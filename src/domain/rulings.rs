use crate::domain::card::Card;
use crate::domain::utils::{chunk_lines, MESSAGE_LIMIT};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ruling {
    pub published_at: String,
    pub comment: String,
}

/// Rulings as one line each, split into as many messages as Discord needs.
#[must_use]
pub fn format(card: &Card, rulings: &[Ruling]) -> Vec<String> {
    if rulings.is_empty() {
        return vec![format!(
            "Card \"{}\" does not have specific rulings",
            card.printed_name
        )];
    }

    let lines: Vec<String> = rulings
        .iter()
        .map(|ruling| format!("{}: {}", ruling.published_at, ruling.comment))
        .collect();
    chunk_lines(&lines, MESSAGE_LIMIT)
}
