use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Longest message content Discord accepts, in characters.
pub const MESSAGE_LIMIT: usize = 2000;

const CARD_REFERENCE_RE: &str = r"\[\[(.*?)\]\]";
const MARKDOWN_TO_ESCAPE: [char; 15] = [
    '\\', '`', '*', '_', '{', '}', '[', ']', '(', ')', '#', '+', '-', '.', '!',
];

pub static REGEX_COLLECTION: LazyLock<RegexCollection> = LazyLock::new(|| {
    let cards = Regex::new(CARD_REFERENCE_RE).expect("Invalid regex");
    RegexCollection { cards }
});

pub struct RegexCollection {
    pub cards: Regex,
}

/// Lookup key for a card name: NFC normalised and lowercased.
#[must_use]
pub fn normalise(name: &str) -> String {
    name.nfc().collect::<String>().to_lowercase()
}

#[must_use]
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_TO_ESCAPE.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Joins lines into messages of at most `limit` characters, keeping order.
/// A line longer than `limit` is cut on its own.
#[must_use]
pub fn chunk_lines<S: AsRef<str>>(lines: &[S], limit: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in lines {
        let line = line.as_ref();
        let line_len = line.chars().count();
        let separator = usize::from(!current.is_empty());

        if current_len + separator + line_len <= limit {
            if separator == 1 {
                current.push('\n');
            }
            current.push_str(line);
            current_len += separator + line_len;
            continue;
        }

        if !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if line_len <= limit {
            current.push_str(line);
            current_len = line_len;
            continue;
        }

        let chars: Vec<char> = line.chars().collect();
        for piece in chars.chunks(limit.max(1)) {
            chunks.push(piece.iter().collect());
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalise_lowercases() {
        assert_eq!(normalise("Lightning Bolt"), "lightning bolt");
    }

    #[test]
    fn test_normalise_keeps_punctuation() {
        assert_eq!(normalise("Jace, the Mind Sculptor"), "jace, the mind sculptor");
    }

    #[test]
    fn test_normalise_composes_accents() {
        assert_eq!(normalise("Re\u{301}cupe\u{301}ration"), "récupération");
    }

    #[test]
    fn test_normalise_cyrillic() {
        assert_eq!(normalise("Молния"), "молния");
    }

    #[test]
    fn test_escape_markdown_plain_text() {
        assert_eq!(escape_markdown("Lightning Bolt"), "Lightning Bolt");
    }

    #[test]
    fn test_escape_markdown_price() {
        assert_eq!(escape_markdown("1.99"), "1\\.99");
    }

    #[test]
    fn test_escape_markdown_every_reserved_character() {
        assert_eq!(
            escape_markdown("\\`*_{}[]()#+-.!"),
            "\\\\\\`\\*\\_\\{\\}\\[\\]\\(\\)\\#\\+\\-\\.\\!"
        );
    }

    #[test]
    fn test_escape_markdown_card_name() {
        assert_eq!(
            escape_markdown("Ach! Hans, Run!"),
            "Ach\\! Hans, Run\\!"
        );
    }

    #[test]
    fn test_chunk_lines_fits_in_one_message() {
        assert_eq!(chunk_lines(&["one", "two"], 20), vec!["one\ntwo"]);
    }

    #[test]
    fn test_chunk_lines_breaks_between_lines() {
        assert_eq!(
            chunk_lines(&["aaaa", "bbbb", "cccc"], 9),
            vec!["aaaa\nbbbb", "cccc"]
        );
    }

    #[test]
    fn test_chunk_lines_counts_characters() {
        assert_eq!(chunk_lines(&["ёёё", "ёёё"], 7), vec!["ёёё\nёёё"]);
    }

    #[test]
    fn test_chunk_lines_cuts_overlong_line() {
        assert_eq!(
            chunk_lines(&["ab", "cdefghij", "k"], 4),
            vec!["ab", "cdef", "ghij", "k"]
        );
    }

    #[test]
    fn test_chunk_lines_empty() {
        assert!(chunk_lines::<&str>(&[], 10).is_empty());
    }

    #[test]
    fn test_card_regex_is_lazy() {
        let captures: Vec<&str> = REGEX_COLLECTION
            .cards
            .captures_iter("[[Fire // Ice]] and [[Counterspell]]")
            .filter_map(|capture| capture.get(1))
            .map(|m| m.as_str())
            .collect();

        assert_eq!(captures, vec!["Fire // Ice", "Counterspell"]);
    }
}
