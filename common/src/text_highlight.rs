//! Utilities for highlighting the typed query inside suggestion labels.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightTextSpan {
    pub text: String,
    pub is_highlighted: bool,
    pub index: u64,
}

/// Splits `text` into spans, marking every case-insensitive occurrence of the
/// trimmed `query`. Highlighted spans are numbered from 0 in `index`.
pub fn highlight_query(text: &str, query: &str) -> Vec<HighlightTextSpan> {
    let needle = query.trim().to_lowercase();
    if text.is_empty() {
        return vec![];
    }
    if needle.is_empty() {
        return vec![HighlightTextSpan { text: text.to_string(), is_highlighted: false, index: 0 }];
    }

    // Compare char by char so byte offsets always stay on `text`'s boundaries,
    // even when lowercasing changes a character's length.
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let needle: Vec<char> = needle.chars().collect();
    let matches_at = |start: usize| {
        let mut candidate = chars[start..].iter().flat_map(|(_, c)| c.to_lowercase());
        needle.iter().all(|n| candidate.next() == Some(*n))
    };

    let mut spans: Vec<HighlightTextSpan> = Vec::new();
    let mut plain_start = 0;
    let mut highlight_index = 0;
    let mut i = 0;
    while i < chars.len() {
        if !matches_at(i) {
            i += 1;
            continue;
        }
        // find how many source chars the match spans
        let mut consumed = 0;
        let mut end = i;
        while consumed < needle.len() && end < chars.len() {
            consumed += chars[end].1.to_lowercase().count();
            end += 1;
        }
        let match_start = chars[i].0;
        let match_end = chars.get(end).map(|(offset, _)| *offset).unwrap_or(text.len());
        if plain_start < match_start {
            spans.push(HighlightTextSpan {
                text: text[plain_start..match_start].to_string(),
                is_highlighted: false,
                index: 0,
            });
        }
        spans.push(HighlightTextSpan {
            text: text[match_start..match_end].to_string(),
            is_highlighted: true,
            index: highlight_index,
        });
        highlight_index += 1;
        plain_start = match_end;
        i = end;
    }
    if plain_start < text.len() {
        spans.push(HighlightTextSpan {
            text: text[plain_start..].to_string(),
            is_highlighted: false,
            index: 0,
        });
    }
    spans
}


#[cfg(test)]
mod tests {
    use super::*;

    fn render(spans: &[HighlightTextSpan]) -> String {
        spans
            .iter()
            .map(|s| if s.is_highlighted { format!("[{}]", s.text) } else { s.text.clone() })
            .collect()
    }

    #[test]
    fn marks_every_case_insensitive_occurrence() {
        let spans = highlight_query("Nasdaq 100 ETF tracks the NASDAQ", " nasdaq ");
        assert_eq!(render(&spans), "[Nasdaq] 100 ETF tracks the [NASDAQ]");
        let indexes: Vec<u64> = spans.iter().filter(|s| s.is_highlighted).map(|s| s.index).collect();
        assert_eq!(indexes, [0, 1]);
    }

    #[test]
    fn blank_query_leaves_text_plain() {
        let spans = highlight_query("Global Shares", "   ");
        assert_eq!(spans.len(), 1);
        assert!(!spans[0].is_highlighted);
        assert!(highlight_query("", "x").is_empty());
    }

    #[test]
    fn special_characters_are_literal() {
        assert_eq!(render(&highlight_query("S&P 500 (hedged)", "(hedged)")), "S&P 500 [(hedged)]");
        assert_eq!(render(&highlight_query("Société Générale", "GÉN")), "Société [Gén]érale");
    }
}
