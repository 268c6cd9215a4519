//! Sentence boundary detection for extractive summarization.
//!
//! A compiled-regex splitter: candidate boundaries are runs of terminal
//! punctuation followed by whitespace, accepted only when the next
//! character plausibly opens a sentence and the preceding word is not an
//! abbreviation, an initial, or similar false terminator.

use regex::Regex;

/// Words whose trailing period does not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "hon", "sr", "jr", "st", "vs", "etc", "e.g", "i.e",
    "cf", "fig", "figs", "eq", "al", "inc", "ltd", "co", "corp", "dept", "univ", "assn", "no",
    "nos", "vol", "vols", "pp", "approx", "est", "u.s", "u.k",
];

/// Splits text into sentences, preserving original order.
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    boundary: Regex,
}

impl SentenceSplitter {
    /// Create a splitter with the default boundary rules.
    pub fn new() -> Self {
        // Terminal punctuation, optional closing quotes/brackets, then
        // the whitespace that separates sentences.
        Self {
            boundary: Regex::new(r#"[.!?]+["'”’)\]]*\s+"#).expect("sentence boundary pattern"),
        }
    }

    /// Split `text` into sentences.
    ///
    /// Returns an empty vector for blank input. Sentences come back
    /// trimmed, in their original order, with terminal punctuation kept.
    pub fn split(&self, text: &str) -> Vec<String> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        let mut sentences = Vec::new();
        let mut start = 0;

        for m in self.boundary.find_iter(text) {
            if !self.is_boundary(text, m.start(), m.end()) {
                continue;
            }
            let sentence = text[start..m.end()].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            start = m.end();
        }

        if start < text.len() {
            let tail = text[start..].trim();
            if !tail.is_empty() {
                sentences.push(tail.to_string());
            }
        }
        sentences
    }

    /// Decide whether a matched candidate actually ends a sentence.
    fn is_boundary(&self, text: &str, punct_start: usize, resume: usize) -> bool {
        // The following character must plausibly open a sentence.
        let opens_sentence = text[resume..].chars().next().map_or(false, |c| {
            c.is_uppercase() || c.is_ascii_digit() || matches!(c, '"' | '\u{201C}' | '\u{2018}' | '\'' | '(')
        });
        if !opens_sentence {
            return false;
        }

        // '!' and '?' always terminate; only '.' has false positives.
        if !text[punct_start..].starts_with('.') {
            return true;
        }

        let prev_word = text[..punct_start]
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("");
        let normalized: String = prev_word
            .trim_start_matches(|c: char| !c.is_alphanumeric())
            .to_ascii_lowercase();

        if ABBREVIATIONS.contains(&normalized.as_str()) {
            return false;
        }
        // Single-letter initials: "J. Smith".
        if normalized.len() == 1 && normalized.chars().all(char::is_alphabetic) {
            return false;
        }
        true
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}
