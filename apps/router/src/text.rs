//! Word-level normalisation shared by the keyword extractor and the keyword classifier.
//!
//! Text is lowercased, punctuation becomes whitespace and each token is folded to a crude
//! singular ("salaries" → "salary", "employees" → "employee"). Phrases are matched on token
//! boundaries, so "uk" never matches inside "ukulele".

/// A normalised view of a piece of text, padded with spaces for boundary-safe phrase search.
#[derive(Debug, Clone)]
pub struct Normalized {
    padded: String,
}

impl Normalized {
    pub fn new(text: &str) -> Self {
        let tokens = tokenize(text);
        Self {
            padded: format!(" {} ", tokens.join(" ")),
        }
    }

    /// True when every token of `phrase` appears here, contiguously and in order.
    pub fn contains_phrase(&self, phrase: &str) -> bool {
        let needle = tokenize(phrase);
        if needle.is_empty() {
            return false;
        }
        self.padded.contains(&format!(" {} ", needle.join(" ")))
    }

    pub fn contains_any(&self, phrases: &[&str]) -> bool {
        phrases.iter().any(|p| self.contains_phrase(p))
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.padded.split_whitespace()
    }

    /// A copy with every occurrence of the given phrases cut out.
    pub fn without_phrases<'a>(&self, phrases: impl IntoIterator<Item = &'a str>) -> Self {
        let mut padded = self.padded.clone();
        for phrase in phrases {
            let needle = tokenize(phrase);
            if needle.is_empty() {
                continue;
            }
            let needle = format!(" {} ", needle.join(" "));
            while padded.contains(&needle) {
                padded = padded.replacen(&needle, " ", 1);
            }
        }
        Self { padded }
    }
}

/// Splits text into lowercase, singular-folded tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(singular)
        .collect()
}

fn singular(token: &str) -> String {
    if token.len() > 4 && token.ends_with("ies") {
        format!("{}y", &token[..token.len() - 3])
    } else if token.len() > 3 && token.ends_with('s') && !token.ends_with("ss") {
        token[..token.len() - 1].to_string()
    } else {
        token.to_string()
    }
}
