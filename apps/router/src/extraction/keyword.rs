//! Offline criteria extraction by vocabulary matching. Fast, deterministic, no LLM call.
//!
//! Algorithm:
//! 1. `id N`, `employee N`, `number N` → id
//! 2. "all" / "every" / "entire" ... → all
//! 3. a full name, else a first name, from the vocabulary → name
//! 4. the longest country phrase → country
//! 5. the longest role phrase → job_role; failing that (and with no id or name),
//!    a department word such as "marketing" → job_role, matched as a substring later

use async_trait::async_trait;

use crate::extraction::CriteriaExtractor;
use crate::models::criteria::Criteria;
use crate::models::employee::DirectoryRecord;
use crate::text::{tokenize, Normalized};

const ALL_WORDS: &[&str] = &["all", "every", "everyone", "everybody", "entire", "whole"];

const ID_MARKERS: &[&str] = &["id", "employee", "emp", "number", "no"];

/// Role words too generic to identify a department on their own.
const GENERIC_ROLE_WORDS: &[&str] = &[
    "engineer",
    "manager",
    "analyst",
    "specialist",
    "scientist",
    "designer",
    "director",
    "representative",
    "coordinator",
    "creator",
    "architect",
    "master",
    "counsel",
];

/// Known names, countries and roles the extractor can recognise.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    pub names: Vec<String>,
    pub countries: Vec<String>,
    pub roles: Vec<String>,
}

impl Vocabulary {
    /// Everything the directory knows about, deduplicated, in table order.
    pub fn from_directory(records: &[DirectoryRecord]) -> Self {
        let mut vocab = Self::default();
        for record in records {
            push_unique(&mut vocab.names, &record.name);
            push_unique(&mut vocab.countries, &record.country);
            push_unique(&mut vocab.roles, &record.job_role);
        }
        vocab
    }

    /// Roles only. Backends that do not own identities must not resolve names.
    pub fn from_roles<'a>(roles: impl IntoIterator<Item = &'a str>) -> Self {
        let mut vocab = Self::default();
        for role in roles {
            push_unique(&mut vocab.roles, role);
        }
        vocab
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v.eq_ignore_ascii_case(value)) {
        list.push(value.to_string());
    }
}

pub struct KeywordExtractor {
    vocab: Vocabulary,
}

impl KeywordExtractor {
    pub fn new(vocab: Vocabulary) -> Self {
        Self { vocab }
    }

    pub fn extract_now(&self, query: &str) -> Criteria {
        let text = Normalized::new(query);

        let id = find_id(&text);
        let name = self.find_name(&text);
        let job_role = longest_phrase(&text, &self.vocab.roles).or_else(|| {
            if id.is_none() && name.is_none() {
                self.find_department(&text)
            } else {
                None
            }
        });

        Criteria {
            id,
            name,
            country: longest_phrase(&text, &self.vocab.countries),
            job_role,
            all: text.contains_any(ALL_WORDS),
        }
    }

    fn find_name(&self, text: &Normalized) -> Option<String> {
        longest_phrase(text, &self.vocab.names).or_else(|| {
            self.vocab
                .names
                .iter()
                .find(|name| {
                    name.split_whitespace()
                        .next()
                        .is_some_and(|first| text.contains_phrase(first))
                })
                .cloned()
        })
    }

    fn find_department(&self, text: &Normalized) -> Option<String> {
        text.tokens()
            .find(|token| {
                token.len() >= 3
                    && !GENERIC_ROLE_WORDS.contains(token)
                    && self
                        .vocab
                        .roles
                        .iter()
                        .any(|role| tokenize(role).iter().any(|t| t == token))
            })
            .map(str::to_string)
    }
}

#[async_trait]
impl CriteriaExtractor for KeywordExtractor {
    async fn extract(&self, query: &str) -> Criteria {
        self.extract_now(query)
    }
}

fn find_id(text: &Normalized) -> Option<u32> {
    let tokens: Vec<&str> = text.tokens().collect();
    tokens
        .windows(2)
        .find(|pair| ID_MARKERS.contains(&pair[0]) && pair[1].chars().all(|c| c.is_ascii_digit()))
        .and_then(|pair| pair[1].parse().ok())
}

fn longest_phrase(text: &Normalized, candidates: &[String]) -> Option<String> {
    candidates
        .iter()
        .filter(|c| text.contains_phrase(c))
        .max_by_key(|c| c.len())
        .cloned()
}
