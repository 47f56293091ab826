// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction and per-field prefix lookup.
//!
//! # Layout
//!
//! One `FieldIndex` per searchable field, in declaration order
//! (title, excerpt, tags). Each holds a sorted vocabulary of normalized
//! tokens and, at the same position, the postings for that token:
//!
//! ```text
//! vocabulary: ["garden", "gardening", "grow"]
//! postings:   [[(0,1)],  [(2,0),(3,4)], [(1,0)]]
//!               record, token position
//! ```
//!
//! A prefix query is a binary search for the first term `>= prefix` followed
//! by a linear walk while terms still start with the prefix. With a few
//! hundred writings the vocabulary is small enough that nothing fancier pays
//! for itself.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **VOCAB_SORTED**: `vocabulary` is strictly ascending
//! 2. **ALIGNED**: `vocabulary.len() == postings.len()`
//! 3. **POSTINGS_SORTED**: each posting list is sorted by (record, position)
//! 4. **IN_RANGE**: every `posting.record < records.len()`
//!
//! `SearchIndex::build` upholds all four. A deserialized index may not, which
//! is why lookups return `Result` and every query runs `validate` first.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::error::{GardenError, SearchError};
use crate::types::SearchRecord;
use crate::utils::tokenize;

/// The three searchable fields, in merge priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Title,
    Excerpt,
    Tags,
}

impl SearchField {
    pub const ALL: [SearchField; 3] = [SearchField::Title, SearchField::Excerpt, SearchField::Tags];

    pub fn name(self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Excerpt => "excerpt",
            SearchField::Tags => "tags",
        }
    }

    /// Tokens of this field for one record, in reading order. Tags are
    /// tokenized one after another so positions keep counting across tags.
    pub fn tokens(self, record: &SearchRecord) -> Vec<String> {
        match self {
            SearchField::Title => tokenize(&record.title),
            SearchField::Excerpt => tokenize(&record.excerpt),
            SearchField::Tags => record.tags.iter().flat_map(|tag| tokenize(tag)).collect(),
        }
    }
}

/// One occurrence of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Posting {
    pub record: u32,
    pub position: u32,
}

/// Inverted index over a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldIndex {
    pub field: SearchField,
    pub vocabulary: Vec<String>,
    pub postings: Vec<Vec<Posting>>,
}

/// How well one record matched one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMatch {
    pub record: u32,
    /// Query terms that matched a whole token rather than just a prefix.
    pub exact_terms: usize,
    /// Position of the earliest matching token.
    pub first_position: u32,
}

impl FieldIndex {
    fn build(field: SearchField, records: &[SearchRecord]) -> Self {
        let mut terms: BTreeMap<String, Vec<Posting>> = BTreeMap::new();

        for (record, item) in records.iter().enumerate() {
            for (position, token) in field.tokens(item).into_iter().enumerate() {
                terms.entry(token).or_default().push(Posting {
                    record: record as u32,
                    position: position as u32,
                });
            }
        }

        let (vocabulary, postings) = terms.into_iter().unzip();
        FieldIndex {
            field,
            vocabulary,
            postings,
        }
    }

    /// Terms starting with `prefix`, with their postings.
    pub fn prefix_matches<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a [Posting])> + 'a {
        let start = self.vocabulary.partition_point(|term| term.as_str() < prefix);
        self.vocabulary[start..]
            .iter()
            .zip(self.postings[start.min(self.postings.len())..].iter())
            .take_while(move |(term, _)| term.starts_with(prefix))
            .map(|(term, postings)| (term.as_str(), postings.as_slice()))
    }

    /// Records in which every query term prefix-matches some token, best
    /// first: more exact terms, then earlier first match, then snapshot order.
    pub fn search(
        &self,
        terms: &[String],
        record_count: usize,
    ) -> Result<Vec<FieldMatch>, SearchError> {
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        // record -> (terms matched so far, exact terms, first position)
        let mut acc: HashMap<u32, (usize, usize, u32)> = HashMap::new();

        for (i, term) in terms.iter().enumerate() {
            // record -> (exact, first position) for this term
            let mut hits: HashMap<u32, (bool, u32)> = HashMap::new();
            for (token, postings) in self.prefix_matches(term) {
                let exact = token == term;
                for posting in postings {
                    if posting.record as usize >= record_count {
                        return Err(SearchError::DanglingPosting {
                            record: posting.record,
                            len: record_count,
                        });
                    }
                    let hit = hits.entry(posting.record).or_insert((false, u32::MAX));
                    hit.0 |= exact;
                    hit.1 = hit.1.min(posting.position);
                }
            }

            for (record, (exact, position)) in hits {
                if i == 0 {
                    acc.insert(record, (1, usize::from(exact), position));
                } else if let Some(entry) = acc.get_mut(&record) {
                    if entry.0 == i {
                        entry.0 += 1;
                        entry.1 += usize::from(exact);
                        entry.2 = entry.2.min(position);
                    }
                }
            }
        }

        let mut matches: Vec<FieldMatch> = acc
            .into_iter()
            .filter(|(_, (matched, _, _))| *matched == terms.len())
            .map(|(record, (_, exact_terms, first_position))| FieldMatch {
                record,
                exact_terms,
                first_position,
            })
            .collect();

        matches.sort_by(|a, b| {
            b.exact_terms
                .cmp(&a.exact_terms)
                .then_with(|| a.first_position.cmp(&b.first_position))
                .then_with(|| a.record.cmp(&b.record))
        });
        Ok(matches)
    }

    /// Number of distinct terms.
    pub fn term_count(&self) -> usize {
        self.vocabulary.len()
    }
}

/// A built search index: the record snapshot plus one `FieldIndex` per field.
///
/// Immutable once built. To pick up new content build a fresh index from a
/// fresh snapshot (see `SearchService::rebuild`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchIndex {
    pub(crate) records: Vec<SearchRecord>,
    pub(crate) fields: Vec<FieldIndex>,
}

impl Default for SearchIndex {
    fn default() -> Self {
        SearchIndex::build(Vec::new())
    }
}

impl SearchIndex {
    /// Build the index over `records`. Record order is kept and used as the
    /// final tie-breaker when ranking.
    pub fn build(records: Vec<SearchRecord>) -> Self {
        let fields = SearchField::ALL
            .iter()
            .map(|&field| FieldIndex::build(field, &records))
            .collect();
        SearchIndex { records, fields }
    }

    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The index for `field`, or an error if the field table is missing or
    /// out of place.
    pub fn field(&self, field: SearchField) -> Result<&FieldIndex, SearchError> {
        let slot = SearchField::ALL
            .iter()
            .position(|&f| f == field)
            .unwrap_or_default();
        match self.fields.get(slot) {
            Some(index) if index.field == field && self.fields.len() == SearchField::ALL.len() => {
                Ok(index)
            }
            _ => Err(SearchError::FieldCount {
                expected: SearchField::ALL.len(),
                found: self.fields.len(),
            }),
        }
    }

    /// Total distinct terms across all fields.
    pub fn term_count(&self) -> usize {
        self.fields.iter().map(FieldIndex::term_count).sum()
    }

    /// Check every invariant listed in the module docs.
    pub fn validate(&self) -> Result<(), SearchError> {
        for &field in &SearchField::ALL {
            let index = self.field(field)?;
            if index.vocabulary.len() != index.postings.len() {
                return Err(SearchError::FieldCount {
                    expected: index.vocabulary.len(),
                    found: index.postings.len(),
                });
            }
            for pair in index.vocabulary.windows(2) {
                if pair[0] >= pair[1] {
                    return Err(SearchError::UnsortedVocabulary {
                        field: field.name(),
                        term: pair[1].clone(),
                    });
                }
            }
            for posting in index.postings.iter().flatten() {
                if posting.record as usize >= self.records.len() {
                    return Err(SearchError::DanglingPosting {
                        record: posting.record,
                        len: self.records.len(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Serialize the whole index, postings included.
    pub fn to_json(&self) -> Result<String, GardenError> {
        serde_json::to_string(self).map_err(|source| GardenError::Serialize {
            what: "search index",
            source,
        })
    }

    /// Load a prebuilt index. Only the JSON shape is checked here; table
    /// consistency is checked by `validate`, which every query runs first.
    pub fn from_json(path: &Path, json: &str) -> Result<Self, GardenError> {
        serde_json::from_str(json).map_err(|source| GardenError::SearchData {
            path: path.to_path_buf(),
            source,
        })
    }
}
