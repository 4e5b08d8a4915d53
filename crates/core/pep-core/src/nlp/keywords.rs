//! Priority-ordered keyword tables
//!
//! A table maps each category to the substrings that trigger it. Categories
//! keep the order they were declared in; that order breaks ties, so the same
//! text always maps to the same category.

use super::normalize;
use crate::{PepError, Result};
use std::fmt;

/// Ordered `category -> keywords` table, validated once at construction
#[derive(Debug, Clone)]
pub struct KeywordTable<C> {
    entries: Vec<(C, Vec<String>)>,
}

impl<C: Copy + PartialEq + fmt::Display> KeywordTable<C> {
    /// Build and validate a table
    ///
    /// Fails when the table or a category is empty, a category repeats, or a
    /// keyword is not already in normalized form (it could never match).
    pub fn new(entries: Vec<(C, Vec<String>)>) -> Result<Self> {
        if entries.is_empty() {
            return Err(PepError::keyword_table("table has no categories"));
        }

        for (i, (category, keywords)) in entries.iter().enumerate() {
            if entries[..i].iter().any(|(c, _)| c == category) {
                return Err(PepError::keyword_table(format!(
                    "category '{}' declared twice",
                    category
                )));
            }
            if keywords.is_empty() {
                return Err(PepError::keyword_table(format!(
                    "category '{}' has no keywords",
                    category
                )));
            }
            for (j, keyword) in keywords.iter().enumerate() {
                if keyword.is_empty() || normalize(keyword) != *keyword {
                    return Err(PepError::keyword_table(format!(
                        "keyword {:?} in '{}' must be lowercase letters and single spaces",
                        keyword, category
                    )));
                }
                if keywords[..j].contains(keyword) {
                    return Err(PepError::keyword_table(format!(
                        "keyword {:?} repeated in '{}'",
                        keyword, category
                    )));
                }
            }
        }

        Ok(Self { entries })
    }

    /// Build a table from static string slices
    pub fn from_static(entries: &[(C, &[&str])]) -> Result<Self> {
        Self::new(
            entries
                .iter()
                .map(|(c, kws)| (*c, kws.iter().map(|k| k.to_string()).collect()))
                .collect(),
        )
    }

    /// Number of distinct keywords of each category found in `text`, in table order
    pub fn hits(&self, text: &str) -> Vec<(C, usize)> {
        self.entries
            .iter()
            .map(|(category, keywords)| {
                let count = keywords.iter().filter(|k| text.contains(k.as_str())).count();
                (*category, count)
            })
            .collect()
    }

    /// Keywords found in `text`, grouped by category, omitting categories with no hit
    pub fn matches(&self, text: &str) -> Vec<(C, Vec<String>)> {
        self.entries
            .iter()
            .filter_map(|(category, keywords)| {
                let found: Vec<String> = keywords
                    .iter()
                    .filter(|k| text.contains(k.as_str()))
                    .cloned()
                    .collect();
                (!found.is_empty()).then_some((*category, found))
            })
            .collect()
    }

    /// Category with the strictly highest non-zero hit count
    ///
    /// Ties go to the category declared first. `None` when nothing matches.
    pub fn best_match(&self, text: &str) -> Option<C> {
        let mut best: Option<(C, usize)> = None;
        for (category, count) in self.hits(text) {
            if count == 0 {
                continue;
            }
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((category, count)),
            }
        }
        best.map(|(category, _)| category)
    }

    /// Categories in priority order
    pub fn categories(&self) -> impl Iterator<Item = C> + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }

    /// Keywords of one category
    pub fn keywords(&self, category: C) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, kws)| kws.as_slice())
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no categories (never, once constructed)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total keyword count across categories
    pub fn keyword_count(&self) -> usize {
        self.entries.iter().map(|(_, kws)| kws.len()).sum()
    }
}
