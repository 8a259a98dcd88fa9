use std::collections::{hash_map, HashMap};

use log::debug;

use crate::topk::{self, FrequencyEntry};

/// Occurrence count for every distinct word of a document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowercases `text`, splits it on whitespace and counts every token
    /// that has at least `min_len` characters.
    pub fn from_text(text: &str, min_len: usize) -> Self {
        let lowered = text.to_lowercase();
        let mut table = Self::new();

        for word in lowered
            .split_whitespace()
            .filter(|w| w.chars().count() >= min_len)
        {
            table.record(word);
        }

        debug!(
            "counted {} words, {} distinct (min length {})",
            table.total_words(),
            table.len(),
            min_len
        );
        table
    }

    /// Adds one occurrence of `word`, starting from zero if it is new.
    pub fn record(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_owned(), 1);
            }
        }
    }

    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens that passed the filter.
    pub fn total_words(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, usize> {
        self.counts.iter()
    }

    pub fn into_entries(self) -> impl Iterator<Item = FrequencyEntry> {
        self.counts.into_iter().map(FrequencyEntry::from)
    }

    /// Consumes the table and keeps its `k` most frequent words.
    pub fn top_k(self, k: usize) -> Vec<FrequencyEntry> {
        topk::top_k(self.counts, k)
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut table = Self::new();
        for word in iter {
            table.record(word.as_ref());
        }
        table
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (&'a String, &'a usize);
    type IntoIter = hash_map::Iter<'a, String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
