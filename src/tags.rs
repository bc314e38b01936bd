// src/tags.rs
//
// User-supplied tag strings and their reports. Uniqueness queries collapse
// repeats; popularity counts every occurrence.

use std::collections::HashSet;
use std::path::Path;

use crate::agg;
use crate::config::consts::TAGS_HEADER;
use crate::config::options::LoadOptions;
use crate::core::record;
use crate::logd;
use crate::source::{self, SourceError};

pub struct TagIndex {
    tags: Vec<String>,
}

impl TagIndex {
    pub fn from_tags(tags: Vec<String>) -> Self {
        Self { tags }
    }

    pub fn load(path: &Path, opts: &LoadOptions) -> Result<Self, SourceError> {
        let lines = source::read_rows(path, &TAGS_HEADER, opts.row_cap)?;
        Ok(Self::from_lines(&lines))
    }

    pub fn load_or_empty(path: &Path, opts: &LoadOptions) -> Self {
        let lines = source::read_rows_or_empty(path, &TAGS_HEADER, opts.row_cap);
        Self::from_lines(&lines)
    }

    fn from_lines(lines: &[String]) -> Self {
        let mut tags = Vec::with_capacity(lines.len());
        for line in lines {
            // userId,movieId,tag,timestamp — the tag is field 2. Tags with
            // embedded commas are cut short; the upstream files do not quote
            // them and the historical reader split the same way.
            let fields = record::split_plain(line);
            match fields.get(2) {
                Some(tag) if !tag.is_empty() => tags.push(s!(*tag)),
                _ => logd!("skipping tag row without a tag field: {line}"),
            }
        }
        Self { tags }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Distinct tags in first-encounter order.
    fn unique(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for tag in &self.tags {
            if seen.insert(tag.as_str()) {
                out.push(tag.as_str());
            }
        }
        out
    }

    /// Top-n distinct tags by whitespace-separated word count, descending.
    pub fn most_words_top(&self, n: usize) -> Vec<(String, usize)> {
        let mut rows: Vec<(String, usize)> = self
            .unique()
            .into_iter()
            .map(|tag| (s!(tag), tag.split_whitespace().count()))
            .collect();
        agg::sort_desc(&mut rows);
        agg::top_n(rows, n)
    }

    /// Top-n distinct tags by character length, descending.
    pub fn longest_top(&self, n: usize) -> Vec<String> {
        let mut rows: Vec<(String, usize)> = self
            .unique()
            .into_iter()
            .map(|tag| (s!(tag), tag.chars().count()))
            .collect();
        agg::sort_desc(&mut rows);
        agg::top_n(rows, n).into_iter().map(|(tag, _)| tag).collect()
    }

    /// Tags present in both of the two top-n sets above. Set intersection;
    /// returned sorted ascending so the result is deterministic.
    pub fn intersection_of_top(&self, n: usize) -> Vec<String> {
        let by_words: HashSet<String> =
            self.most_words_top(n).into_iter().map(|(tag, _)| tag).collect();
        let mut out: Vec<String> = self
            .longest_top(n)
            .into_iter()
            .filter(|tag| by_words.contains(tag))
            .collect();
        out.sort();
        out
    }

    /// Top-n tags by occurrence count — *not* deduplicated; applying the
    /// same tag twice counts twice.
    pub fn most_frequent(&self, n: usize) -> Vec<(String, usize)> {
        let mut rows = agg::count_occurrences(self.tags.iter().map(|t| s!(t.as_str())));
        agg::sort_desc(&mut rows);
        agg::top_n(rows, n)
    }

    /// Distinct tags containing `needle` case-insensitively, sorted
    /// ascending.
    pub fn containing(&self, needle: &str) -> Vec<String> {
        let needle = needle.to_lowercase();
        let mut out: Vec<String> = self
            .unique()
            .into_iter()
            .filter(|tag| tag.to_lowercase().contains(&needle))
            .map(|tag| s!(tag))
            .collect();
        out.sort();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(tags: &[&str]) -> TagIndex {
        TagIndex::from_tags(tags.iter().map(|t| s!(*t)).collect())
    }

    #[test]
    fn most_words_ranks_deduplicated_tags() {
        let idx = index(&["so bad it is good", "funny", "so bad it is good", "dark comedy"]);
        let rows = idx.most_words_top(2);
        assert_eq!(rows, vec![(s!("so bad it is good"), 5), (s!("dark comedy"), 2)]);
    }

    #[test]
    fn longest_ranks_by_char_count() {
        let idx = index(&["aa", "bbbb", "ccc", "bbbb"]);
        assert_eq!(idx.longest_top(2), vec![s!("bbbb"), s!("ccc")]);
    }

    #[test]
    fn intersection_is_order_independent() {
        let idx = index(&["one two three four", "x", "abcdefghijklmnop"]);
        // Both top-2 sets contain the long multi-word tag and the long
        // single-word tag.
        let both = idx.intersection_of_top(2);
        assert_eq!(both, vec![s!("abcdefghijklmnop"), s!("one two three four")]);
    }

    #[test]
    fn most_frequent_counts_occurrences_not_distinct_tags() {
        let idx = index(&["x", "x", "y"]);
        assert_eq!(idx.most_frequent(1), vec![(s!("x"), 2)]);
    }

    #[test]
    fn containing_is_case_insensitive_and_sorted() {
        let idx = index(&["Dark Comedy", "comedy gold", "drama", "comedy gold"]);
        assert_eq!(idx.containing("COMEDY"), vec![s!("Dark Comedy"), s!("comedy gold")]);
        assert!(idx.containing("western").is_empty());
    }

    #[test]
    fn top_lengths_bounded_by_distinct_count() {
        let idx = index(&["a", "a", "b"]);
        assert_eq!(idx.most_words_top(10).len(), 2);
        assert_eq!(idx.longest_top(10).len(), 2);
    }
}
