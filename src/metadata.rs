// src/metadata.rs
//
// Cross-reference ids from links.csv and the rankings over collaborator-
// supplied movie metadata. The scraping itself lives in specs::imdb; this
// module only consumes already-extracted records.

use std::path::Path;

use crate::agg;
use crate::config::consts::LINKS_HEADER;
use crate::config::options::LoadOptions;
use crate::core::record;
use crate::logd;
use crate::source::{self, SourceError};
use crate::stats;

/// One row of links.csv: the catalog id with its external database ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkRecord {
    pub movie_id: u32,
    pub imdb_id: String,
    pub tmdb_id: String,
}

/// Read the link table, capped like every other source, sorted by numeric
/// imdb id descending (the order the fetcher walks them in).
pub fn load_links(path: &Path, opts: &LoadOptions) -> Result<Vec<LinkRecord>, SourceError> {
    let lines = source::read_rows(path, &LINKS_HEADER, opts.row_cap)?;

    let mut out = Vec::with_capacity(lines.len());
    for line in &lines {
        let fields = record::split_plain(line);
        let parsed = match (fields.first(), fields.get(1), fields.get(2)) {
            (Some(movie_id), Some(imdb_id), Some(tmdb_id)) => {
                movie_id.parse().ok().map(|movie_id| LinkRecord {
                    movie_id,
                    imdb_id: s!(*imdb_id),
                    tmdb_id: s!(*tmdb_id),
                })
            }
            _ => None,
        };
        match parsed {
            Some(link) => out.push(link),
            None => logd!("skipping unparseable link row: {line}"),
        }
    }

    out.sort_by(|a, b| numeric_id(&b.imdb_id).cmp(&numeric_id(&a.imdb_id)));
    Ok(out)
}

fn numeric_id(imdb_id: &str) -> u64 {
    imdb_id.parse().unwrap_or(0)
}

/// Per-movie metadata as delivered by the external collaborator. Records
/// with an unknown director or budget never make it into a set; the
/// collaborator drops them at extraction time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetadataRecord {
    pub external_id: String,
    pub title: String,
    pub director: String,
    pub budget: i64,
    pub gross: i64,
    pub runtime_min: i64,
}

pub struct MetadataSet {
    records: Vec<MetadataRecord>,
}

impl MetadataSet {
    pub fn from_records(records: Vec<MetadataRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Top-n directors by number of movies, descending, stable ties.
    pub fn top_directors(&self, n: usize) -> Vec<(String, usize)> {
        let mut rows =
            agg::count_occurrences(self.records.iter().map(|r| r.director.clone()));
        agg::sort_desc(&mut rows);
        agg::top_n(rows, n)
    }

    /// Top-n movies by budget, descending.
    pub fn most_expensive(&self, n: usize) -> Vec<(String, i64)> {
        let mut rows: Vec<(String, i64)> = self
            .records
            .iter()
            .map(|r| (r.title.clone(), r.budget))
            .collect();
        agg::sort_desc(&mut rows);
        agg::top_n(rows, n)
    }

    /// Top-n movies by worldwide gross minus budget, descending.
    pub fn most_profitable(&self, n: usize) -> Vec<(String, i64)> {
        let mut rows: Vec<(String, i64)> = self
            .records
            .iter()
            .map(|r| (r.title.clone(), r.gross - r.budget))
            .collect();
        agg::sort_desc(&mut rows);
        agg::top_n(rows, n)
    }

    /// Top-n movies by runtime in minutes, descending.
    pub fn longest_runtime(&self, n: usize) -> Vec<(String, i64)> {
        let mut rows: Vec<(String, i64)> = self
            .records
            .iter()
            .map(|r| (r.title.clone(), r.runtime_min))
            .collect();
        agg::sort_desc(&mut rows);
        agg::top_n(rows, n)
    }

    /// Top-n movies by budget per minute of runtime, descending, rounded to
    /// 2 decimals. Records without a known runtime are skipped.
    pub fn top_cost_per_minute(&self, n: usize) -> Vec<(String, f64)> {
        let mut rows: Vec<(String, f64)> = self
            .records
            .iter()
            .filter(|r| r.runtime_min > 0)
            .map(|r| (r.title.clone(), stats::round2(r.budget as f64 / r.runtime_min as f64)))
            .collect();
        agg::sort_desc_f64(&mut rows);
        agg::top_n(rows, n)
    }
}
