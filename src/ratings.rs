// src/ratings.rs
//
// Rating records plus the two report views over them. The views borrow the
// owning stores instead of pretending to be part of them: `MovieRatings`
// joins the rating store against the catalog, `UserRatings` groups the same
// store by user.

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Datelike};

use crate::agg;
use crate::catalog::Catalog;
use crate::config::consts::RATINGS_HEADER;
use crate::config::options::LoadOptions;
use crate::core::record;
use crate::logd;
use crate::source::{self, SourceError};
use crate::stats::{self, Metric};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rating {
    pub user_id: u32,
    pub movie_id: u32,
    /// Half-step score in 0.5..=5.0.
    pub score: f64,
    /// UTC epoch seconds.
    pub timestamp: i64,
}

pub struct RatingStore {
    ratings: Vec<Rating>,
}

impl RatingStore {
    pub fn from_records(ratings: Vec<Rating>) -> Self {
        Self { ratings }
    }

    pub fn load(path: &Path, opts: &LoadOptions) -> Result<Self, SourceError> {
        let lines = source::read_rows(path, &RATINGS_HEADER, opts.row_cap)?;
        Ok(Self::from_lines(&lines))
    }

    pub fn load_or_empty(path: &Path, opts: &LoadOptions) -> Self {
        let lines = source::read_rows_or_empty(path, &RATINGS_HEADER, opts.row_cap);
        Self::from_lines(&lines)
    }

    fn from_lines(lines: &[String]) -> Self {
        let mut ratings = Vec::with_capacity(lines.len());
        for line in lines {
            match parse_rating_line(line) {
                Some(r) => ratings.push(r),
                None => logd!("skipping unparseable rating row: {line}"),
            }
        }
        Self { ratings }
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    pub fn records(&self) -> &[Rating] {
        &self.ratings
    }

    /// Rating counts per UTC calendar year of the timestamp, years
    /// ascending.
    pub fn count_by_year(&self) -> Vec<(i32, usize)> {
        let mut rows =
            agg::count_occurrences(self.ratings.iter().filter_map(|r| utc_year(r.timestamp)));
        agg::sort_asc(&mut rows);
        rows
    }

    /// Rating counts per exact half-step score, scores ascending.
    pub fn count_by_score(&self) -> Vec<(f64, usize)> {
        let rows =
            agg::count_occurrences(self.ratings.iter().map(|r| (r.score * 10.0).round() as i64));
        let mut rows: Vec<(f64, usize)> =
            rows.into_iter().map(|(k, c)| (k as f64 / 10.0, c)).collect();
        agg::sort_asc(&mut rows);
        rows
    }
}

fn parse_rating_line(line: &str) -> Option<Rating> {
    let fields = record::split_plain(line);
    if fields.len() < 4 {
        return None;
    }
    Some(Rating {
        user_id: fields[0].parse().ok()?,
        movie_id: fields[1].parse().ok()?,
        score: fields[2].parse().ok()?,
        timestamp: fields[3].parse().ok()?,
    })
}

fn utc_year(ts: i64) -> Option<i32> {
    DateTime::from_timestamp(ts, 0).map(|dt| dt.year())
}

/* ---------------- Movie-scoped reports ---------------- */

/// Rating reports keyed by movie title. Joins are silent: ratings whose
/// movie id is absent from the catalog are ignored, and movies without
/// ratings drop out of every ranking here.
pub struct MovieRatings<'a> {
    catalog: &'a Catalog,
    store: &'a RatingStore,
}

impl<'a> MovieRatings<'a> {
    pub fn new(catalog: &'a Catalog, store: &'a RatingStore) -> Self {
        Self { catalog, store }
    }

    /// Scores per rated movie, in catalog ingestion order. Scores keep
    /// store arrival order within each movie.
    fn grouped(&self) -> Vec<(&'a str, Vec<f64>)> {
        let mut index: HashMap<u32, Vec<f64>> = HashMap::new();
        for r in self.store.records() {
            index.entry(r.movie_id).or_default().push(r.score);
        }

        let mut out = Vec::new();
        for m in self.catalog.movies() {
            if let Some(scores) = index.remove(&m.id) {
                out.push((m.title.as_str(), scores));
            }
        }
        out
    }

    /// Top-n movies by number of ratings, descending. Result length is
    /// `min(n, rated movies)`.
    pub fn top_by_count(&self, n: usize) -> Vec<(String, usize)> {
        let mut rows: Vec<(String, usize)> = self
            .grouped()
            .into_iter()
            .map(|(title, scores)| (s!(title), scores.len()))
            .collect();
        agg::sort_desc(&mut rows);
        agg::top_n(rows, n)
    }

    /// Top-n movies by mean or median score (see `Metric` for the argument
    /// contract), descending, values rounded to 2 decimals.
    pub fn top_by_metric(&self, n: usize, metric: Metric) -> Vec<(String, f64)> {
        let mut rows: Vec<(String, f64)> = self
            .grouped()
            .into_iter()
            .map(|(title, scores)| (s!(title), metric.apply(&scores)))
            .collect();
        agg::sort_desc_f64(&mut rows);
        agg::top_n(rows, n)
    }

    /// Top-n most controversial movies: sample variance of their scores,
    /// descending.
    pub fn top_by_variance(&self, n: usize) -> Vec<(String, f64)> {
        let mut rows: Vec<(String, f64)> = self
            .grouped()
            .into_iter()
            .map(|(title, scores)| (s!(title), stats::sample_variance(&scores)))
            .collect();
        agg::sort_desc_f64(&mut rows);
        agg::top_n(rows, n)
    }
}

/* ---------------- User-scoped reports ---------------- */

/// The same reports grouped by `user_id` instead of movie.
pub struct UserRatings<'a> {
    store: &'a RatingStore,
}

impl<'a> UserRatings<'a> {
    pub fn new(store: &'a RatingStore) -> Self {
        Self { store }
    }

    fn grouped(&self) -> Vec<(u32, Vec<f64>)> {
        agg::group_values(self.store.records().iter().map(|r| (r.user_id, r.score)))
    }

    /// Every user with their rating count, descending.
    pub fn count_per_user(&self) -> Vec<(u32, usize)> {
        let mut rows: Vec<(u32, usize)> = self
            .grouped()
            .into_iter()
            .map(|(user, scores)| (user, scores.len()))
            .collect();
        agg::sort_desc(&mut rows);
        rows
    }

    /// Every user with the mean or median of their scores, descending.
    pub fn metric_per_user(&self, metric: Metric) -> Vec<(u32, f64)> {
        let mut rows: Vec<(u32, f64)> = self
            .grouped()
            .into_iter()
            .map(|(user, scores)| (user, metric.apply(&scores)))
            .collect();
        agg::sort_desc_f64(&mut rows);
        rows
    }

    /// Top-n users by sample variance of their scores, descending.
    pub fn top_by_variance(&self, n: usize) -> Vec<(u32, f64)> {
        let mut rows: Vec<(u32, f64)> = self
            .grouped()
            .into_iter()
            .map(|(user, scores)| (user, stats::sample_variance(&scores)))
            .collect();
        agg::sort_desc_f64(&mut rows);
        agg::top_n(rows, n)
    }
}
