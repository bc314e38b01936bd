// src/catalog.rs
//
// Movie records and the catalog-level reports: release-year and genre
// distributions, the genre-count prefix ranking, and the dominant genre
// per year.

use std::cell::OnceCell;
use std::path::Path;

use crate::agg;
use crate::config::consts::MOVIES_HEADER;
use crate::config::options::LoadOptions;
use crate::core::record;
use crate::logd;
use crate::source::{self, SourceError};

#[derive(Clone, Debug)]
pub struct Movie {
    pub id: u32,
    pub title: String,
    /// The raw `|`-delimited genre field, sentinel "(no genres listed)"
    /// included. Kept verbatim; reports split it on demand.
    pub genres: String,
    year: OnceCell<Option<i32>>,
}

impl Movie {
    pub fn new(id: u32, title: String, genres: String) -> Self {
        Self { id, title, genres, year: OnceCell::new() }
    }

    /// Release year derived from a `(dddd)` parenthetical in the title.
    /// Computed once on first use; titles without one yield `None` and the
    /// movie simply drops out of year-keyed reports.
    pub fn release_year(&self) -> Option<i32> {
        *self.year.get_or_init(|| extract_year(&self.title))
    }

    pub fn genre_list(&self) -> impl Iterator<Item = &str> {
        self.genres.split('|')
    }
}

/// First `(dddd)` span in the title, if any.
fn extract_year(title: &str) -> Option<i32> {
    let bytes = title.as_bytes();
    for i in 0..bytes.len() {
        if bytes[i] != b'(' || i + 5 >= bytes.len() {
            continue;
        }
        let digits = &bytes[i + 1..i + 5];
        if digits.iter().all(u8::is_ascii_digit) && bytes[i + 5] == b')' {
            let year = digits.iter().fold(0i32, |acc, d| acc * 10 + (d - b'0') as i32);
            return Some(year);
        }
    }
    None
}

#[derive(Debug)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// Strict load: structural problems with the source surface as errors.
    pub fn load(path: &Path, opts: &LoadOptions) -> Result<Self, SourceError> {
        let lines = source::read_rows(path, &MOVIES_HEADER, opts.row_cap)?;
        Ok(Self::from_lines(&lines))
    }

    /// Lenient load: a malformed source logs and yields an empty catalog,
    /// over which every report correctly returns empty results.
    pub fn load_or_empty(path: &Path, opts: &LoadOptions) -> Self {
        let lines = source::read_rows_or_empty(path, &MOVIES_HEADER, opts.row_cap);
        Self::from_lines(&lines)
    }

    fn from_lines(lines: &[String]) -> Self {
        let mut movies = Vec::with_capacity(lines.len());
        for line in lines {
            match record::parse_movie_line(line) {
                Some((id, title, genres)) => movies.push(Movie::new(id, title, genres)),
                None => logd!("skipping unparseable movie row: {line}"),
            }
        }
        Self { movies }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Movies per derived release year, count descending. Ties keep the
    /// order in which the years were first encountered; movies without a
    /// parseable year are excluded, not zero-bucketed.
    pub fn release_year_distribution(&self) -> Vec<(i32, usize)> {
        let mut rows = agg::count_occurrences(self.movies.iter().filter_map(Movie::release_year));
        agg::sort_desc(&mut rows);
        rows
    }

    /// Genre occurrence counts across the whole catalog, count descending,
    /// stable ties.
    pub fn genre_distribution(&self) -> Vec<(String, usize)> {
        let mut rows = agg::count_occurrences(
            self.movies.iter().flat_map(|m| m.genre_list().map(|g| s!(g))),
        );
        agg::sort_desc(&mut rows);
        rows
    }

    /// Rank the first `n` *ingested* movies by their genre count,
    /// descending. Deliberately a top-of-a-truncated-prefix, not a global
    /// top-n; downstream consumers depend on these exact semantics.
    /// A duplicate title inside the prefix overwrites the count but keeps
    /// its first slot.
    pub fn top_by_genre_count(&self, n: usize) -> Vec<(String, usize)> {
        let mut map = agg::OrderedMap::new();
        for m in self.movies.iter().take(n) {
            map.insert(m.title.clone(), m.genre_list().count());
        }
        let mut rows = map.into_vec();
        agg::sort_desc(&mut rows);
        rows
    }

    /// For every derived release year, the genre with the most occurrences
    /// among that year's movies; ties go to the genre encountered first.
    /// Years ascending.
    pub fn dominant_genre_per_year(&self) -> Vec<(i32, String)> {
        let mut groups = agg::group_values(
            self.movies.iter().filter_map(|m| m.release_year().map(|y| (y, m))),
        );
        agg::sort_asc(&mut groups);

        groups
            .into_iter()
            .filter_map(|(year, movies)| {
                let counts = agg::count_occurrences(movies.iter().flat_map(|m| m.genre_list()));
                let mut best: Option<(&str, usize)> = None;
                for (genre, count) in counts {
                    if best.is_none_or(|(_, b)| count > b) {
                        best = Some((genre, count));
                    }
                }
                best.map(|(genre, _)| (year, s!(genre)))
            })
            .collect()
    }
}
