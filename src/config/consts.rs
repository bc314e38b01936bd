// src/config/consts.rs

// Net config
pub const HOST: &str = "www.imdb.com";
pub const PREFIX: &str = "/title/";
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; mlens_stats/0.3)";

// Dataset files
pub const MOVIES_FILE: &str = "movies.csv";
pub const RATINGS_FILE: &str = "ratings.csv";
pub const TAGS_FILE: &str = "tags.csv";
pub const LINKS_FILE: &str = "links.csv";

// Expected header rows, exact names and order
pub const MOVIES_HEADER: [&str; 3] = ["movieId", "title", "genres"];
pub const RATINGS_HEADER: [&str; 4] = ["userId", "movieId", "rating", "timestamp"];
pub const TAGS_HEADER: [&str; 4] = ["userId", "movieId", "tag", "timestamp"];
pub const LINKS_HEADER: [&str; 3] = ["movieId", "imdbId", "tmdbId"];

// Ingestion: historical per-source row ceiling, overridable via LoadOptions
pub const DEFAULT_ROW_CAP: usize = 1000;
// Links feed the remote fetcher, so the default prefix is much smaller
pub const DEFAULT_LINKS_CAP: usize = 25;

// Scrape
pub const REQUEST_PAUSE_MS: u64 = 250; // be polite

// Logging
pub const LOG_FILE: &str = ".mlens/debug.log";
