// src/cli.rs
//
// Hand-rolled argument parsing and report dispatch. Reports print one
// `key,value` line per row; fractional values use 2 decimals.

use std::env;
use std::error::Error;
use std::fmt::Display;
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::config::consts::{
    DEFAULT_LINKS_CAP, DEFAULT_ROW_CAP, LINKS_FILE, MOVIES_FILE, RATINGS_FILE, TAGS_FILE,
};
use crate::config::options::LoadOptions;
use crate::metadata::{self, MetadataSet};
use crate::ratings::{MovieRatings, RatingStore, UserRatings};
use crate::specs;
use crate::stats::Metric;
use crate::tags::TagIndex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    ReleaseYears,
    Genres,
    TopGenres,
    GenreByYear,
    RatingYears,
    RatingScores,
    TopRated,
    TopByMetric,
    Controversial,
    UserCounts,
    UserMetric,
    UserControversial,
    TagWords,
    TagLongest,
    TagCommon,
    TagPopular,
    TagsWith,
    Directors,
    Expensive,
    Profitable,
    Runtimes,
    CostPerMinute,
    All,
}

pub struct Params {
    pub data_dir: PathBuf,
    pub report: Report,
    pub n: usize,
    pub metric: Metric,
    pub row_cap: usize,
    pub links_cap: usize,
    pub substring: Option<String>,
    /// Fail on malformed sources instead of reporting over empty stores.
    pub strict: bool,
}

impl Params {
    pub fn new() -> Self {
        Self {
            data_dir: PathBuf::from("ml-latest-small"),
            report: Report::All,
            n: 10,
            metric: Metric::Mean,
            row_cap: DEFAULT_ROW_CAP,
            links_cap: DEFAULT_LINKS_CAP,
            substring: None,
            strict: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;
    run_with(&params)
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-d" | "--data" => {
                let v = args.next().ok_or("Missing value for --data")?;
                params.data_dir = PathBuf::from(v);
            }
            "-r" | "--report" => {
                let v = args.next().ok_or("Missing value for --report")?;
                params.report = parse_report(&v)?;
            }
            "-n" => {
                params.n = args.next().ok_or("Missing value for -n")?.parse()?;
            }
            "--metric" => {
                let v = args.next().ok_or("Missing value for --metric")?;
                params.metric = Metric::from_arg(&v)?;
            }
            "--cap" => {
                params.row_cap = args.next().ok_or("Missing value for --cap")?.parse()?;
            }
            "--links-cap" => {
                params.links_cap = args.next().ok_or("Missing value for --links-cap")?.parse()?;
            }
            "--with" => {
                params.substring = Some(args.next().ok_or("Missing value for --with")?);
            }
            "--strict" => params.strict = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if params.report == Report::TagsWith && params.substring.is_none() {
        return Err("--report tags-with requires --with <substring>".into());
    }
    Ok(())
}

fn parse_report(name: &str) -> Result<Report, Box<dyn Error>> {
    use Report::*;
    Ok(match name.to_ascii_lowercase().as_str() {
        "release-years" => ReleaseYears,
        "genres" => Genres,
        "top-genres" => TopGenres,
        "genre-by-year" => GenreByYear,
        "rating-years" => RatingYears,
        "rating-scores" => RatingScores,
        "top-rated" => TopRated,
        "top-metric" => TopByMetric,
        "controversial" => Controversial,
        "user-counts" => UserCounts,
        "user-metric" => UserMetric,
        "user-controversial" => UserControversial,
        "tag-words" => TagWords,
        "tag-longest" => TagLongest,
        "tag-common" => TagCommon,
        "tag-popular" => TagPopular,
        "tags-with" => TagsWith,
        "directors" => Directors,
        "expensive" => Expensive,
        "profitable" => Profitable,
        "runtimes" => Runtimes,
        "cost-per-minute" => CostPerMinute,
        "all" => All,
        other => return Err(format!("Unknown report: {}", other).into()),
    })
}

pub fn run_with(params: &Params) -> Result<(), Box<dyn Error>> {
    use Report::*;

    let opts = LoadOptions::with_cap(params.row_cap);
    let movies_path = params.data_dir.join(MOVIES_FILE);
    let ratings_path = params.data_dir.join(RATINGS_FILE);
    let tags_path = params.data_dir.join(TAGS_FILE);

    let catalog = if params.strict {
        Catalog::load(&movies_path, &opts)?
    } else {
        Catalog::load_or_empty(&movies_path, &opts)
    };
    let store = if params.strict {
        RatingStore::load(&ratings_path, &opts)?
    } else {
        RatingStore::load_or_empty(&ratings_path, &opts)
    };
    let tags = if params.strict {
        TagIndex::load(&tags_path, &opts)?
    } else {
        TagIndex::load_or_empty(&tags_path, &opts)
    };

    let movie_view = MovieRatings::new(&catalog, &store);
    let user_view = UserRatings::new(&store);
    let n = params.n;

    match params.report {
        ReleaseYears => print_rows(&catalog.release_year_distribution()),
        Genres => print_rows(&catalog.genre_distribution()),
        TopGenres => print_rows(&catalog.top_by_genre_count(n)),
        GenreByYear => print_rows(&catalog.dominant_genre_per_year()),
        RatingYears => print_rows(&store.count_by_year()),
        RatingScores => print_score_rows(&store.count_by_score()),
        TopRated => print_rows(&movie_view.top_by_count(n)),
        TopByMetric => print_f64_rows(&movie_view.top_by_metric(n, params.metric)),
        Controversial => print_f64_rows(&movie_view.top_by_variance(n)),
        UserCounts => print_rows(&user_view.count_per_user()),
        UserMetric => print_f64_rows(&user_view.metric_per_user(params.metric)),
        UserControversial => print_f64_rows(&user_view.top_by_variance(n)),
        TagWords => print_rows(&tags.most_words_top(n)),
        TagLongest => print_list(&tags.longest_top(n)),
        TagCommon => print_list(&tags.intersection_of_top(n)),
        TagPopular => print_rows(&tags.most_frequent(n)),
        TagsWith => {
            let needle = params.substring.as_deref().unwrap_or("");
            print_list(&tags.containing(needle));
        }
        Directors | Expensive | Profitable | Runtimes | CostPerMinute => {
            let meta = load_metadata(params)?;
            match params.report {
                Directors => print_rows(&meta.top_directors(n)),
                Expensive => print_rows(&meta.most_expensive(n)),
                Profitable => print_rows(&meta.most_profitable(n)),
                Runtimes => print_rows(&meta.longest_runtime(n)),
                CostPerMinute => print_f64_rows(&meta.top_cost_per_minute(n)),
                _ => unreachable!(),
            }
        }
        All => {
            section("release years", || print_rows(&catalog.release_year_distribution()));
            section("genres", || print_rows(&catalog.genre_distribution()));
            section("top genres", || print_rows(&catalog.top_by_genre_count(n)));
            section("dominant genre by year", || print_rows(&catalog.dominant_genre_per_year()));
            section("ratings by year", || print_rows(&store.count_by_year()));
            section("ratings by score", || print_score_rows(&store.count_by_score()));
            section("top rated", || print_rows(&movie_view.top_by_count(n)));
            section("top by metric", || {
                print_f64_rows(&movie_view.top_by_metric(n, params.metric))
            });
            section("controversial", || print_f64_rows(&movie_view.top_by_variance(n)));
            section("users by rating count", || print_rows(&user_view.count_per_user()));
            section("users by metric", || {
                print_f64_rows(&user_view.metric_per_user(params.metric))
            });
            section("controversial users", || print_f64_rows(&user_view.top_by_variance(n)));
            section("tags with most words", || print_rows(&tags.most_words_top(n)));
            section("longest tags", || print_list(&tags.longest_top(n)));
            section("popular tags", || print_rows(&tags.most_frequent(n)));
        }
    }

    Ok(())
}

/// Scrape-backed reports: read links.csv, fetch and extract each title page.
fn load_metadata(params: &Params) -> Result<MetadataSet, Box<dyn Error>> {
    let links_path = params.data_dir.join(LINKS_FILE);
    let links = metadata::load_links(&links_path, &LoadOptions::with_cap(params.links_cap))?;
    Ok(MetadataSet::from_records(specs::imdb::collect(&links)))
}

fn section(name: &str, body: impl FnOnce()) {
    println!("# {name}");
    body();
}

fn print_rows<K: Display, V: Display>(rows: &[(K, V)]) {
    for (k, v) in rows {
        println!("{k},{v}");
    }
}

fn print_f64_rows<K: Display>(rows: &[(K, f64)]) {
    for (k, v) in rows {
        println!("{k},{v:.2}");
    }
}

fn print_score_rows(rows: &[(f64, usize)]) {
    for (score, count) in rows {
        println!("{score:.1},{count}");
    }
}

fn print_list<T: Display>(rows: &[T]) {
    for row in rows {
        println!("{row}");
    }
}
