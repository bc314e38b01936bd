// tests/analysis_pipeline.rs
//
// End-to-end runs over on-disk fixtures: write a small dataset, load it
// through the real file readers, check the reports.

use std::fs;
use std::path::PathBuf;

use mlens_stats::catalog::Catalog;
use mlens_stats::config::options::LoadOptions;
use mlens_stats::ratings::{MovieRatings, RatingStore, UserRatings};
use mlens_stats::source::SourceError;
use mlens_stats::stats::Metric;
use mlens_stats::tags::TagIndex;

fn fixture_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("mlens_it_{}_{}", std::process::id(), name));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write(dir: &PathBuf, file: &str, contents: &str) -> PathBuf {
    let path = dir.join(file);
    fs::write(&path, contents).unwrap();
    path
}

const MOVIES: &str = "\
movieId,title,genres
1,Heat (1995),Action|Crime|Thriller
2,Jumanji (1995),Adventure|Children|Fantasy
3,\"American President, The (1995)\",Comedy|Drama|Romance
4,Fargo (1996),Comedy|Crime|Drama|Thriller
";

const RATINGS: &str = "\
userId,movieId,rating,timestamp
10,1,4.0,820000000
11,1,5.0,850000000
12,1,4.0,851000000
10,3,3.0,820100000
11,3,2.5,852000000
";

const TAGS: &str = "\
userId,movieId,tag,timestamp
2,60756,funny,1445714994
2,60756,Highly quotable,1445714996
2,89774,Tom Hardy,1445715205
2,106782,Martin Scorsese,1445715056
";

#[test]
fn movie_reports_over_loaded_fixtures() {
    let dir = fixture_dir("movies");
    let movies = write(&dir, "movies.csv", MOVIES);
    let ratings = write(&dir, "ratings.csv", RATINGS);

    let opts = LoadOptions::default();
    let catalog = Catalog::load(&movies, &opts).unwrap();
    let store = RatingStore::load(&ratings, &opts).unwrap();
    assert_eq!(catalog.len(), 4);
    assert_eq!(store.len(), 5);

    let view = MovieRatings::new(&catalog, &store);
    assert_eq!(
        view.top_by_count(10),
        vec![
            ("Heat (1995)".to_string(), 3),
            ("\"American President, The (1995)\"".to_string(), 2),
        ]
    );
    // Heat: [4.0, 5.0, 4.0] -> mean 4.33, median 4.0, variance 0.33.
    assert_eq!(view.top_by_metric(1, Metric::Mean), vec![("Heat (1995)".to_string(), 4.33)]);
    assert_eq!(view.top_by_metric(1, Metric::Median), vec![("Heat (1995)".to_string(), 4.0)]);
    assert_eq!(view.top_by_variance(1), vec![("Heat (1995)".to_string(), 0.33)]);
}

#[test]
fn quoted_title_survives_verbatim_and_still_has_a_year() {
    let dir = fixture_dir("quoted");
    let movies = write(&dir, "movies.csv", MOVIES);

    let catalog = Catalog::load(&movies, &LoadOptions::default()).unwrap();
    let quoted = &catalog.movies()[2];
    assert_eq!(quoted.title, "\"American President, The (1995)\"");
    assert_eq!(quoted.release_year(), Some(1995));
    assert_eq!(quoted.genre_list().collect::<Vec<_>>(), vec!["Comedy", "Drama", "Romance"]);
}

#[test]
fn catalog_reports_from_fixture() {
    let dir = fixture_dir("catalog");
    let movies = write(&dir, "movies.csv", MOVIES);
    let catalog = Catalog::load(&movies, &LoadOptions::default()).unwrap();

    assert_eq!(catalog.release_year_distribution(), vec![(1995, 3), (1996, 1)]);
    assert_eq!(catalog.dominant_genre_per_year()[0].0, 1995);
}

#[test]
fn rating_time_and_score_distributions() {
    let dir = fixture_dir("ratings");
    let ratings = write(&dir, "ratings.csv", RATINGS);
    let store = RatingStore::load(&ratings, &LoadOptions::default()).unwrap();

    assert_eq!(store.count_by_year(), vec![(1995, 2), (1996, 3)]);
    assert_eq!(
        store.count_by_score(),
        vec![(2.5, 1), (3.0, 1), (4.0, 2), (5.0, 1)]
    );

    let users = UserRatings::new(&store);
    assert_eq!(users.count_per_user(), vec![(10, 2), (11, 2), (12, 1)]);
}

#[test]
fn strict_load_reports_bad_header() {
    let dir = fixture_dir("strict");
    let bogus = write(&dir, "movies.csv", "id,name\n1,Heat\n");

    let err = Catalog::load(&bogus, &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, SourceError::BadHeader { .. }));

    // The lenient path answers the same question with empty reports.
    let catalog = Catalog::load_or_empty(&bogus, &LoadOptions::default());
    assert!(catalog.is_empty());
    assert!(catalog.genre_distribution().is_empty());
}

#[test]
fn ingestion_cap_bounds_every_store() {
    let dir = fixture_dir("cap");
    let movies = write(&dir, "movies.csv", MOVIES);
    let ratings = write(&dir, "ratings.csv", RATINGS);

    let opts = LoadOptions::with_cap(2);
    assert_eq!(Catalog::load(&movies, &opts).unwrap().len(), 2);
    assert_eq!(RatingStore::load(&ratings, &opts).unwrap().len(), 2);
}

#[test]
fn tag_reports_from_fixture() {
    let dir = fixture_dir("tags");
    let tags_path = write(&dir, "tags.csv", TAGS);
    let tags = TagIndex::load(&tags_path, &LoadOptions::default()).unwrap();

    assert_eq!(tags.most_words_top(1), vec![("Highly quotable".to_string(), 2)]);
    // Both 15-char tags rank ahead of "Tom Hardy"; ties keep first-seen order.
    assert_eq!(
        tags.longest_top(2),
        vec!["Highly quotable".to_string(), "Martin Scorsese".to_string()]
    );
    assert_eq!(tags.containing("SCORSESE"), vec!["Martin Scorsese".to_string()]);
}
