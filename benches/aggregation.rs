// benches/aggregation.rs
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use mlens_stats::catalog::{Catalog, Movie};
use mlens_stats::ratings::{MovieRatings, Rating, RatingStore};
use mlens_stats::stats::Metric;

const GENRES: [&str; 8] = [
    "Action", "Adventure", "Comedy", "Crime", "Drama", "Romance", "Sci-Fi", "Thriller",
];

fn synthetic_catalog(n: usize) -> Catalog {
    let movies = (0..n)
        .map(|i| {
            let year = 1950 + (i % 70) as i32;
            let genres: Vec<&str> = (0..1 + i % 4).map(|g| GENRES[(i + g) % GENRES.len()]).collect();
            Movie::new(
                i as u32,
                format!("Movie {i} ({year})"),
                genres.join("|"),
            )
        })
        .collect();
    Catalog::from_movies(movies)
}

fn synthetic_ratings(movies: usize, per_movie: usize) -> RatingStore {
    let mut records = Vec::with_capacity(movies * per_movie);
    for m in 0..movies {
        for u in 0..per_movie {
            records.push(Rating {
                user_id: (u * 7 % 600) as u32,
                movie_id: m as u32,
                score: 0.5 + ((m * 31 + u * 17) % 10) as f64 * 0.5,
                timestamp: 820_000_000 + (m * 100_000 + u) as i64,
            });
        }
    }
    RatingStore::from_records(records)
}

fn bench_aggregation(c: &mut Criterion) {
    let catalog = synthetic_catalog(1000);
    let store = synthetic_ratings(1000, 10);

    c.bench_function("genre_distribution/1000", |b| {
        b.iter(|| black_box(&catalog).genre_distribution())
    });

    c.bench_function("release_year_distribution/1000", |b| {
        b.iter(|| black_box(&catalog).release_year_distribution())
    });

    c.bench_function("top_by_metric/1000x10", |b| {
        b.iter(|| MovieRatings::new(black_box(&catalog), black_box(&store)).top_by_metric(10, Metric::Mean))
    });

    c.bench_function("top_by_variance/1000x10", |b| {
        b.iter(|| MovieRatings::new(black_box(&catalog), black_box(&store)).top_by_variance(10))
    });
}

criterion_group!(benches, bench_aggregation);
criterion_main!(benches);
