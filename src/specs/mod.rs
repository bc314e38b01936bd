// src/specs/mod.rs
//! Page-specific scraping specifications.
//!
//! Each spec encodes where the ground truth lives in one remote page's HTML
//! and how to extract it tolerantly with the `core::html` helpers. Specs
//! only extract; fetching policy (pauses, catch-and-continue) sits in the
//! collector functions, and nothing here touches the in-memory stores.
//!
//! Specs are testable offline against captured or synthetic fixtures.

pub mod imdb;
