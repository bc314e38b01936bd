// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod log;
pub mod specs;

pub mod agg;
pub mod catalog;
pub mod metadata;
pub mod ratings;
pub mod source;
pub mod stats;
pub mod tags;
