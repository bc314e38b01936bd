// src/config/options.rs
use super::consts::DEFAULT_ROW_CAP;

/// Ingestion knobs shared by all dataset loaders.
///
/// `row_cap` bounds how many data rows (header excluded) a loader consumes
/// from one source file. The historical ceiling of 1000 rows used to be a
/// hidden constant; it is now an explicit option with the old value as
/// default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    pub row_cap: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { row_cap: DEFAULT_ROW_CAP }
    }
}

impl LoadOptions {
    pub fn with_cap(row_cap: usize) -> Self {
        Self { row_cap }
    }
}
