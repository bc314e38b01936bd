// src/source.rs
//
// Raw file access for the dataset loaders: read one source file, check that
// its header row matches the expected shape, hand back a bounded prefix of
// raw data lines. Parsing the lines is the caller's job.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::loge;

/// Structural failure of one source file.
///
/// Callers can tell a malformed source apart from a legitimately empty one.
/// The historical behavior (swallow the problem, act on zero records) is
/// still available through the stores' `load_or_empty` constructors.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path} is empty, expected a header row")]
    MissingHeader { path: PathBuf },

    #[error("malformed header in {path}: expected [{expected}], found [{found}]")]
    BadHeader {
        path: PathBuf,
        expected: String,
        found: String,
    },
}

/// Read at most `cap` data rows from `path` after validating the header.
///
/// The header must carry `expected`'s column names in `expected`'s order;
/// extra trailing columns are tolerated. Blank lines are skipped and do not
/// count against the cap.
pub fn read_rows(path: &Path, expected: &[&str], cap: usize) -> Result<Vec<String>, SourceError> {
    let text = fs::read_to_string(path).map_err(|e| SourceError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut lines = text.lines();
    let header = lines.next().ok_or_else(|| SourceError::MissingHeader {
        path: path.to_path_buf(),
    })?;

    let found: Vec<&str> = header.trim().split(',').map(str::trim).collect();
    let matches = found.len() >= expected.len()
        && expected.iter().zip(&found).all(|(e, f)| e == f);
    if !matches {
        return Err(SourceError::BadHeader {
            path: path.to_path_buf(),
            expected: expected.join(","),
            found: found.join(","),
        });
    }

    let mut rows = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        rows.push(s!(line));
        if rows.len() >= cap {
            break;
        }
    }
    Ok(rows)
}

/// Lenient variant: structural errors are logged and yield zero rows.
pub fn read_rows_or_empty(path: &Path, expected: &[&str], cap: usize) -> Vec<String> {
    match read_rows(path, expected, cap) {
        Ok(rows) => rows,
        Err(e) => {
            loge!("{e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_fixture(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("mlens_source_{}_{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn header_validated_and_rows_capped() {
        let path = write_fixture("ok.csv", "movieId,title,genres\n1,a,X\n2,b,Y\n3,c,Z\n");
        let rows = read_rows(&path, &["movieId", "title", "genres"], 2).unwrap();
        assert_eq!(rows, vec!["1,a,X", "2,b,Y"]);
    }

    #[test]
    fn wrong_column_order_is_a_bad_header() {
        let path = write_fixture("order.csv", "title,movieId,genres\n1,a,X\n");
        let err = read_rows(&path, &["movieId", "title", "genres"], 10).unwrap_err();
        assert!(matches!(err, SourceError::BadHeader { .. }));
    }

    #[test]
    fn missing_file_is_io() {
        let path = std::env::temp_dir().join("mlens_source_definitely_missing.csv");
        let err = read_rows(&path, &["a"], 10).unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }

    #[test]
    fn lenient_reader_swallows_bad_header() {
        let path = write_fixture("bad.csv", "nope\n1,a,X\n");
        let rows = read_rows_or_empty(&path, &["movieId", "title", "genres"], 10);
        assert!(rows.is_empty());
    }

    #[test]
    fn extra_trailing_columns_tolerated() {
        let path = write_fixture("extra.csv", "movieId,title,genres,extra\n1,a,X,pad\n");
        assert_eq!(read_rows(&path, &["movieId", "title", "genres"], 10).unwrap().len(), 1);
    }
}
