// src/core/record.rs
//
// The movies file is comma-delimited, but titles may themselves contain
// commas. Such titles are wrapped in quotes, so the field boundary is
// ambiguous until the first character after the id prefix is inspected.

/// Split one raw movies line into `(id, title, genres)`.
///
/// Returns `None` for lines that cannot be split at all (no id prefix,
/// empty remainder, unterminated quote).
pub fn parse_movie_line(line: &str) -> Option<(u32, String, String)> {
    let comma = line.find(',')?;
    let id: u32 = line[..comma].trim().parse().ok()?;
    let (title, genres) = split_title_genres(line[comma + 1..].trim())?;
    Some((id, title, genres))
}

/// Resolve the quoted-field ambiguity for the `title,genres` remainder.
///
/// Unquoted: split on the first comma, left is the title, right is the
/// whole genre field. Quoted: scan to the next quote; the title is taken
/// verbatim *including* its surrounding quotes, the genre field is
/// everything after the closing quote and its trailing comma.
///
/// Known limitation, inherited from the upstream format: an unquoted title
/// that itself contains a comma splits at the wrong place. That is
/// malformed input, not something this parser repairs silently.
pub fn split_title_genres(remainder: &str) -> Option<(String, String)> {
    if remainder.is_empty() {
        return None;
    }

    if !remainder.starts_with('"') {
        let comma = remainder.find(',')?;
        let title = s!(remainder[..comma].trim());
        let genres = s!(remainder[comma + 1..].trim());
        return Some((title, genres));
    }

    // First quote after position 0 closes the title span. Titles are assumed
    // to carry at most one quoted span.
    let close = remainder[1..].find('"')? + 1;
    let title = s!(remainder[..=close].trim());
    let after = &remainder[close + 1..];
    let genres = s!(after.strip_prefix(',').unwrap_or(after).trim());
    Some((title, genres))
}

/// Plain comma split for the fixed-shape sources (ratings, tags, links).
/// Free-text fields containing commas are not protected here; the upstream
/// files do not quote them and the historical reader did the same split.
pub fn split_plain(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unquoted_title_splits_on_first_comma() {
        let (id, title, genres) = parse_movie_line("1,Toy Story (1995),Adventure|Animation").unwrap();
        assert_eq!(id, 1);
        assert_eq!(title, "Toy Story (1995)");
        assert_eq!(genres, "Adventure|Animation");
    }

    #[test]
    fn quoted_title_keeps_comma_and_quotes() {
        let (id, title, genres) =
            parse_movie_line(r#"11,"American President, The (1995)",Comedy|Drama|Romance"#).unwrap();
        assert_eq!(id, 11);
        assert_eq!(title, r#""American President, The (1995)""#);
        assert_eq!(genres, "Comedy|Drama|Romance");
    }

    #[test]
    fn quoted_comma_title_with_year_and_genres() {
        let (title, genres) =
            split_title_genres(r#""Title, With Comma (1995)",Action|Drama"#).unwrap();
        assert_eq!(title, r#""Title, With Comma (1995)""#);
        assert_eq!(genres, "Action|Drama");
    }

    #[test]
    fn sentinel_genre_field_passes_through() {
        let (_, _, genres) = parse_movie_line("182727,A Quiet Place (2018),(no genres listed)").unwrap();
        assert_eq!(genres, "(no genres listed)");
    }

    #[test]
    fn unterminated_quote_is_rejected() {
        assert!(split_title_genres(r#""Broken Title (1999),Drama"#).is_none());
        assert!(parse_movie_line("").is_none());
        assert!(parse_movie_line("notanumber,Title,Drama").is_none());
    }

    #[test]
    fn split_plain_trims_fields() {
        assert_eq!(split_plain("1, 307, 3.5 ,1256677221"), vec!["1", "307", "3.5", "1256677221"]);
    }
}
