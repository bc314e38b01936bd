// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Parse a money amount like "$44,000,000 (estimated)" into whole units.
/// Currency signs and thousands separators are dropped; only the first
/// token counts, trailing annotations are ignored.
pub fn parse_money(s: &str) -> Option<i64> {
    let cleaned: String = s
        .chars()
        .filter(|c| !matches!(c, '$' | '£' | '€' | ','))
        .collect();
    cleaned.split_whitespace().next()?.parse().ok()
}

/// Parse a runtime like "2h 23m", "1h" or "55m" into minutes.
pub fn parse_runtime(s: &str) -> Option<i64> {
    let mut hours: i64 = 0;
    let mut minutes: i64 = 0;
    let mut cur = s!();
    let mut seen = false;

    for ch in s.chars() {
        if ch.is_ascii_digit() {
            cur.push(ch);
        } else if ch == 'h' && !cur.is_empty() {
            hours = cur.parse().ok()?;
            cur.clear();
            seen = true;
        } else if ch == 'm' && !cur.is_empty() {
            minutes = cur.parse().ok()?;
            cur.clear();
            seen = true;
        } else if !ch.is_whitespace() {
            cur.clear();
        }
    }

    if seen { Some(hours * 60 + minutes) } else { None }
}
