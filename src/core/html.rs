// src/core/html.rs
//
// Minimal case-insensitive tag scanning, std-only. Good enough for pulling
// a handful of labeled fields out of one page; not a general HTML parser.

use super::sanitize::{normalize_entities, normalize_ws};

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Position of `pat` in `s` at or after `from`, case-insensitive.
pub fn find_ci(s: &str, pat: &str, from: usize) -> Option<usize> {
    let lc = to_lower(s);
    let pat = to_lower(pat);
    lc.get(from..)?.find(&pat).map(|i| i + from)
}

/// Content between an opening pattern's tag close `>` and the close pattern.
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let o = find_ci(s, open_pat, 0)?;
    let after = s[o..].find('>')? + o + 1;
    let cr = find_ci(s, close_pat, after)?;
    Some(&s[after..cr])
}

/// Next `<tag ...>...</tag>` block at or after `from`; returns (start, end).
pub fn next_tag_block_ci(s: &str, open: &str, close: &str, from: usize) -> Option<(usize, usize)> {
    let start = find_ci(s, open, from)?;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = find_ci(s, close, open_end)?;
    Some((start, end_rel + close.len()))
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// Visible text of one tag block: drop the opening tag, strip markup,
/// normalize entities and whitespace.
pub fn inner_text(block: &str) -> String {
    let inner = match (block.find('>'), block.rfind('<')) {
        (Some(oe), Some(cs)) if cs > oe => &block[oe + 1..cs],
        _ => block,
    };
    strip_tags(normalize_entities(inner))
}
