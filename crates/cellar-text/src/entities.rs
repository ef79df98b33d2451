//! HTML character reference decoding with the HTML5 parser's error recovery.
//!
//! Names and values come from `html_escape::NAMED_ENTITIES`. On top of the
//! exact `&name;` form this also decodes the legacy names that browsers
//! accept without a semicolon (`&amp`, `caf&eacute`), maps numeric
//! references in 0x80..=0x9F through Windows-1252 (`&#146;` is `’`), and
//! drops references to control characters.

use std::borrow::Cow;
use std::sync::LazyLock;

use fancy_regex::{Captures, Regex};

static CHARREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]+;?|#[xX][0-9a-fA-F]+;?|[^\t\n\f <&#;]{1,32};?)").unwrap()
});

/// Named references that stay valid without the trailing semicolon.
/// Only lowercase names are listed; messages are lowercased first.
const LEGACY_NAMES: &[&str] = &[
    "aacute", "acirc", "acute", "aelig", "agrave", "amp", "aring", "atilde", "auml", "brvbar",
    "ccedil", "cedil", "cent", "copy", "curren", "deg", "divide", "eacute", "ecirc", "egrave",
    "eth", "euml", "frac12", "frac14", "frac34", "gt", "iacute", "icirc", "iexcl", "igrave",
    "iquest", "iuml", "laquo", "lt", "macr", "micro", "middot", "nbsp", "not", "ntilde",
    "oacute", "ocirc", "ograve", "ordf", "ordm", "oslash", "otilde", "ouml", "para", "plusmn",
    "pound", "quot", "raquo", "reg", "sect", "shy", "sup1", "sup2", "sup3", "szlig", "thorn",
    "times", "uacute", "ucirc", "ugrave", "uml", "uuml", "yacute", "yen", "yuml",
];

/// Windows-1252 characters for numeric references 0x80..=0x9F. Undefined
/// slots keep their C1 code point.
const CP1252_C1: [char; 32] = [
    '\u{20ac}', '\u{81}', '\u{201a}', '\u{192}', '\u{201e}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{2c6}', '\u{2030}', '\u{160}', '\u{2039}', '\u{152}', '\u{8d}', '\u{17d}', '\u{8f}',
    '\u{90}', '\u{2018}', '\u{2019}', '\u{201c}', '\u{201d}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{2dc}', '\u{2122}', '\u{161}', '\u{203a}', '\u{153}', '\u{9d}', '\u{17e}', '\u{178}',
];

fn named(name: &str) -> Option<&'static str> {
    html_escape::NAMED_ENTITIES
        .binary_search_by(|(t_name, _)| (*t_name).cmp(name.as_bytes()))
        .ok()
        .map(|index| html_escape::NAMED_ENTITIES[index].1)
}

fn legacy(name: &str) -> Option<&'static str> {
    if LEGACY_NAMES.contains(&name) {
        named(name)
    } else {
        None
    }
}

fn numeric(number: Option<u32>) -> String {
    match number {
        Some(0) | None => '\u{fffd}'.to_string(),
        Some(0x0d) => '\r'.to_string(),
        Some(n @ 0x80..=0x9f) => CP1252_C1[(n - 0x80) as usize].to_string(),
        Some(0x01..=0x08 | 0x0b | 0x0e..=0x1f | 0x7f | 0xfdd0..=0xfdef) => String::new(),
        Some(n) if n & 0xfffe == 0xfffe && n <= 0x10ffff => String::new(),
        Some(n) => char::from_u32(n).unwrap_or('\u{fffd}').to_string(),
    }
}

fn replace(caps: &Captures<'_>) -> String {
    let reference = &caps[1];

    if let Some(digits) = reference.strip_prefix('#') {
        let digits = digits.trim_end_matches(';');
        let number = match digits.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => digits.parse::<u32>().ok(),
        };
        return numeric(number);
    }

    if let Some(value) = reference.strip_suffix(';').and_then(named) {
        return value.to_string();
    }
    if let Some(value) = legacy(reference) {
        return value.to_string();
    }
    // longest legacy prefix wins, the rest stays literal
    for end in (2..reference.len()).rev() {
        if let Some(value) = reference.get(..end).and_then(legacy) {
            return format!("{value}{}", &reference[end..]);
        }
    }
    format!("&{reference}")
}

/// Decode every character reference in `text`.
pub fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    match CHARREF.try_replacen(text, 0, replace) {
        Ok(decoded) => decoded,
        Err(e) => {
            tracing::warn!(error = %e, "entity decoding failed; text left unchanged");
            Cow::Borrowed(text)
        }
    }
}
