//! Fold a raw message down to lowercase ASCII.

/// Extended-Latin and typographic codepoints with a sensible ASCII stand-in.
pub const UNICODE_TO_ASCII: &[(char, char)] = &[
    ('\u{02c8}', '\''),
    ('\u{0301}', '\''),
    ('\u{2013}', '-'),
    ('\u{2014}', '-'),
    ('\u{2018}', '\''),
    ('\u{2019}', '\''),
    ('\u{201c}', '"'),
    ('\u{201d}', '"'),
    ('\u{2022}', '*'), // bullet
    ('\u{2026}', ' '),
    ('\u{00a0}', ' '),
    ('\u{00b0}', '*'), // degree
    ('\u{00be}', '3'),
    ('\u{00e0}', 'a'),
    ('\u{00e2}', 'a'),
    ('\u{00e7}', 'c'),
    ('\u{00e8}', 'e'),
    ('\u{00e9}', 'e'),
    ('\u{00ed}', 'i'),
    ('\u{00f1}', 'n'),
    ('\u{00f3}', 'o'),
    ('\u{00f4}', 'o'),
    ('\u{00fc}', 'u'),
];

fn fold(c: char) -> Option<char> {
    // file, group, record and unit separators count as whitespace downstream
    if ('\u{1c}'..='\u{1f}').contains(&c) {
        return Some(' ');
    }
    if c.is_ascii() {
        return Some(c);
    }
    UNICODE_TO_ASCII
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}

/// Lowercase, decode HTML entities, fold the curated codepoints, then drop
/// anything still outside ASCII. The drop is silent.
pub fn normalize(message: &str) -> String {
    let lowered = message.to_lowercase();
    let decoded = crate::entities::unescape(&lowered);
    decoded.chars().filter_map(fold).collect()
}
