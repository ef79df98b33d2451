//! Named substitution patterns
//!
//! Every later stage is expressed as [`resub`] calls against this registry so
//! the order of substitutions stays auditable in one place. All patterns are
//! matched case-insensitively.

use std::fmt;
use std::sync::LazyLock;

use fancy_regex::{Regex, RegexBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternName {
    Label,
    Format,
    Points,
    Price,
    Quantity,
    Score,
    Url,
    Symbol,
    RunOn,
    Ampersand,
    Dash,
    Ellipsis,
    Endash,
    Exclaim,
    Percent,
    Pound,
    Slash,
}

impl PatternName {
    pub const ALL: [PatternName; 17] = [
        PatternName::Label,
        PatternName::Format,
        PatternName::Points,
        PatternName::Price,
        PatternName::Quantity,
        PatternName::Score,
        PatternName::Url,
        PatternName::Symbol,
        PatternName::RunOn,
        PatternName::Ampersand,
        PatternName::Dash,
        PatternName::Ellipsis,
        PatternName::Endash,
        PatternName::Exclaim,
        PatternName::Percent,
        PatternName::Pound,
        PatternName::Slash,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PatternName::Label => "LABEL",
            PatternName::Format => "FORMAT",
            PatternName::Points => "POINTS",
            PatternName::Price => "PRICE",
            PatternName::Quantity => "QUANTITY",
            PatternName::Score => "SCORE",
            PatternName::Url => "URL",
            PatternName::Symbol => "SYMBOL",
            PatternName::RunOn => "RUN_ON",
            PatternName::Ampersand => "AMPERSAND",
            PatternName::Dash => "DASH",
            PatternName::Ellipsis => "ELLIPSIS",
            PatternName::Endash => "ENDASH",
            PatternName::Exclaim => "EXCLAIM",
            PatternName::Percent => "PERCENT",
            PatternName::Pound => "POUND",
            PatternName::Slash => "SLASH",
        }
    }

    fn expression(self) -> &'static str {
        match self {
            // '2009 charvin chateauneuf-du-pape - $', 'nv #55 mystery chardonnay - $'
            PatternName::Label => r"((?:19[0-9]{2}|2[0-9]{3}|nv)\s+.*?)\s?-\s?\$",
            // '750ml', '1.5lt', '375ml'
            PatternName::Format => r"(\d{3}ml)|(\d+(\.\d*)?)lt",
            // '85pts', '90-95pts', '96+pts'
            PatternName::Points => r"([0-9]{2,3})(-[0-9]{2,3})?(\+*)pts",
            // '$123.45', '$321', '$10-15+', '$123.45-678.90+'
            PatternName::Price => r"(\$)(\d+(\.\d+)?(-\d+(\.\d+)?)?\+?)",
            // '3x', '2 x', '4  x'
            PatternName::Quantity => r"(\d\s*x)",
            // 'wa100', 'ws95+', 'iwc93-95', 'wa92-94+'
            PatternName::Score => r"([a-z]{1,3}[0-9]{2,3})(-[0-9]{2,3})?(\+*)",
            PatternName::Url => r"(http)(s??)(://).*",
            // anything other than '-', '.', '?', '\'', whitespace, word
            PatternName::Symbol => r"[^-.?'\s\w]",
            PatternName::RunOn => r"([^\s\w])\1{4,}",
            PatternName::Ampersand => r"(?<=\w)(\s?&\s?)(?=\w)",
            PatternName::Dash => r"(?<=\d)(\s?-\s?)(?=\d)",
            PatternName::Ellipsis => r"(?<!\.)(\.{2,4})(?!\.)",
            PatternName::Endash => r"(?<=\w)(\s-)(?=\s\w)",
            PatternName::Exclaim => r"(?<=\w)!",
            PatternName::Percent => r"(?<=\d)%(?!%)",
            PatternName::Pound => r"(?<!#)#(?=\d)",
            PatternName::Slash => r"(?<=\w)(\s?/\s?)(?=\w)",
        }
    }

    /// Replacement used when a caller does not supply one. `$n` refers to a
    /// capture group.
    pub fn default_replacement(self) -> &'static str {
        match self {
            PatternName::Points => "amazing",
            PatternName::Price => "${2} usd",
            PatternName::Ampersand | PatternName::Slash => " and ",
            PatternName::Dash => " to ",
            PatternName::Ellipsis => " ",
            PatternName::Exclaim => ".",
            PatternName::Percent => " percent",
            PatternName::Pound => " number ",
            _ => "",
        }
    }
}

impl fmt::Display for PatternName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A compiled pattern and its default replacement.
#[derive(Debug)]
pub struct Pattern {
    pub name: PatternName,
    pub regex: Regex,
    pub replacement: &'static str,
}

impl Pattern {
    fn compile(name: PatternName) -> Result<Self, fancy_regex::Error> {
        // whole-message passes run far past the default limit on long emails
        let regex = RegexBuilder::new(&format!("(?i){}", name.expression()))
            .backtrack_limit(usize::MAX)
            .build()?;
        Ok(Self {
            name,
            regex,
            replacement: name.default_replacement(),
        })
    }
}

/// Immutable, process-wide table of every [`PatternName`].
#[derive(Debug)]
pub struct PatternRegistry {
    patterns: Vec<Pattern>,
}

static REGISTRY: LazyLock<PatternRegistry> =
    LazyLock::new(|| PatternRegistry::compile().unwrap());

impl PatternRegistry {
    fn compile() -> Result<Self, fancy_regex::Error> {
        let patterns = PatternName::ALL
            .into_iter()
            .map(Pattern::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn global() -> &'static PatternRegistry {
        &REGISTRY
    }

    pub fn get(&self, name: PatternName) -> &Pattern {
        // ALL is declared in variant order
        &self.patterns[name as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }
}

/// Apply `name` globally to `text` with its default replacement.
pub fn resub(name: PatternName, text: &str) -> String {
    resub_with(name, text, name.default_replacement())
}

/// Apply `name` globally to `text`, substituting `replacement`.
pub fn resub_with(name: PatternName, text: &str, replacement: &str) -> String {
    let pattern = PatternRegistry::global().get(name);
    match pattern.regex.try_replacen(text, 0, replacement) {
        Ok(replaced) => replaced.into_owned(),
        Err(e) => {
            tracing::warn!(pattern = %name, error = %e, "substitution failed; text left unchanged");
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        let registry = PatternRegistry::compile().unwrap();
        for name in PatternName::ALL {
            assert_eq!(registry.get(name).name, name);
        }
    }

    #[test]
    fn test_quantity() {
        let out = resub(
            PatternName::Quantity,
            "quantities:  3 x 750ml and 4  x  750ml and 2X375ml",
        );
        assert_eq!(out, "quantities:   750ml and   750ml and 375ml");
    }

    #[test]
    fn test_quantity_leaves_format_token() {
        assert_eq!(resub(PatternName::Quantity, "3 x 750ml"), " 750ml");
        assert_eq!(resub(PatternName::Format, " 750ml"), " ");
    }

    #[test]
    fn test_format() {
        let out = resub(PatternName::Format, "750ml and 1.5lt and 375ML and 3lt");
        assert_eq!(out, " and  and  and ");
    }

    #[test]
    fn test_score() {
        let out = resub(PatternName::Score, "scores: wa100 ws95+ iwc93-95 wa92-94+");
        assert_eq!(out, "scores:    ");
    }

    #[test]
    fn test_points() {
        let out = resub_with(PatternName::Points, "points: 85pts and 90-95pts", "holy toledo");
        assert_eq!(out, "points: holy toledo and holy toledo");
        assert_eq!(resub(PatternName::Points, "96+pts"), "amazing");
    }

    #[test]
    fn test_price() {
        assert_eq!(resub(PatternName::Price, "$123.45-678.90+"), "123.45-678.90+ usd");
        assert_eq!(resub(PatternName::Price, "($321)"), "(321 usd)");
        assert_eq!(resub(PatternName::Price, "$10-15+ each"), "10-15+ usd each");
    }

    #[test]
    fn test_url_consumes_rest_of_line() {
        let out = resub(PatternName::Url, "see https://foo.com/abc or this\nnext line");
        assert_eq!(out, "see \nnext line");
    }

    #[test]
    fn test_symbol() {
        assert_eq!(resub(PatternName::Symbol, "a$b(c)d-e.f?g'h_i,j"), "abcd-e.f?g'h_ij");
    }

    #[test]
    fn test_run_on() {
        let out = resub(
            PatternName::RunOn,
            "(!!) or (@@@) or (%%%%%%%%%%%) or (******) or (xxxxxxx) or (####)",
        );
        assert_eq!(out, "(!!) or (@@@) or () or () or (xxxxxxx) or (####)");
    }

    #[test]
    fn test_exclaim() {
        let out = resub(PatternName::Exclaim, "(wtf!) or (!!!)");
        assert_eq!(out, "(wtf.) or (!!!)");
    }

    #[test]
    fn test_pound() {
        let out = resub(PatternName::Pound, "(#10) or (x#x) or (# 5) or (##123)");
        assert_eq!(out, "( number 10) or (x#x) or (# 5) or (##123)");
    }

    #[test]
    fn test_percent() {
        let out = resub(PatternName::Percent, "(100% off) or (55 %) or (44%%)");
        assert_eq!(out, "(100 percent off) or (55 %) or (44%%)");
    }

    #[test]
    fn test_ampersand() {
        let out = resub(PatternName::Ampersand, "(j&j) or (j & j) or ( & ) or (&&)");
        assert_eq!(out, "(j and j) or (j and j) or ( & ) or (&&)");
    }

    #[test]
    fn test_slash() {
        let out = resub(PatternName::Slash, "(j/j) or (j / j) or ( / ) or (//)");
        assert_eq!(out, "(j and j) or (j and j) or ( / ) or (//)");
    }

    #[test]
    fn test_dash() {
        assert_eq!(resub(PatternName::Dash, "92-94 and 3 - 4"), "92 to 94 and 3 to 4");
        assert_eq!(resub(PatternName::Dash, "chateauneuf-du-pape"), "chateauneuf-du-pape");
    }

    #[test]
    fn test_ellipsis() {
        let out = resub_with(PatternName::Ellipsis, "(...) or (......) or (..) or (.)", " so ");
        assert_eq!(out, "( so ) or (......) or ( so ) or (.)");
    }

    #[test]
    fn test_endash() {
        let out = resub(PatternName::Endash, "wines below - i do not know");
        assert_eq!(out, "wines below i do not know");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(resub(PatternName::Format, "750ML"), "");
        assert_eq!(resub(PatternName::Url, "HTTPS://X.COM"), "");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(PatternName::RunOn.to_string(), "RUN_ON");
    }
}
