//! Placeholder parsing and modifier application.
//!
//! A placeholder is delimited by `<%=` and `%>` with arbitrary whitespace
//! inside the delimiters. The body is an identifier optionally followed by
//! modifier suffixes written as `.<name>()` with no separator, e.g.
//! `<%= title.split().capitalize() %>`.

use crate::transform;
use regex::Regex;
use std::sync::LazyLock;

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<%=\s*([A-Za-z_][A-Za-z0-9_]*)((?:\.[A-Za-z_][A-Za-z0-9_]*\(\))*)\s*%>")
        .unwrap()
});

static MODIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.([A-Za-z_][A-Za-z0-9_]*)\(\)").unwrap());

/// A named text transform attached to a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Split,
    Pluralize,
    Capitalize,
    CamelCase,
    SnakeCase,
}

/// Fixed semantic application order. Modifiers are applied in this
/// priority regardless of the order they appear in the source text, so
/// `.camelcase().pluralize()` and `.pluralize().camelcase()` resolve
/// identically.
const APPLY_ORDER: [Modifier; 5] = [
    Modifier::Split,
    Modifier::Pluralize,
    Modifier::Capitalize,
    Modifier::CamelCase,
    Modifier::SnakeCase,
];

impl Modifier {
    /// Decodes a modifier name; unrecognized names yield `None` and are
    /// silently dropped by the parser (forward-compatible no-op).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "split" => Some(Modifier::Split),
            "pluralize" => Some(Modifier::Pluralize),
            "capitalize" => Some(Modifier::Capitalize),
            "camelcase" => Some(Modifier::CamelCase),
            "snakecase" => Some(Modifier::SnakeCase),
            _ => None,
        }
    }

    fn apply(&self, value: &str) -> String {
        match self {
            Modifier::Split => transform::split_underscores(value),
            Modifier::Pluralize => transform::pluralize(value),
            Modifier::Capitalize => transform::capitalize_words(value),
            Modifier::CamelCase => transform::camel_case(value),
            Modifier::SnakeCase => transform::snake_case(value),
        }
    }
}

/// Applies a modifier chain to `value` in the fixed semantic order.
pub fn apply_chain(value: &str, modifiers: &[Modifier]) -> String {
    let mut result = value.to_string();
    for modifier in APPLY_ORDER {
        if modifiers.contains(&modifier) {
            result = modifier.apply(&result);
        }
    }
    result
}

/// A single placeholder occurrence within a source text.
///
/// The byte range is kept so substitution stays occurrence-local: two
/// placeholders naming the same parameter are independent matches, each
/// carrying its own modifier chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Byte offset of `<%=` in the source text
    pub start: usize,
    /// Byte offset one past `%>` in the source text
    pub end: usize,
    /// The identifier between the delimiters
    pub name: String,
    /// Recognized modifiers, in source order
    pub modifiers: Vec<Modifier>,
}

/// Scans `text` and lazily yields every non-overlapping placeholder match.
pub fn matches(text: &str) -> impl Iterator<Item = Match> + '_ {
    PLACEHOLDER_RE.captures_iter(text).map(|caps| {
        let whole = caps.get(0).unwrap();
        let modifiers = MODIFIER_RE
            .captures_iter(caps.get(2).map_or("", |m| m.as_str()))
            .filter_map(|m| Modifier::from_name(&m[1]))
            .collect();
        Match {
            start: whole.start(),
            end: whole.end(),
            name: caps[1].to_string(),
            modifiers,
        }
    })
}
