use std::sync::LazyLock;

use regex::Regex;

static ANY_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[-*+]\s+|\d+[.)]\s+)").unwrap());
static UNORDERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\s*)[-*+]\s+").unwrap());
static ORDERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\s*)(\d+)([.)])\s+").unwrap());
static ORPHAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[-*+]|\d+[.)])\s*$").unwrap());

/// Whether a list bucket holds ordered or unordered items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

/// A parsed unordered item: indentation width plus the text after the marker.
#[derive(Debug, Clone, Copy)]
pub struct UnorderedItem<'a> {
    pub indent: usize,
    pub rest: &'a str,
}

/// A parsed ordered item. `number` keeps the source digits so marker width
/// can be measured before renumbering.
#[derive(Debug, Clone, Copy)]
pub struct OrderedItem<'a> {
    pub indent: usize,
    pub number: &'a str,
    pub delimiter: char,
    pub rest: &'a str,
}

/// List marker knowledge: `-`/`*`/`+` and `1.`/`1)` prefixes.
pub struct ListMarker;

impl ListMarker {
    /// The canonical unordered marker (MD004: dashes everywhere).
    pub const UNORDERED: &'static str = "- ";

    /// Whether the body starts with any list marker followed by a space.
    pub fn is_item(body: &str) -> bool {
        ANY_ITEM.is_match(body)
    }

    /// A line that is only a marker with no content, e.g. `"-"` or `"  3."`.
    pub fn is_orphan(body: &str) -> bool {
        ORPHAN.is_match(body)
    }

    pub fn parse_unordered(body: &str) -> Option<UnorderedItem<'_>> {
        let caps = UNORDERED.captures(body)?;
        Some(UnorderedItem {
            indent: caps.get(1).map_or(0, |m| m.as_str().chars().count()),
            rest: &body[caps.get(0).map_or(0, |m| m.end())..],
        })
    }

    pub fn parse_ordered(body: &str) -> Option<OrderedItem<'_>> {
        let caps = ORDERED.captures(body)?;
        Some(OrderedItem {
            indent: caps.get(1).map_or(0, |m| m.as_str().chars().count()),
            number: caps.get(2).map_or("", |m| m.as_str()),
            delimiter: caps.get(3).and_then(|m| m.as_str().chars().next())?,
            rest: &body[caps.get(0).map_or(0, |m| m.end())..],
        })
    }
}
