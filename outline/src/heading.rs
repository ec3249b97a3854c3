#[cfg(test)]
#[path = "heading_test.rs"]
mod heading_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_HEADING_LEVEL, MIN_HEADING_LEVEL};

/// One heading from the post body, in document order.
///
/// `level` is always within 2..=6; both constructors reject anything else,
/// so downstream code never re-validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
}

impl Heading {
    /// Build a heading from an already-known rank.
    ///
    /// Returns `None` for ranks outside 2..=6.
    #[must_use]
    pub fn new(level: u8, text: impl Into<String>) -> Option<Self> {
        if (MIN_HEADING_LEVEL..=MAX_HEADING_LEVEL).contains(&level) {
            Some(Self { level, text: text.into() })
        } else {
            None
        }
    }

    /// Build a heading from a DOM tag name (`"h2"`/`"H2"` … `"h6"`/`"H6"`).
    ///
    /// Any other tag name, including `h1` and `h7`, returns `None`.
    #[must_use]
    pub fn from_tag(tag: &str, text: impl Into<String>) -> Option<Self> {
        let mut chars = tag.chars();
        let h = chars.next()?;
        if !h.eq_ignore_ascii_case(&'h') {
            return None;
        }
        let digit = chars.next()?.to_digit(10)?;
        if chars.next().is_some() {
            return None;
        }
        Self::new(u8::try_from(digit).ok()?, text)
    }
}

/// Anchor identifier for the heading at `index` (0-based, document order).
///
/// Identifiers are 1-based: the first heading gets `heading-1`. The same id
/// is assigned to the heading element and used as the link fragment target.
#[must_use]
pub fn anchor_id(index: usize) -> String {
    format!("heading-{}", index + 1)
}
