//! Shared numeric constants for the outline crate.

// ── Heading range ───────────────────────────────────────────────

/// Smallest heading rank that participates in the outline. `h1` is the post
/// title and never appears in the body content region.
pub const MIN_HEADING_LEVEL: u8 = 2;

/// Largest heading rank that participates in the outline.
pub const MAX_HEADING_LEVEL: u8 = 6;

// ── Scrolling ───────────────────────────────────────────────────

/// Vertical clearance in CSS pixels left above a scroll target so the fixed
/// page header does not cover the heading. Must match the theme's header
/// height.
pub const HEADER_CLEARANCE_PX: f64 = 100.0;
