//! Pure widget state models.
//!
//! DESIGN
//! ======
//! Everything here is plain Rust with no DOM types, so the decision logic
//! behind each widget (what matches, which theme applies) tests natively
//! while the `components` modules stay thin DOM wiring.

pub mod filter;
pub mod theme;
