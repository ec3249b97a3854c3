//! Outline construction engine for the blog theme's table of contents.
//!
//! This crate is pure Rust with no browser dependencies: it turns the flat,
//! ordered sequence of heading elements found in a post into a nested
//! outline tree, and owns the scroll-target arithmetic used when a reader
//! activates an outline entry. The `widgets` crate is responsible for
//! collecting headings from the DOM, rendering the tree, and issuing the
//! actual scroll commands.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`heading`] | Validated heading input model and anchor-id scheme |
//! | [`tree`] | Flat heading sequence → nested [`tree::OutlineNode`] list |
//! | [`scroll`] | Scroll-target position arithmetic |
//! | [`consts`] | Shared numeric constants (heading range, header clearance) |

pub mod consts;
pub mod heading;
pub mod scroll;
pub mod tree;
