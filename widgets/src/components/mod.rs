//! Leptos widget components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component mounts into a host element the site generator leaves in
//! the static markup. Components own their DOM side effects; decision
//! logic lives in `crate::state` and the `outline` crate.

pub mod search_filter;
pub mod theme_toggle;
pub mod toc;
