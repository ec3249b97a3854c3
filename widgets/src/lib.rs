//! # widgets
//!
//! Leptos + WASM browser layer for the blog theme: the table of contents,
//! the light/dark theme toggle, and the post search filter.
//!
//! The pages themselves are static HTML produced by the site generator.
//! This crate loads as one WASM module, looks for each widget's host
//! element, and mounts only what the current page carries; a page without
//! a given host simply skips that widget. Outline construction itself
//! lives in the `outline` crate and stays free of browser types.
//!
//! Browser-only dependencies sit behind the `csr` feature so the crate and
//! its pure state models compile and test natively.

pub mod boot;
pub mod components;
pub mod state;
pub mod util;
