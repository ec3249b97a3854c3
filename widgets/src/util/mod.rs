//! Browser plumbing shared across widgets.
//!
//! `dom` and `storage` are pure browser access and only exist in `csr`
//! builds; `scroll_header` and `links` keep their decision logic as plain
//! functions so it tests natively.

#[cfg(feature = "csr")]
pub mod dom;
pub mod links;
pub mod scroll_header;
#[cfg(feature = "csr")]
pub mod storage;
