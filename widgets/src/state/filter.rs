#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Whether a post stays visible for `query`.
///
/// Case-insensitive substring containment over the post's title and its tag
/// line. The empty query matches everything, which restores the unfiltered
/// page as the reader clears the input.
#[must_use]
pub fn matches(query: &str, title: &str, tags: &str) -> bool {
    let query = query.to_lowercase();
    title.to_lowercase().contains(&query) || tags.to_lowercase().contains(&query)
}
