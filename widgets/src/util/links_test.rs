use super::*;

#[test]
fn different_host_is_external() {
    assert!(is_external("github.com", "blog.example.com"));
}

#[test]
fn same_host_is_internal() {
    assert!(!is_external("blog.example.com", "blog.example.com"));
}

#[test]
fn hostless_links_are_internal() {
    // mailto:, javascript:, and bare fragments expose an empty hostname.
    assert!(!is_external("", "blog.example.com"));
}

#[test]
fn subdomain_counts_as_external() {
    assert!(is_external("www.example.com", "example.com"));
}
