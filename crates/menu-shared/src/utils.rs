//! Utility functions for menu URLs

/// Join the non-empty parts with `/` and strip leading/trailing slashes.
///
/// `compose_url(Some("/products"), Some("42"))` yields `products/42`;
/// a lone `/` link collapses to the empty string.
pub fn compose_url(link: Option<&str>, menuable_value: Option<&str>) -> String {
    let joined = [link, menuable_value]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    joined.trim_matches('/').to_string()
}

pub fn trim_trailing_slash(url: &str) -> &str {
    url.trim_end_matches('/')
}

pub fn trim_leading_slash(url: &str) -> &str {
    url.trim_start_matches('/')
}

/// Link stored for an item bound to a menuable entity on create.
pub fn append_identifier(link: Option<&str>, identifier: &str) -> String {
    format!("{}/{}", link.unwrap_or_default(), identifier)
}

/// Link stored for an item bound to a menuable entity on update.
///
/// The last `/` segment is always treated as the previously appended
/// identifier and replaced.
pub fn replace_identifier(link: Option<&str>, identifier: &str) -> String {
    let base = link
        .and_then(|l| l.rsplit_once('/'))
        .map(|(base, _)| base)
        .unwrap_or_default();
    format!("{}/{}", base, identifier)
}
