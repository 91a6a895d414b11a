//! Route path helpers.

/// Supplies the path of the page being rendered.
///
/// The path has a leading slash and no query string; [`normalize_route`]
/// is applied anyway before use.
pub trait RouteProvider {
    fn current_route_path(&self) -> &str;
}

impl RouteProvider for str {
    fn current_route_path(&self) -> &str {
        self
    }
}

impl RouteProvider for String {
    fn current_route_path(&self) -> &str {
        self
    }
}

impl<R: RouteProvider + ?Sized> RouteProvider for &R {
    fn current_route_path(&self) -> &str {
        (**self).current_route_path()
    }
}

/// Canonical form of a route path.
///
/// ```text
/// ""                 -> "/"
/// "about/"           -> "/about"
/// "/blog/post?p=2#c" -> "/blog/post"
/// ```
pub fn normalize_route(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Non-empty `/`-delimited segments of a route.
pub fn route_segments(route: &str) -> impl Iterator<Item = &str> {
    route.split('/').filter(|s| !s.is_empty())
}

/// Display name for a path segment: `our-history` -> `Our History`.
///
/// Only the first letter of each word is uppercased; the rest is kept.
pub fn segment_title(segment: &str) -> String {
    segment
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
