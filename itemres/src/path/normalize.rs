//! Item path joining and segmentation.
//!
//! Item paths are `/`-separated strings such as `/sitecore/content/home`.
//! They are never filesystem paths, so everything here works on `&str`.

/// Separator between item path segments.
pub const SEPARATOR: char = '/';

/// Canonical name of a wildcard placeholder node.
pub const WILDCARD: &str = "*";

/// Join two path parts with exactly one separator between them.
///
/// If either side is empty the other side is returned unchanged. Otherwise
/// trailing separators of `a` and leading separators of `b` are trimmed and
/// a single `separator` is inserted.
///
/// # Examples
///
/// ```
/// use itemres::path::normalize::make_path;
///
/// assert_eq!(make_path("/sitecore/content/", "/home", '/'), "/sitecore/content/home");
/// assert_eq!(make_path("", "/home", '/'), "/home");
/// assert_eq!(make_path("/sitecore", "", '/'), "/sitecore");
/// assert_eq!(make_path("/home", "/", '/'), "/home/");
/// ```
#[must_use]
pub fn make_path(a: &str, b: &str, separator: char) -> String {
    if a.is_empty() {
        return b.to_string();
    }
    if b.is_empty() {
        return a.to_string();
    }

    let head = a.trim_end_matches(separator);
    let tail = b.trim_start_matches(separator);
    let mut joined = String::with_capacity(head.len() + tail.len() + 1);
    joined.push_str(head);
    joined.push(separator);
    joined.push_str(tail);
    joined
}

/// Iterate the non-empty segments of an item path.
///
/// Leading, trailing and repeated separators are ignored.
///
/// # Examples
///
/// ```
/// use itemres::path::normalize::segments;
///
/// let parts: Vec<_> = segments("//news/2024///").collect();
/// assert_eq!(parts, ["news", "2024"]);
/// ```
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(SEPARATOR).filter(|segment| !segment.is_empty())
}

/// Split an absolute path into its root segment and the remainder.
///
/// The path must start with a separator and contain a second one:
/// `/sitecore/content/home` splits into `/sitecore` and `/content/home`.
/// Paths without a second separator have no remainder to walk and return
/// `None`.
///
/// # Examples
///
/// ```
/// use itemres::path::normalize::split_root_segment;
///
/// assert_eq!(
///     split_root_segment("/sitecore/content"),
///     Some(("/sitecore", "/content"))
/// );
/// assert_eq!(split_root_segment("/sitecore"), None);
/// assert_eq!(split_root_segment("sitecore/content"), None);
/// ```
#[must_use]
pub fn split_root_segment(path: &str) -> Option<(&str, &str)> {
    let rest = path.strip_prefix(SEPARATOR)?;
    let index = rest.find(SEPARATOR)? + 1;
    Some(path.split_at(index))
}

/// Whether the path addresses the site root itself (`/`).
#[must_use]
pub fn is_root_path(path: &str) -> bool {
    path == "/"
}
