//! Lexical path handling for asset lookups.
//!
//! Asset paths are plain strings with `/` separators on every platform.
//! Nothing here touches the real filesystem.

/// Cleans a path lexically.
///
/// Repeated separators and `.` segments are dropped, `..` removes the
/// segment before it. A `..` at the start of a rooted path is dropped; at
/// the start of a relative path it is kept. An empty relative result
/// becomes `"."`.
///
/// # Examples
///
/// ```
/// use assetfs::path::clean;
///
/// assert_eq!(clean("static//css/./site.css"), "static/css/site.css");
/// assert_eq!(clean("a/b/../c"), "a/c");
/// assert_eq!(clean("/../x"), "/x");
/// assert_eq!(clean(""), ".");
/// ```
#[must_use]
pub fn clean(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !rooted {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }

    let body = segments.join("/");
    if rooted {
        format!("/{body}")
    } else if body.is_empty() {
        ".".to_string()
    } else {
        body
    }
}

/// Joins two path fragments and cleans the result.
///
/// Empty fragments are ignored; joining two empty fragments yields the
/// empty string.
///
/// # Examples
///
/// ```
/// use assetfs::path::join;
///
/// assert_eq!(join("static", "/x.css"), "static/x.css");
/// assert_eq!(join("", "dir/b.txt"), "dir/b.txt");
/// assert_eq!(join("", ""), "");
/// ```
#[must_use]
pub fn join(base: &str, name: &str) -> String {
    match (base.is_empty(), name.is_empty()) {
        (true, true) => String::new(),
        (true, false) => clean(name),
        (false, true) => clean(base),
        (false, false) => clean(&format!("{base}/{name}")),
    }
}

/// Turns a request path into the key handed to an asset source.
///
/// The prefix is joined in front of `name`, then a single leading `/` is
/// stripped so every lookup is relative to the asset root. A bare `.`
/// names the root and becomes the empty path. This is not traversal
/// sanitization: `..` segments are resolved lexically like any other
/// join.
///
/// # Examples
///
/// ```
/// use assetfs::path::normalize_request;
///
/// assert_eq!(normalize_request("", "/a.txt"), "a.txt");
/// assert_eq!(normalize_request("static", "/x.css"), "static/x.css");
/// assert_eq!(normalize_request("", "/"), "");
/// ```
#[must_use]
pub fn normalize_request(prefix: &str, name: &str) -> String {
    let mut joined = join(prefix, name);
    if joined.starts_with('/') {
        joined.remove(0);
    }
    if joined == "." {
        joined.clear();
    }
    joined
}

/// Returns the final segment of a path.
///
/// # Examples
///
/// ```
/// use assetfs::path::base_name;
///
/// assert_eq!(base_name("dir/b.txt"), "b.txt");
/// assert_eq!(base_name("a.txt"), "a.txt");
/// assert_eq!(base_name(""), "");
/// ```
#[must_use]
pub fn base_name(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, name)| name)
}
