//! Helper functions for diff line parsing.

/// Split a `diff --git` marker path into `(filename, language)`.
///
/// Handles both prefixed and `--no-prefix` markers:
/// - "a/public/locales/en/common.json b/public/locales/en/common.json"
/// - "public/locales/en/common.json public/locales/en/common.json"
///
/// The filename is the last `/`-separated segment of the new path and the
/// language is the segment before it. Returns None when the path has no
/// parent directory.
pub(super) fn split_locale_path(rest: &str) -> Option<(String, String)> {
    let path = normalize_path(marker_path(rest.trim()));
    let mut segments = path.rsplit('/');

    let filename = segments.next()?;
    let language = segments.next()?;

    if filename.is_empty() || language.is_empty() {
        return None;
    }

    Some((filename.to_string(), language.to_string()))
}

/// Pick the new-file path out of the marker's two paths.
fn marker_path(rest: &str) -> &str {
    // Prefixed form: "a/<path> b/<path>"
    if rest.starts_with("a/")
        && let Some(b_pos) = rest.rfind(" b/")
    {
        return &rest[b_pos + 3..];
    }

    // Unprefixed form repeats the same path twice, separated by one space
    let mid = rest.len() / 2;
    if rest.len() % 2 == 1
        && rest.is_char_boundary(mid)
        && rest.as_bytes()[mid] == b' '
        && rest[..mid] == rest[mid + 1..]
    {
        return &rest[mid + 1..];
    }

    rest.rsplit(' ').next().unwrap_or(rest)
}

/// Extract the key of an object-opening line such as `"nav": {`.
///
/// The line must start with a quote and end with an opening brace with
/// nothing but the key's colon in between. Quotes are removed from the key.
pub(super) fn object_open_key(line: &str) -> Option<String> {
    if !line.starts_with('"') || !line.ends_with('{') {
        return None;
    }

    let (raw_key, rest) = line.rsplit_once(':')?;
    if rest.trim() != "{" {
        return None;
    }

    Some(raw_key.replace('"', ""))
}

/// Returns true for a line that only closes an object: `}` or `},`.
pub(super) fn is_object_close(line: &str) -> bool {
    matches!(line, "}" | "},")
}

/// Returns true when the body of a signed line is JSON structure rather
/// than a leaf entry (document braces, array brackets, object openers).
pub(super) fn is_structural_body(body: &str) -> bool {
    let body = body.strip_suffix(',').unwrap_or(body).trim();
    matches!(body, "{" | "}" | "[" | "]") || object_open_key(body).is_some()
}

/// Split the body of a changed entry line into `(leaf_name, value)`.
///
/// Strips surrounding whitespace, one trailing comma and the outer quotes,
/// then splits on the first `": "`. Embedded escapes are kept verbatim.
/// Without a separator the whole body becomes the leaf name and the value
/// is absent.
pub(super) fn split_entry(body: &str) -> (String, Option<String>) {
    let body = body.trim();
    let body = body.strip_suffix(',').unwrap_or(body).trim_end();
    let body = body.strip_prefix('"').unwrap_or(body);
    let body = body.strip_suffix('"').unwrap_or(body);

    match body.split_once("\": \"") {
        Some((name, value)) => (name.to_string(), Some(value.to_string())),
        None => (body.to_string(), None),
    }
}

/// Normalize a file path to use forward slashes.
///
/// Diffs produced on Windows may carry backslash separators.
pub(super) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
