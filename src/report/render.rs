//! CSV row rendering.
//!
//! Fields are wrapped in double quotes so commas inside translations stay in
//! their column. Quotes inside a value are written as-is.

/// Header row for `language`'s report.
///
/// Non-baseline reports carry the baseline's old and new value ahead of the
/// language's own columns for translator context.
pub(super) fn header_row(language: &str, baseline: &str) -> String {
    let mut columns = vec!["File".to_string(), "Translation Key".to_string()];

    if language != baseline {
        columns.push(format!("Original Value ({})", baseline));
        columns.push(format!("New Value ({})", baseline));
    }

    columns.push(format!("Original Value ({})", language));
    columns.push(format!("Updated Value ({})", language));

    columns.join(",")
}

/// Quote-wrap every field and join them with commas.
pub(super) fn data_row(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| format!("\"{}\"", field))
        .collect::<Vec<_>>()
        .join(",")
}
