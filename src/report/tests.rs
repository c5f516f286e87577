//! Tests for report building.

use super::{ReportOptions, build_reports, reports_from_diff};
use crate::changes::ChangeSet;

const EN_HEADER: &str = "File,Translation Key,Original Value (en),Updated Value (en)";
const FR_HEADER: &str = "File,Translation Key,Original Value (en),New Value (en),Original Value (fr),Updated Value (fr)";

fn marker(language: &str, file: &str) -> String {
    format!(
        "diff --git public/locales/{lang}/{file} public/locales/{lang}/{file}\n\
         --- public/locales/{lang}/{file}\n\
         +++ public/locales/{lang}/{file}\n\
         @@ -1,10 +1,10 @@\n",
        lang = language,
        file = file
    )
}

/// A top-level baseline change produces one baseline row.
#[test]
fn test_top_level_baseline_change() {
    let diff = format!(
        "{}{}",
        marker("en", "common.json"),
        " {\n-  \"hello\": \"Hi\",\n+  \"hello\": \"Hello\",\n   \"bye\": \"Bye\"\n }\n"
    );

    let reports = reports_from_diff(&diff, &ReportOptions::default());
    let en = reports.get("en").unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(en.row_count(), 1);
    assert_eq!(
        en.to_csv(),
        format!("{}\n\"common.json\",\"hello\",\"Hi\",\"Hello\"", EN_HEADER)
    );
}

/// The same change inside an object is reported under its dotted key.
#[test]
fn test_nested_baseline_change() {
    let diff = format!(
        "{}{}",
        marker("en", "common.json"),
        " {\n   \"nav\": {\n-    \"hello\": \"Hi\",\n+    \"hello\": \"Hello\",\n     \"bye\": \"Bye\"\n   }\n }\n"
    );

    let reports = reports_from_diff(&diff, &ReportOptions::default());

    assert_eq!(
        reports.get("en").unwrap().rows()[1],
        r#""common.json","nav.hello","Hi","Hello""#
    );
}

/// A translation row shows the baseline's old and new values first.
#[test]
fn test_translation_row_carries_baseline_context() {
    let diff = format!(
        "{}{}{}{}",
        marker("en", "common.json"),
        " {\n-  \"hello\": \"Hi\",\n+  \"hello\": \"Hello\",\n }\n",
        marker("fr", "common.json"),
        " {\n-  \"hello\": \"Salut\",\n+  \"hello\": \"Bonjour\",\n }\n"
    );

    let reports = reports_from_diff(&diff, &ReportOptions::default());
    let fr = reports.get("fr").unwrap();

    assert_eq!(fr.header(), FR_HEADER);
    assert_eq!(
        fr.rows()[1],
        r#""common.json","hello","Hi","Hello","Salut","Bonjour""#
    );
    assert_eq!(reports.languages(), vec!["en", "fr"]);
}

/// A language whose value was only removed still appears when the baseline added one.
#[test]
fn test_removal_included_when_baseline_added() {
    let diff = format!(
        "{}{}{}{}",
        marker("en", "common.json"),
        " {\n-  \"hello\": \"Hi\",\n+  \"hello\": \"Hello\",\n }\n",
        marker("fr", "common.json"),
        " {\n-  \"hello\": \"Salut\",\n }\n"
    );

    let reports = reports_from_diff(&diff, &ReportOptions::default());

    assert_eq!(
        reports.get("fr").unwrap().rows()[1],
        r#""common.json","hello","Hi","Hello","Salut","""#
    );
}

/// Without a baseline record, a translation's own addition keeps the row and
/// the baseline columns are empty.
#[test]
fn test_translation_addition_without_baseline_entry() {
    let diff = format!(
        "{}{}",
        marker("fr", "common.json"),
        " {\n+  \"hello\": \"Bonjour\",\n }\n"
    );

    let reports = reports_from_diff(&diff, &ReportOptions::default());
    let fr = reports.get("fr").unwrap();

    assert!(reports.get("en").is_none());
    assert_eq!(fr.row_count(), 1);
    assert_eq!(fr.rows()[1], r#""common.json","hello","","","","Bonjour""#);
}

/// Removal-only rows with no addition anywhere are dropped.
#[test]
fn test_removal_only_rows_are_dropped() {
    let diff = format!(
        "{}{}{}{}",
        marker("en", "common.json"),
        " {\n-  \"gone\": \"Gone\",\n }\n",
        marker("fr", "common.json"),
        " {\n-  \"gone\": \"Parti\",\n-  \"hello\": \"Salut\",\n }\n"
    );

    let reports = reports_from_diff(&diff, &ReportOptions::default());

    assert!(reports.is_empty());
}

/// Two additions for the same key keep the later value.
#[test]
fn test_consecutive_additions_keep_later_value() {
    let diff = format!(
        "{}{}",
        marker("en", "common.json"),
        " {\n+  \"hello\": \"First\",\n+  \"hello\": \"Second\",\n }\n"
    );

    let reports = reports_from_diff(&diff, &ReportOptions::default());

    assert_eq!(
        reports.get("en").unwrap().rows()[1],
        r#""common.json","hello","","Second""#
    );
}

/// An extra closing brace does not stop later keys from being reported at the top level.
#[test]
fn test_extra_closing_brace_reports_top_level_keys() {
    let diff = format!(
        "{}{}",
        marker("en", "common.json"),
        " {\n   \"nav\": {\n     \"a\": \"b\"\n   }\n }\n }\n+  \"late\": \"Late\"\n"
    );

    let reports = reports_from_diff(&diff, &ReportOptions::default());

    assert_eq!(
        reports.get("en").unwrap().rows()[1],
        r#""common.json","late","","Late""#
    );
}

/// A plain value renders unchanged whether it appears as old or new.
#[test]
fn test_plain_value_round_trips_through_csv() {
    let value = "Save your changes, then continue";
    let diff = format!(
        "{}{}{}{}",
        marker("en", "a.json"),
        format!(" {{\n+  \"save\": \"{}\",\n }}\n", value),
        marker("en", "b.json"),
        format!(" {{\n-  \"save\": \"{}\",\n+  \"save\": \"Saved\",\n }}\n", value)
    );

    let reports = reports_from_diff(&diff, &ReportOptions::default());
    let en = reports.get("en").unwrap();

    assert_eq!(en.rows()[1], format!(r#""a.json","save","","{}""#, value));
    assert_eq!(en.rows()[2], format!(r#""b.json","save","{}","Saved""#, value));
}

#[test]
fn test_empty_diff_yields_no_reports() {
    assert!(reports_from_diff("", &ReportOptions::default()).is_empty());
    assert!(build_reports(&ChangeSet::new(), &ReportOptions::default()).is_empty());
}

#[test]
fn test_reports_are_identical_across_runs() {
    let diff = format!(
        "{}{}{}{}",
        marker("en", "common.json"),
        " {\n   \"nav\": {\n+    \"a\": \"A\",\n+    \"b\": \"B\",\n   }\n }\n",
        marker("de", "common.json"),
        " {\n   \"nav\": {\n-    \"a\": \"Alt\",\n   }\n }\n"
    );

    let first: Vec<String> = reports_from_diff(&diff, &ReportOptions::default())
        .iter()
        .map(|r| r.to_csv())
        .collect();
    let second: Vec<String> = reports_from_diff(&diff, &ReportOptions::default())
        .iter()
        .map(|r| r.to_csv())
        .collect();

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

/// Every reported key had a changed line in its own language or the baseline.
#[test]
fn test_reported_keys_come_from_changed_lines() {
    let mut changes = ChangeSet::new();
    changes.upsert("common.json", "a", "en").new_value = Some("A".to_string());
    changes.upsert("common.json", "a", "fr").old_value = Some("Ah".to_string());
    changes.upsert("common.json", "b", "fr").new_value = Some("Bé".to_string());
    changes.upsert("common.json", "c", "fr").old_value = Some("Cé".to_string());

    let reports = build_reports(&changes, &ReportOptions::default());

    for report in reports.iter() {
        for row in &report.rows()[1..] {
            let key = row.split(',').nth(1).unwrap().trim_matches('"');
            assert!(
                changes.record("common.json", key, report.language()).is_some()
                    || changes.record("common.json", key, "en").is_some()
            );
        }
    }
    assert_eq!(reports.get("fr").unwrap().row_count(), 2);
    assert_eq!(reports.get("en").unwrap().row_count(), 1);
}

#[test]
fn test_custom_baseline_language() {
    let mut changes = ChangeSet::new();
    changes.upsert("common.json", "a", "de").new_value = Some("Neu".to_string());
    changes.upsert("common.json", "a", "en").old_value = Some("Old".to_string());

    let reports = build_reports(&changes, &ReportOptions::with_baseline("de"));

    assert_eq!(
        reports.get("de").unwrap().header(),
        "File,Translation Key,Original Value (de),Updated Value (de)"
    );
    assert_eq!(
        reports.get("en").unwrap().rows()[1],
        r#""common.json","a","","Neu","Old","""#
    );
}

#[test]
fn test_language_filter_limits_rendered_reports() {
    let mut changes = ChangeSet::new();
    changes.upsert("common.json", "a", "en").new_value = Some("A".to_string());
    changes.upsert("common.json", "a", "fr").old_value = Some("Ah".to_string());
    changes.upsert("common.json", "a", "de").old_value = Some("Ach".to_string());

    let options = ReportOptions::default().only(vec!["fr".to_string()]);
    let reports = build_reports(&changes, &options);

    assert_eq!(reports.languages(), vec!["fr"]);
    assert_eq!(
        reports.get("fr").unwrap().rows()[1],
        r#""common.json","a","","A","Ah","""#
    );
}
