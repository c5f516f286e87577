//! Implementation of the `transdiff report` command.

use super::{apply_input_overrides, read_diff};
use crate::cli::ReportArgs;
use crate::config::Config;
use crate::error::Result;
use crate::fs::{DirectorySink, StdoutSink, TextSink};
use crate::report::{ReportSet, reports_from_diff};
use std::path::Path;

/// Execute the `transdiff report` command.
///
/// Collects the translation diff, builds one report per language and
/// hands each to the sink: the output directory, or stdout with `--stdout`.
pub fn cmd_report(cwd: &Path, mut config: Config, args: ReportArgs) -> Result<()> {
    apply_input_overrides(&mut config, &args.input);
    if let Some(out) = args.out {
        config.output_dir = out;
    }
    if let Some(baseline) = args.baseline {
        config.baseline_language = baseline;
    }
    if !args.languages.is_empty() {
        config.languages = args.languages;
    }
    config.validate()?;

    let diff_text = read_diff(cwd, &config, &args.input)?;
    let reports = reports_from_diff(&diff_text, &config.report_options());

    if reports.is_empty() {
        println!("No translation changes to report.");
        return Ok(());
    }

    if args.stdout {
        let written = write_reports(&reports, &config, &mut StdoutSink::stdout())?;
        for (language, location, rows) in written {
            tracing::info!(language = %language, rows, "wrote report to {}", location);
        }
    } else {
        let mut sink = DirectorySink::new(config.output_path(cwd));
        for (_, location, rows) in write_reports(&reports, &config, &mut sink)? {
            println!("Wrote {} keys to {}", rows, location);
        }
    }

    Ok(())
}

/// Write every report through `sink`, named by the config's file pattern.
///
/// Returns `(language, location, row count)` per written report, in report order.
pub fn write_reports(
    reports: &ReportSet,
    config: &Config,
    sink: &mut dyn TextSink,
) -> Result<Vec<(String, String, usize)>> {
    let mut written = Vec::with_capacity(reports.len());

    for report in reports.iter() {
        let name = config.report_file_name(report.language());
        sink.write_text(&name, &report.to_csv())?;
        written.push((
            report.language().to_string(),
            sink.location(&name),
            report.row_count(),
        ));
    }

    Ok(written)
}
