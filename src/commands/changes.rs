//! Implementation of the `transdiff changes` command.
//!
//! Prints the aggregated change set as JSON. Useful for checking how the
//! diff was understood before the report filter drops removal-only keys.

use super::{apply_input_overrides, read_diff};
use crate::changes::{ChangeSet, aggregate};
use crate::cli::{ChangesArgs, InputArgs};
use crate::config::Config;
use crate::diff::parse_events;
use crate::error::{Result, TransdiffError};
use std::path::Path;

/// Execute the `transdiff changes` command.
pub fn cmd_changes(cwd: &Path, config: Config, args: ChangesArgs) -> Result<()> {
    let changes = collect_changes(cwd, config, &args.input)?;
    println!("{}", render_changes(&changes)?);
    Ok(())
}

fn collect_changes(cwd: &Path, mut config: Config, input: &InputArgs) -> Result<ChangeSet> {
    apply_input_overrides(&mut config, input);
    config.validate()?;

    let diff_text = read_diff(cwd, &config, input)?;
    Ok(aggregate(parse_events(&diff_text)))
}

/// Serialize for printing. A failure here means no output could be
/// produced, so it is reported like a failed write.
fn render_changes(changes: &ChangeSet) -> Result<String> {
    changes
        .to_json_pretty()
        .map_err(|e| TransdiffError::IoError(format!("failed to serialize changes: {}", e)))
}
