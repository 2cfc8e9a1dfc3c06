//! Orchestration of a manifest update.
//!
//! Validation runs to completion before the manifest is opened. The file is
//! then read once, patched in memory, and written once unless `--dry-run`.

use crate::cli::BumpArgs;
use crate::error::Result;
use crate::fs::{read_manifest, write_manifest};
use crate::rewrite::{Outcome, PatchReport, patch};
use crate::verify::{ValidatedUpdates, validate_updates};
use colored::Colorize;
use std::path::Path;

pub fn execute(args: BumpArgs) -> Result<()> {
    let updates = validate_updates(args.checksum.as_deref(), args.tag.as_deref())?;
    let path = args.manifest_path.as_path();

    println!("Updating: {}", path.display());

    let original = read_manifest(path)?;
    let report = patch(&original, &updates)?;

    print_report(&report, &updates, path);

    if report.is_noop() {
        println!("\n{}", "No changes needed".yellow());
    }

    if args.dry_run {
        println!(
            "\n{} ({} declaration(s) matched)",
            "DRY RUN - No changes will be made".yellow().bold(),
            report.changed().count()
        );
        return Ok(());
    }

    write_manifest(path, &report.text)?;

    println!(
        "{} {}",
        "✓ Successfully updated".green().bold(),
        path.display()
    );

    Ok(())
}

/// Prints one block per requested field, then a warning on stderr for each
/// field whose declaration is missing.
fn print_report(report: &PatchReport, updates: &ValidatedUpdates, path: &Path) {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    for (field, value) in updates.iter() {
        println!("Setting {}: {}", field.as_str().bold(), value);

        if let Some(Outcome::Changed { old, new }) = report.outcome(field) {
            println!("  Changed from: {}", old.yellow());
            println!("  Changed to:   {}", new.green());
        }
    }

    for field in report.not_found() {
        eprintln!(
            "  {} Could not find {} in {}",
            "Warning:".yellow().bold(),
            field,
            file_name
        );
    }
}
