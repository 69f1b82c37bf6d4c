//! Report formatting and printing for CLI commands.
//!
//! Kept apart from the commands so the library can be used without a terminal.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

use super::commands::{ChangeKind, ChangeSummary, CommandResult, CommandSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{ExtractedKeyView, ExtractionSummary, LanguageOverview, Status};
use crate::messages::{ExportSummary, ImportSummary};
use crate::store::KeyAction;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Widest status name, `newInCode`.
const STATUS_WIDTH: usize = 9;

pub fn print(result: &CommandResult) -> Result<()> {
    if let CommandSummary::Refused(message) = &result.summary {
        eprintln!("{} {}", "error:".bold().red(), message);
        return Ok(());
    }

    print_to(result, &mut io::stdout().lock())
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) -> Result<()> {
    if result.json {
        return print_json(&result.summary, writer);
    }

    match &result.summary {
        CommandSummary::Init => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", CONFIG_FILE_NAME).green()
            );
        }
        CommandSummary::Extract(summary) => print_extract(summary, writer),
        CommandSummary::Status(overview) => print_status(overview, writer),
        CommandSummary::Keys(views) => print_keys(views, writer),
        CommandSummary::Languages(languages) => {
            if languages.is_empty() {
                let _ = writeln!(writer, "{}", "No languages in the translation store".dimmed());
            }
            for language in languages {
                let _ = writeln!(writer, "{}", language);
            }
        }
        CommandSummary::Get { value, .. } => {
            let _ = writeln!(writer, "{}", value);
        }
        CommandSummary::Changed(change) => print_change(change, writer),
        CommandSummary::Import(summary) => print_import(summary, writer),
        CommandSummary::Export(summary) => print_export(summary, writer),
        CommandSummary::Refused(message) => {
            let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), message);
        }
    }

    Ok(())
}

fn print_json<W: Write>(summary: &CommandSummary, writer: &mut W) -> Result<()> {
    let json = match summary {
        CommandSummary::Status(overview) => serde_json::to_string_pretty(overview),
        CommandSummary::Keys(views) => serde_json::to_string_pretty(views),
        CommandSummary::Extract(summary) => serde_json::to_string_pretty(summary),
        CommandSummary::Languages(languages) => serde_json::to_string_pretty(languages),
        CommandSummary::Import(summary) => serde_json::to_string_pretty(summary),
        CommandSummary::Export(summary) => serde_json::to_string_pretty(summary),
        _ => return Ok(()),
    }
    .context("Failed to serialize JSON output")?;

    writeln!(writer, "{}", json).context("Failed to write output")?;
    Ok(())
}

fn print_extract<W: Write>(summary: &ExtractionSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} key usage(s) from {} file(s)",
            summary.keys_extracted, summary.files_scanned
        )
        .green()
    );

    let width = summary
        .by_namespace
        .keys()
        .map(|ns| UnicodeWidthStr::width(ns.as_str()))
        .max()
        .unwrap_or(0);
    for (namespace, count) in &summary.by_namespace {
        let _ = writeln!(writer, "  {}  {}", pad(namespace, width).cyan(), count);
    }

    if summary.failed_count > 0 {
        eprintln!(
            "{} {} key usage(s) could not be stored",
            "warning:".bold().yellow(),
            summary.failed_count
        );
    }
}

fn print_status<W: Write>(overview: &LanguageOverview, writer: &mut W) {
    let key_width = overview
        .entries()
        .map(|e| UnicodeWidthStr::width(e.key.as_str()))
        .max()
        .unwrap_or(0);

    for group in &overview.groups {
        let _ = writeln!(
            writer,
            "{} {}",
            group.namespace.bold(),
            format!("({} keys)", group.entries.len()).dimmed()
        );
        for entry in &group.entries {
            let _ = writeln!(
                writer,
                "  {}  {}  {}",
                pad(&entry.key, key_width),
                status_colored(entry.status, &pad(entry.status.as_str(), STATUS_WIDTH)),
                entry.value
            );
        }
        let _ = writeln!(writer);
    }

    let totals = &overview.totals;
    let breakdown = Status::ALL
        .iter()
        .map(|s| format!("{} {}", totals.get(*s), s.as_str()))
        .collect::<Vec<_>>()
        .join(", ");
    let mark = if totals.missing > 0 {
        FAILURE_MARK.red()
    } else {
        SUCCESS_MARK.green()
    };
    let _ = writeln!(
        writer,
        "{} {}: {} key(s) ({})",
        mark,
        overview.language.bold(),
        totals.total(),
        breakdown
    );
}

fn print_keys<W: Write>(views: &[ExtractedKeyView], writer: &mut W) {
    let labels: Vec<String> = views
        .iter()
        .map(|v| format!("{}:{}", v.record.namespace, v.record.key))
        .collect();
    let locations: Vec<String> = views
        .iter()
        .map(|v| format!("{}:{}", v.record.file_path, v.record.line_number))
        .collect();
    let label_width = labels.iter().map(|l| l.width()).max().unwrap_or(0);
    let location_width = locations.iter().map(|l| l.width()).max().unwrap_or(0);

    for ((view, label), location) in views.iter().zip(&labels).zip(&locations) {
        let reference = match &view.reference_value {
            Some(value) => value.normal(),
            None => "(no reference value)".dimmed(),
        };
        let _ = writeln!(
            writer,
            "{}  {}  x{}  {}",
            pad(label, label_width),
            pad(location, location_width).blue(),
            view.record.usage_count,
            reference
        );
    }

    let _ = writeln!(writer, "{} extracted key(s)", views.len());
}

fn print_change<W: Write>(change: &ChangeSummary, writer: &mut W) {
    let verb = match change.kind {
        ChangeKind::Key(KeyAction::Added) => "Added",
        ChangeKind::Key(KeyAction::Updated) => "Updated",
        ChangeKind::Removed => "Removed",
    };
    let _ = writeln!(
        writer,
        "{} {} {}",
        SUCCESS_MARK.green(),
        verb.green(),
        change.label
    );
}

fn print_import<W: Write>(summary: &ImportSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Imported {} language(s): {} added, {} updated",
            summary.languages.len(),
            summary.added_count,
            summary.updated_count
        )
        .green()
    );
}

fn print_export<W: Write>(summary: &ExportSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Exported {} key(s) to {} file(s)",
            summary.key_count,
            summary.files.len()
        )
        .green()
    );
    for file in &summary.files {
        let _ = writeln!(writer, "  {}", file);
    }
}

fn status_colored(status: Status, text: &str) -> ColoredString {
    match status {
        Status::Normal => text.green(),
        Status::Missing => text.red(),
        Status::NewInCode => text.yellow(),
        Status::NotUsed => text.dimmed(),
    }
}

/// Left-align `text` to a display width.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(fill))
}
