use std::{
    env,
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use log::{debug, trace};
use serde::Serialize;

use crate::types::{CheckResult, SelectorOccurrenceMap, SkippedFile};

/// Number of most widely shared selectors listed in the summary
const TOP_SHARED: usize = 5;

/// Show a root-relative file relative to the current directory for clickable links
fn display_path(root: Option<&Path>, file: &Path) -> String {
    let Some(root) = root else {
        return file.display().to_string();
    };
    let absolute = root.join(file);
    match env::current_dir() {
        Ok(cwd) => match absolute.strip_prefix(&cwd) {
            Ok(rel) => rel.display().to_string(),
            Err(_) => {
                trace!("{} is outside {}", absolute.display(), cwd.display());
                absolute.display().to_string()
            }
        },
        Err(_) => {
            debug!("Failed to get current directory");
            file.display().to_string()
        }
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 { word.to_string() } else { format!("{word}s") }
}

pub fn print_no_duplicates_message<W: Write>(writer: &mut W) -> io::Result<()> {
    debug!("No duplicated selectors");
    writeln!(writer, "{} No duplicated css selectors found", "✓".green().bold())?;
    writer.flush()?;
    Ok(())
}

pub fn print_duplicates_report<W: Write>(
    writer: &mut W,
    duplicates: &SelectorOccurrenceMap,
    root: Option<&Path>,
) -> io::Result<()> {
    debug!("Printing report for {} duplicated selectors", duplicates.len());

    writeln!(
        writer,
        "{} Found {} duplicated css {}\n",
        "⚠".yellow().bold(),
        duplicates.len().to_string().yellow(),
        plural(duplicates.len(), "selector")
    )?;

    for (selector, files) in duplicates {
        writeln!(
            writer,
            "Selector {} exist on {} files",
            selector.bright_white().bold(),
            files.len().to_string().red()
        )?;
        for (idx, file) in files.iter().enumerate() {
            let prefix = if idx == files.len() - 1 { "└──" } else { "├──" };
            writeln!(writer, "{}  {}", prefix.dimmed(), display_path(root, file).blue())?;
        }
        writeln!(writer)?;
    }

    print_summary(writer, duplicates)?;

    writer.flush()?;
    Ok(())
}

fn print_summary<W: Write>(writer: &mut W, duplicates: &SelectorOccurrenceMap) -> io::Result<()> {
    if duplicates.is_empty() {
        return Ok(());
    }

    // Widest sharing first, ties in selector order
    let mut most_shared: Vec<_> = duplicates.iter().collect();
    most_shared.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
    most_shared.truncate(TOP_SHARED);

    writeln!(writer, "{}", "─".repeat(60).dimmed())?;
    writeln!(writer, "{}", "Summary".bold())?;
    writeln!(writer, "  Duplicated selectors: {}", duplicates.len().to_string().yellow().bold())?;
    writeln!(writer, "  Most shared:")?;
    for (idx, (selector, files)) in most_shared.iter().enumerate() {
        writeln!(writer, "    {}. {} ({} files)", idx + 1, selector, files.len().to_string().red())?;
    }

    Ok(())
}

pub fn print_skipped_files<W: Write>(
    writer: &mut W,
    skipped: &[SkippedFile],
    root: Option<&Path>,
) -> io::Result<()> {
    if skipped.is_empty() {
        return Ok(());
    }

    writeln!(
        writer,
        "\n{} {} {} could not be compiled and {} skipped:",
        "●".yellow(),
        skipped.len(),
        plural(skipped.len(), "file"),
        if skipped.len() == 1 { "was" } else { "were" }
    )?;
    for file in skipped {
        // Compiler messages span several lines; the first one names the problem
        let reason = file.reason.lines().next().unwrap_or_default();
        writeln!(writer, "  {} {}", display_path(root, &file.path).blue(), reason.dimmed())?;
    }
    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    duplicates: &'a SelectorOccurrenceMap,
    files_analyzed: usize,
    skipped: &'a [SkippedFile],
}

pub fn print_json_report<W: Write>(writer: &mut W, result: &CheckResult) -> io::Result<()> {
    let report = JsonReport {
        duplicates: &result.duplicates,
        files_analyzed: result.files_analyzed(),
        skipped: &result.skipped,
    };
    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
