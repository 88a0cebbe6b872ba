use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dupsel_duplicates::{Config, OutputFormat};
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "dupsel")]
#[command(about = "Find CSS selectors that are defined in more than one stylesheet", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Report selectors defined directly in more than one SCSS file
    Duplicates(Config),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::Duplicates(mut cfg) => {
            cfg.initialize()?;
            info!("Running duplicate selector check (format: {:?})", cfg.format);
            debug!("Config: root={:?}, exclude={:?}", cfg.root, cfg.exclude);

            let result = dupsel_duplicates::run_duplicate_check(cfg.clone())?;
            debug!("Found {} duplicated selectors", result.duplicates.len());

            let elapsed_ms = start.elapsed().as_millis();
            let root = cfg.root.as_deref();

            match cfg.format {
                OutputFormat::Json => dupsel_duplicates::print_json_report(&mut stdout, &result)?,
                OutputFormat::Text => {
                    if result.duplicates.is_empty() {
                        info!("No duplicated selectors");
                        dupsel_duplicates::print_no_duplicates_message(&mut stdout)?;
                    } else {
                        dupsel_duplicates::print_duplicates_report(
                            &mut stdout,
                            &result.duplicates,
                            root,
                        )?;
                    }
                    dupsel_duplicates::print_skipped_files(&mut stdout, &result.skipped, root)?;
                    writeln!(
                        stdout,
                        "\n{} Finished in {}ms on {} files ({} skipped).",
                        "●".bright_blue(),
                        elapsed_ms.to_string().cyan(),
                        result.files_analyzed().to_string().cyan(),
                        result.skipped.len().to_string().cyan()
                    )?;
                }
            }
            stdout.flush()?;

            if !result.duplicates.is_empty() {
                // Non-zero exit to fail CI
                std::process::exit(1);
            }

            Ok(())
        }
    }
}
