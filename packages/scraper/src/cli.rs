//! Command-line interface for the scraper.

use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::adapter::SeriesScraper;
use crate::config::parse_year;
use crate::display::render_table;
use crate::error::{Result, ScraperError};
use crate::export::export_season;
use crate::patterns::PatternTable;
use crate::types::{EntityKind, Series};

/// Formula Scraper - Extract motorsport standings and results into CSV.
#[derive(Parser)]
#[command(name = "formula-scraper")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export every published entity kind of one season to CSV files.
    Export {
        /// Racing series (f1, f1-academy, f2, f3, formula-e)
        #[arg(short, long, default_value = "f1")]
        series: Series,

        /// Season year (prompted for when omitted)
        #[arg(short, long)]
        year: Option<i32>,

        /// Output directory (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// File name prefix (default depends on the series, e.g. f1_results_)
        #[arg(short, long)]
        prefix: Option<String>,

        /// Override the series base URL
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Print one entity kind of one season as a table.
    Show {
        /// Entity kind (drivers, races, teams, fastest-laps)
        kind: EntityKind,

        /// Racing series (f1, f1-academy, f2, f3, formula-e)
        #[arg(short, long, default_value = "f1")]
        series: Series,

        /// Season year (prompted for when omitted)
        #[arg(short, long)]
        year: Option<i32>,

        /// Override the series base URL
        #[arg(long)]
        base_url: Option<String>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            series,
            year,
            output,
            prefix,
            base_url,
        } => {
            let year = resolve_year(year)?;
            export_command(
                series,
                year,
                output.as_deref(),
                prefix.as_deref(),
                base_url.as_deref(),
            )
        }
        Commands::Show {
            kind,
            series,
            year,
            base_url,
        } => {
            let year = resolve_year(year)?;
            show_command(series, kind, year, base_url.as_deref())
        }
    }
}

/// Use the year from the command line or ask for one on stdin.
fn resolve_year(year: Option<i32>) -> Result<i32> {
    match year {
        Some(year) => Ok(year),
        None => {
            let stdin = std::io::stdin();
            prompt_year(&mut stdin.lock(), &mut std::io::stderr())
        }
    }
}

/// Print `Enter year: ` and read one line.
pub fn prompt_year<R: BufRead, W: std::io::Write>(input: &mut R, prompt: &mut W) -> Result<i32> {
    write!(prompt, "Enter year: ")?;
    prompt.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ScraperError::InvalidInput("no year entered".to_string()));
    }
    parse_year(&line)
}

fn build_scraper(series: Series, base_url: Option<&str>) -> Result<SeriesScraper> {
    let patterns = Arc::new(PatternTable::standard()?);
    let scraper = SeriesScraper::new(series, patterns)?;
    Ok(match base_url {
        Some(url) => scraper.with_base_url(url),
        None => scraper,
    })
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(message);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Execute the export command.
fn export_command(
    series: Series,
    year: i32,
    output: Option<&Path>,
    prefix: Option<&str>,
    base_url: Option<&str>,
) -> Result<()> {
    let scraper = build_scraper(series, base_url)?;
    let output_dir = output.unwrap_or_else(|| Path::new("."));
    let prefix = prefix.unwrap_or_else(|| series.csv_prefix());

    println!(
        "{} {} season {}",
        style("Exporting").bold(),
        style(series).cyan(),
        style(year).green()
    );
    println!();

    let pb = spinner(format!("Downloading {series} {year}..."));
    let exported = match export_season(&scraper, year, output_dir, prefix) {
        Ok(files) => files,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };
    pb.finish_and_clear();

    for file in &exported {
        println!(
            "  {:<16} {:>4} rows  {}",
            file.kind.slug(),
            file.rows,
            style(file.path.display()).dim()
        );
    }
    for kind in EntityKind::ALL {
        if !exported.iter().any(|f| f.kind == kind) {
            println!("  {:<16} {}", kind.slug(), style("not available").yellow());
        }
    }

    println!();
    println!(
        "{} {} files",
        style("Saved").green().bold(),
        exported.len()
    );

    Ok(())
}

/// Execute the show command.
fn show_command(series: Series, kind: EntityKind, year: i32, base_url: Option<&str>) -> Result<()> {
    let scraper = build_scraper(series, base_url)?;
    scraper.validate(kind, year)?;

    let pb = spinner(format!("Downloading {series} {kind} {year}..."));
    let records = match scraper.fetch(kind, year) {
        Ok(records) => records,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };
    pb.finish_and_clear();

    let title = format!("{series} {year} Season - {kind}");
    print!("{}", render_table(&title, &records));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export_defaults() {
        let cli = Cli::parse_from(["formula-scraper", "export"]);

        let Commands::Export {
            series,
            year,
            output,
            prefix,
            base_url,
        } = cli.command
        else {
            panic!("expected export command");
        };
        assert_eq!(series, Series::Formula1);
        assert!(year.is_none());
        assert!(output.is_none());
        assert!(prefix.is_none());
        assert!(base_url.is_none());
    }

    #[test]
    fn test_cli_parse_export_with_options() {
        let cli = Cli::parse_from([
            "formula-scraper",
            "export",
            "--series",
            "f2",
            "--year",
            "2023",
            "--prefix",
            "f2_",
        ]);

        let Commands::Export {
            series,
            year,
            prefix,
            ..
        } = cli.command
        else {
            panic!("expected export command");
        };
        assert_eq!(series, Series::Formula2);
        assert_eq!(year, Some(2023));
        assert_eq!(prefix, Some("f2_".to_string()));
    }

    #[test]
    fn test_cli_parse_show() {
        let cli = Cli::parse_from([
            "formula-scraper",
            "show",
            "fastest-laps",
            "-y",
            "2023",
        ]);

        let Commands::Show {
            kind, series, year, ..
        } = cli.command
        else {
            panic!("expected show command");
        };
        assert_eq!(kind, EntityKind::FastestLap);
        assert_eq!(series, Series::Formula1);
        assert_eq!(year, Some(2023));
    }

    #[test]
    fn test_cli_rejects_unknown_series() {
        let result = Cli::try_parse_from(["formula-scraper", "export", "--series", "indycar"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_prompt_year() {
        let mut input = std::io::Cursor::new("2023\n");
        let mut prompt = Vec::new();
        assert_eq!(prompt_year(&mut input, &mut prompt).unwrap(), 2023);
        assert_eq!(String::from_utf8(prompt).unwrap(), "Enter year: ");
    }

    #[test]
    fn test_prompt_year_empty_input() {
        let mut input = std::io::Cursor::new("");
        let mut prompt = Vec::new();
        let err = prompt_year(&mut input, &mut prompt).unwrap_err();
        assert!(err.is_input_error());
    }
}
