//! Command-line front end
//!
//! Usage: pdf-finder [OPTIONS] <PDF> <TERM>

use clap::{ArgAction, Parser, ValueEnum};
use std::process::ExitCode;

use crate::commands::{export_results, perform_search};
use crate::models::TermSyntax;
use crate::report::{PaperSize, ReportLayout};
use crate::state::SearchSession;

#[derive(Parser, Debug)]
#[command(name = "pdf-finder", version, about = "Find a keyword in a PDF and list the matching lines")]
pub struct Cli {
    /// PDF file to search
    pub pdf: String,

    /// Term to look for. Treated as a regular expression when matching case-insensitively
    pub term: String,

    /// Match case exactly (literal substring search)
    #[arg(short = 'c', long)]
    pub case_sensitive: bool,

    /// Always treat the term as literal text
    #[arg(long, conflicts_with = "regex")]
    pub literal: bool,

    /// Always treat the term as a regular expression
    #[arg(long)]
    pub regex: bool,

    /// Export the matches as a PDF report to this path
    #[arg(short = 'o', long, value_name = "PATH")]
    pub report: Option<String>,

    /// Paper size for the report
    #[arg(long, value_enum, default_value_t = Paper::Letter)]
    pub paper: Paper,

    /// Print the results as JSON
    #[arg(long)]
    pub json: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paper {
    Letter,
    A4,
}

impl From<Paper> for PaperSize {
    fn from(paper: Paper) -> Self {
        match paper {
            Paper::Letter => PaperSize::Letter,
            Paper::A4 => PaperSize::A4,
        }
    }
}

impl Cli {
    pub fn syntax(&self) -> TermSyntax {
        if self.literal {
            TermSyntax::Literal
        } else if self.regex {
            TermSyntax::Regex
        } else {
            TermSyntax::Auto
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

/// Run one search (and optional export) for the parsed arguments
pub fn run(cli: Cli) -> ExitCode {
    let mut session = SearchSession::with_layout(ReportLayout::for_paper(cli.paper.into()));

    let summary = match perform_search(&mut session, &cli.pdf, &cli.term, cli.case_sensitive, cli.syntax()) {
        Ok(summary) => summary,
        Err(e) if e.is_input_error() => {
            eprintln!("Input Error: {}", e);
            return ExitCode::from(2);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", summary.listing);
    }

    if let Some(output) = cli.report.as_deref() {
        if !session.can_export() {
            eprintln!("No results to export; report not written.");
            return ExitCode::SUCCESS;
        }
        match export_results(&session, output) {
            Ok(path) => eprintln!("Report saved to {}", path),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write_fixture_pdf;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["pdf-finder", "doc.pdf", "needle"]).unwrap();
        assert_eq!(cli.pdf, "doc.pdf");
        assert_eq!(cli.term, "needle");
        assert!(!cli.case_sensitive);
        assert_eq!(cli.syntax(), TermSyntax::Auto);
        assert_eq!(cli.paper, Paper::Letter);
        assert_eq!(cli.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "pdf-finder", "doc.pdf", "needle", "-c", "--literal", "-o", "out.pdf", "--paper", "a4", "-vv",
        ])
        .unwrap();
        assert!(cli.case_sensitive);
        assert_eq!(cli.syntax(), TermSyntax::Literal);
        assert_eq!(cli.report.as_deref(), Some("out.pdf"));
        assert_eq!(PaperSize::from(cli.paper), PaperSize::A4);
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_literal_and_regex_conflict() {
        assert!(Cli::try_parse_from(["pdf-finder", "doc.pdf", "x", "--literal", "--regex"]).is_err());
    }

    #[test]
    fn test_run_with_empty_term_is_input_error() {
        let cli = Cli::try_parse_from(["pdf-finder", "doc.pdf", ""]).unwrap();
        assert_eq!(run(cli), ExitCode::from(2));
    }

    #[test]
    fn test_run_with_invalid_pattern_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture_pdf(dir.path(), "doc.pdf", &[&["f(x) = 2x"]]);
        let cli = Cli::try_parse_from(["pdf-finder", path.to_str().unwrap(), "f(x"]).unwrap();
        assert_eq!(run(cli), ExitCode::from(2));
    }

    #[test]
    fn test_run_exit_codes() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture_pdf(dir.path(), "doc.pdf", &[&["f(x) = 2x"]]);
        let path = path.to_str().unwrap();

        // Literal mode takes the parenthesis as text
        let cli = Cli::try_parse_from(["pdf-finder", path, "f(x", "--literal"]).unwrap();
        assert_eq!(run(cli), ExitCode::SUCCESS);

        let cli = Cli::try_parse_from(["pdf-finder", path, "absent"]).unwrap();
        assert_eq!(run(cli), ExitCode::SUCCESS);

        let missing = dir.path().join("missing.pdf");
        let cli = Cli::try_parse_from(["pdf-finder", missing.to_str().unwrap(), "x"]).unwrap();
        assert_eq!(run(cli), ExitCode::FAILURE);
    }
}
