use crate::report::SummaryFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "merged.csv";

#[derive(Debug, Parser)]
#[command(name = "quiz-app")]
#[command(about = "Multiple-choice quiz in the terminal, loaded from a CSV question bank")]
#[command(version)]
pub struct Cli {
    /// CSV file with Question, Option A-D, Right Answer and Explanation columns
    #[arg(default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Reference document (e.g. a PDF) that can be opened with `p`
    #[arg(long)]
    pub reference: Option<PathBuf>,

    /// Append debug log lines to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Format of the score summary printed on exit
    #[arg(long, value_enum, default_value = "human")]
    pub summary: SummaryFormatArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormatArg {
    Human,
    Json,
}

impl From<SummaryFormatArg> for SummaryFormat {
    fn from(arg: SummaryFormatArg) -> Self {
        match arg {
            SummaryFormatArg::Human => SummaryFormat::Human,
            SummaryFormatArg::Json => SummaryFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["quiz-app"]).unwrap();
        assert_eq!(cli.data, PathBuf::from(DEFAULT_DATA_FILE));
        assert!(cli.reference.is_none());
        assert!(cli.log_file.is_none());
        assert_eq!(SummaryFormat::from(cli.summary), SummaryFormat::Human);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "quiz-app",
            "bank.csv",
            "--reference",
            "/docs/guide.pdf",
            "--log-file",
            "quiz.log",
            "--summary",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.data, PathBuf::from("bank.csv"));
        assert_eq!(cli.reference, Some(PathBuf::from("/docs/guide.pdf")));
        assert_eq!(cli.log_file, Some(PathBuf::from("quiz.log")));
        assert_eq!(cli.summary, SummaryFormatArg::Json);
    }

    #[test]
    fn test_rejects_unknown_summary_format() {
        assert!(Cli::try_parse_from(["quiz-app", "--summary", "xml"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
