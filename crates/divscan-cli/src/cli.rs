//! CLI argument definitions for the dividend dashboard.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use divscan_model::{Category, SortField};

#[derive(Parser)]
#[command(
    name = "divscan",
    version,
    about = "Dividend yield dashboard - browse high-yield stocks by industry",
    long_about = "Browse per-industry dividend datasets.\n\n\
                  Only stocks with a total yield of at least 5% are shown; bond ETFs\n\
                  and stocks without a cash dividend are left out of the tables."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Configuration file (default: ./divscan.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Where the per-industry CSV files come from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Directory holding one `<industry>.csv` per category (default: ./data).
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        conflicts_with = "base_url",
        global = true
    )]
    pub data_dir: Option<PathBuf>,

    /// Base URL serving the category files.
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every category with the number of stored high-yield stocks.
    Categories,

    /// Show the qualifying stocks of one category.
    Show(ShowArgs),

    /// Write the cross-industry high-yield report as CSV.
    Export(ExportArgs),

    /// Cross-reference a shareholder-meeting gift list with the high-yield report.
    Gifts(GiftArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ShowArgs {
    /// Industry name as published, or ETF (default: ETF).
    #[arg(value_name = "CATEGORY")]
    pub category: Option<Category>,

    /// Column header click; repeat to toggle or chain columns.
    #[arg(long = "sort", value_name = "FIELD")]
    pub sort: Vec<SortField>,

    /// Force ascending order on the final sort column.
    #[arg(long = "ascending")]
    pub ascending: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Output CSV path.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GiftArgs {
    /// Gift list CSV (falls back to `gift_file` in the config).
    #[arg(long = "gift-file", value_name = "PATH")]
    pub gift_file: Option<PathBuf>,

    /// Output CSV path.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn show_parses_category_and_repeated_sorts() {
        let cli = Cli::try_parse_from([
            "divscan", "show", "航運業", "--sort", "price", "--sort", "price",
        ])
        .unwrap();
        let Command::Show(args) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(args.category, Some(Category::Shipping));
        assert_eq!(args.sort, vec![SortField::Price, SortField::Price]);
        assert!(!args.ascending);
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!(Cli::try_parse_from(["divscan", "show", "麵包業"]).is_err());
    }

    #[test]
    fn data_dir_and_base_url_conflict() {
        let result = Cli::try_parse_from([
            "divscan",
            "--data-dir",
            "data",
            "--base-url",
            "https://example.invalid",
            "categories",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn source_flags_accepted_after_subcommand() {
        let cli = Cli::try_parse_from(["divscan", "show", "--data-dir", "local", "ETF"]).unwrap();
        assert_eq!(cli.source.data_dir, Some(PathBuf::from("local")));

        let cli = Cli::try_parse_from([
            "divscan",
            "export",
            "--base-url",
            "https://example.invalid/data",
        ])
        .unwrap();
        assert_eq!(
            cli.source.base_url.as_deref(),
            Some("https://example.invalid/data")
        );
    }
}
