//! Dividend yield dashboard CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use divscan_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use divscan_cli::commands::{
    DataOrigin, load_session, run_categories, run_export, run_gifts, run_show,
};
use divscan_cli::config::Settings;
use divscan_cli::logging::{LogConfig, LogFormat, init_logging};
use divscan_cli::summary::{
    print_categories, print_export, print_gifts, print_load_failures, print_view,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let settings = Settings::resolve(cli.config.as_deref())?;
    let origin = DataOrigin::resolve(&cli.source, &settings);
    let session = load_session(origin)?;
    print_load_failures(&session.report);

    match &cli.command {
        Command::Categories => print_categories(&run_categories(&session.dataset)),
        Command::Show(args) => {
            let view = run_show(&session.dataset, args);
            print_view(&view, chrono::Local::now().date_naive());
        }
        Command::Export(args) => print_export(&run_export(&session, args, &settings)?),
        Command::Gifts(args) => print_gifts(&run_gifts(&session, args, &settings)?),
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
