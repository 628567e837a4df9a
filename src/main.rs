//! toy-robot - command line driver
//!
//! Usage:
//!   toy-robot commands.txt
//!   toy-robot --config robot.toml --report-file reports.log commands.txt
//!   toy-robot --demo
//!   toy-robot < commands.txt
//!
//! Set `RUST_LOG=debug` to trace every dispatched command.

use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use toy_robot::{
    AppConfig, CommandInterpreter, DEMO_COMMANDS, Outcome, Result, Robot, RunSummary,
};

/// Toy robot simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Command file, one command per line (reads stdin when omitted)
    commands: Option<PathBuf>,

    /// Configuration file path (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Table length (cells along x), overrides the config file
    #[arg(long)]
    length: Option<i32>,

    /// Table width (cells along y), overrides the config file
    #[arg(long)]
    width: Option<i32>,

    /// Append reports to this file instead of stdout
    #[arg(short, long)]
    report_file: Option<PathBuf>,

    /// Run the built-in demonstration commands
    #[arg(long, conflicts_with = "commands")]
    demo: bool,

    /// Don't print per-command success/failure lines
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match AppConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => AppConfig::default(),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    if let Some(length) = args.length {
        config.table.length = length;
    }
    if let Some(width) = args.width {
        config.table.width = width;
    }
    if args.report_file.is_some() {
        config.report.file = args.report_file.clone();
    }

    match run(&args, &config) {
        Ok(summary) => {
            log::info!(
                "Processed {} commands: {} succeeded, {} failed, {} unsupported",
                summary.total(),
                summary.succeeded,
                summary.failed,
                summary.unsupported
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: &AppConfig) -> Result<RunSummary> {
    let table = config.table.build()?;
    log::info!("Table: {}x{}", table.length(), table.width());
    if let Some(path) = &config.report.file {
        log::info!("Reports: {}", path.display());
    }

    let robot = Robot::with_sink(&table, config.report.sink());
    let mut interpreter = CommandInterpreter::new(robot);
    let quiet = args.quiet;
    let print = |_: &str, outcome: &Outcome| {
        if !quiet {
            println!("{outcome}");
        }
    };

    if args.demo {
        interpreter.run_lines(DEMO_COMMANDS.iter().copied(), print)
    } else if let Some(path) = &args.commands {
        interpreter.run_file(path, print)
    } else {
        interpreter.run_reader(io::stdin().lock(), print)
    }
}
