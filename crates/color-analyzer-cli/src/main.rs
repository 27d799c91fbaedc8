use std::fs;
use std::io;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::thread;

use chrono::Local;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;

use color_analyzer_core::config::Config;
use color_analyzer_core::{
    analyze, analyze_parallel, build, collect_dir, collect_file, read_sources, AnalyzerError,
    ChangeDetector, Registry, Report, Result,
};

mod args;
use args::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    if cli.init_config {
        return match Config::init(Path::new(".")) {
            Ok(path) => {
                println!("{} {}", "Created:".green(), path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{} {}", "[ERROR]".red().bold(), e);
                ExitCode::from(e.exit_code() as u8)
            }
        };
    }

    if !cli.has_inputs() {
        Cli::command().print_help().ok();
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_tracing(cli: &Cli) {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let files = collect_files(cli, &config)?;
    let pretty = cli.pretty || config.output.pretty;

    if cli.watch {
        return watch(cli, &config, &files, pretty);
    }

    let report = analyze_files(&files, cli.jobs, cli.quiet);
    write_report(&report, cli.output.as_deref(), pretty)?;

    if let Some(output) = &cli.output {
        println!(
            "{} Color analysis saved to {}",
            "[OK]".green().bold(),
            output.display()
        );
    }
    Ok(())
}

/// Explicit --config must exist; otherwise ./.color-analyzer.toml or defaults
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_file(path),
        None => Config::load(Path::new(".")),
    }
}

fn collect_files(cli: &Cli, config: &Config) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    if let Some(input) = &cli.input {
        files.push(collect_file(input)?);
    }

    if let Some(dir) = &cli.dir {
        files.extend(collect_dir(dir, &config.scan)?);
    }

    if files.is_empty() {
        return Err(AnalyzerError::NoFiles);
    }

    Ok(files)
}

fn analyze_files(files: &[PathBuf], jobs: Option<NonZeroUsize>, quiet: bool) -> Report {
    let sources = read_sources(files);
    let registry = match jobs {
        Some(workers) if workers.get() > 1 => analyze_parallel(&sources, workers),
        _ => analyze(sources),
    };

    if !quiet {
        print_exclusions(&registry);
    }
    build(&registry)
}

fn print_exclusions(registry: &Registry) {
    for excluded in registry.excluded() {
        eprintln!(
            "{} Skipped {}: {}",
            "[WARN]".yellow().bold(),
            excluded.location,
            excluded.reason
        );
    }
}

fn write_report(report: &Report, output: Option<&Path>, pretty: bool) -> Result<()> {
    let json = report.to_json(pretty)?;
    match output {
        Some(path) => fs::write(path, json)?,
        None => println!("{}", json),
    }
    Ok(())
}

/// Re-run the full analysis whenever a watched file changes. Runs until
/// interrupted; only returns on an output error.
fn watch(cli: &Cli, config: &Config, files: &[PathBuf], pretty: bool) -> Result<()> {
    let mut detector = ChangeDetector::new(files);
    let interval = config.watch.interval();

    eprintln!(
        "{} Watching {} files for changes...",
        "[WATCH]".cyan().bold(),
        detector.files().count()
    );

    let report = analyze_files(files, cli.jobs, cli.quiet);
    write_report(&report, cli.output.as_deref(), pretty)?;

    loop {
        thread::sleep(interval);
        if !detector.poll() {
            continue;
        }

        let report = analyze_files(files, cli.jobs, cli.quiet);
        write_report(&report, cli.output.as_deref(), pretty)?;

        let now = Local::now().format("%H:%M:%S");
        match &cli.output {
            Some(output) => println!(
                "{} [{}] Updated color analysis to {}",
                "[OK]".green().bold(),
                now,
                output.display()
            ),
            None => eprintln!("{} [{}] Updated color analysis", "[OK]".green().bold(), now),
        }
    }
}
