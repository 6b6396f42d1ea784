//! CLI entry point for linesift

use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use linesift::{
    ConsoleSink, CriteriaSet, Error, LoaderConfig, OutputConfig, OutputFormat, Session,
    TreeLoader, logging, print_json,
};
use tracing::debug;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Report format
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Format {
    /// Matching-line totals per file and directory
    #[default]
    Count,
    /// Matching lines with their line numbers
    Show,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Count => OutputFormat::Count,
            Format::Show => OutputFormat::Show,
        }
    }
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "linesift")]
#[command(about = "Count or show the lines of a directory tree that match include/exclude rules")]
#[command(version)]
struct Args {
    /// Directory (or file) to search
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Rule as "<+|-> <t|r> <text>" (can be used multiple times)
    /// e.g. -r "+ t TODO" -r "- r ^\s*//"
    #[arg(short = 'r', long = "rule", value_name = "RULE", allow_hyphen_values = true)]
    rules: Vec<String>,

    /// Read rules from a file, one per line (applied before --rule values)
    #[arg(long = "rules-file", value_name = "FILE")]
    rules_file: Option<PathBuf>,

    /// Report format
    #[arg(short = 'f', long = "format", default_value = "count")]
    format: Format,

    /// Output the report in JSON format
    #[arg(long = "json", conflicts_with = "interactive")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Leave out entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Start the interactive menu even when rules are given
    #[arg(short = 'i', long = "interactive")]
    interactive: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(&args) {
        match e {
            Error::InvalidPath { .. } => eprintln!(
                "linesift: cannot access '{}': No such file or directory",
                args.path.display()
            ),
            other => eprintln!("linesift: {}", other),
        }
        process::exit(1);
    }
}

fn run(args: &Args) -> linesift::Result<()> {
    let rules = collect_rules(args)?;

    let loader = TreeLoader::new(LoaderConfig::with_ignore_patterns(args.ignore.clone()));
    let root = loader.load(&args.path)?;

    let format = OutputFormat::from(args.format);
    let interactive =
        args.interactive || (rules.is_none() && !args.json && io::stdin().is_terminal());
    let criteria = CriteriaSet::parse(rules.unwrap_or_default());
    debug!(criteria = %criteria, "criteria parsed");

    if interactive {
        let mut session = Session::new(&root)
            .with_criteria(criteria)
            .with_format(format);
        session.run(io::stdin().lock(), io::stdout().lock())?;
        return Ok(());
    }

    if args.json {
        return print_json(&format.report(&root, &criteria));
    }

    let config = OutputConfig {
        use_color: should_use_color(args.color),
    };
    let mut sink = ConsoleSink::stdout(&config);
    format.generate(&root, &criteria, &mut sink)?;
    Ok(())
}

/// Gather rule lines from `--rules-file` and `--rule`; `None` when neither was given.
fn collect_rules(args: &Args) -> linesift::Result<Option<Vec<String>>> {
    if args.rules.is_empty() && args.rules_file.is_none() {
        return Ok(None);
    }

    let mut rules = Vec::new();
    if let Some(path) = &args.rules_file {
        let content = fs::read_to_string(path).map_err(|source| Error::UnreadableFile {
            path: path.clone(),
            source,
        })?;
        rules.extend(content.lines().map(str::to_string));
    }
    rules.extend(args.rules.iter().cloned());
    Ok(Some(rules))
}
