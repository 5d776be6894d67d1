use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use pymoddeps::core::{AnalyzerOptions, DependencyAnalyzer, QualifiedName};
use pymoddeps::formatters::{GraphFormatter, JsonCompactFormatter, TextFormatter};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "pymoddeps",
    author = "pymoddeps developers",
    about = "Generates a list of module dependencies of Python source files",
    disable_version_flag = true
)]
struct Cli {
    /// Directory containing Python source files, just like a PYTHONPATH entry
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Imports of modules in this package are reported as dependencies, in
    /// addition to those in the given PATH dir
    #[arg(short, long = "target", value_name = "PACKAGE", action = ArgAction::Append)]
    targets: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log progress to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Show program version and exit
    #[arg(long)]
    version: bool,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum OutputFormat {
    Text,
    Json,
}

/// Bad invocation; reported as `<prog>: <message>`.
struct UserError(String);

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    init_tracing(cli.verbose);

    let options = match validate(&cli) {
        Ok(options) => options,
        Err(UserError(message)) => return exit_error(&message),
    };

    match run(&cli, options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => exit_error(&format!("{err:#}")),
    }
}

fn validate(cli: &Cli) -> Result<(PathBuf, AnalyzerOptions), UserError> {
    let path = match &cli.path {
        None => return Err(UserError("Missing PATH".to_string())),
        Some(path) if !path.is_dir() => {
            return Err(UserError(format!(
                "Not an existing dir: {}",
                path.display()
            )))
        }
        Some(path) => path.clone(),
    };

    let extra_targets = cli
        .targets
        .iter()
        .map(|t| QualifiedName::parse(t).map_err(|err| UserError(err.to_string())))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((path, AnalyzerOptions::default().with_extra_targets(extra_targets)))
}

fn run(cli: &Cli, (path, options): (PathBuf, AnalyzerOptions)) -> Result<()> {
    let analyzer = DependencyAnalyzer::new(options);
    let graph = analyzer.analyze(&path)?;

    let formatter: Box<dyn GraphFormatter> = match cli.format {
        OutputFormat::Text => Box::new(TextFormatter::new()),
        OutputFormat::Json => Box::new(JsonCompactFormatter::new()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    formatter.write_graph(&graph, &mut out)?;
    Ok(())
}

fn exit_error(message: &str) -> ExitCode {
    let program = std::env::args().next().unwrap_or_else(|| "pymoddeps".to_string());
    eprintln!("{program}: {message}");
    ExitCode::FAILURE
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
