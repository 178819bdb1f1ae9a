//! CLI Adapter.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::app::SessionConfig;
use crate::app::api::{self, GenerateOutcome};
use crate::domain::AppError;

#[derive(Parser, Debug)]
#[command(name = "nginx-auto-config")]
#[command(version, disable_version_flag = true)]
#[command(
    about = "Create nginx virtual server configurations interactively from a set of presets",
    long_about = "Create nginx virtual server configurations interactively from a set of presets.\n\n\
                  Run without arguments to answer the questions, or pass a saved answers file \
                  (JSON, or TOML with a .toml extension) to regenerate a config without prompting."
)]
struct Cli {
    /// Saved answers file to regenerate a config from
    #[arg(value_name = "ANSWERS_FILE")]
    answers: Option<PathBuf>,

    /// Directory to write generated files into (defaults to the current directory)
    #[arg(short = 'o', long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Print debug diagnostics to stderr
    #[arg(long)]
    verbose: bool,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

/// Entry point for the CLI.
pub fn run() {
    let code = run_with_args(std::env::args_os());
    if code != 0 {
        std::process::exit(code);
    }
}

fn run_with_args<I>(args: I) -> i32
where
    I: IntoIterator<Item = OsString>,
{
    let cli = match Cli::try_parse_from(normalize_args(args)) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // Help and version are requested output, everything else is a usage error.
            return if err.use_stderr() { 1 } else { 0 };
        }
    };

    match execute(cli) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn execute(cli: Cli) -> Result<(), AppError> {
    let config = SessionConfig::resolve(cli.output_dir, cli.no_color, cli.verbose)?;
    init_logging(&config);

    match cli.answers {
        Some(path) => {
            api::replay(&config, &path)?;
        }
        None => {
            if let GenerateOutcome::Written { answers: Some(path), .. } = api::generate(&config)? {
                tracing::debug!(path = %path.display(), "answers saved");
            }
        }
    }
    Ok(())
}

fn init_logging(config: &SessionConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(config.log_filter())
        .with_writer(std::io::stderr)
        .with_ansi(config.color)
        .with_target(false)
        .try_init();
}

/// Accept the single-dash long forms `-help` and `-version`.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-help") => OsString::from("--help"),
            Some("-version") => OsString::from("--version"),
            _ => arg,
        })
        .collect()
}
