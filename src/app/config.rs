//! Session configuration threaded through the commands.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "NGINX_AUTO_CONFIG_LOG";

/// Per-invocation settings, resolved once from flags and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Directory generated files are written into.
    pub output_dir: PathBuf,
    /// Whether terminal output may use ANSI colours.
    pub color: bool,
    /// Emit debug diagnostics on stderr.
    pub verbose: bool,
}

impl SessionConfig {
    /// Resolve settings from CLI flags, defaulting the output directory to the cwd.
    ///
    /// Colour is also turned off when `NO_COLOR` is set to a non-empty value.
    pub fn resolve(
        output_dir: Option<PathBuf>,
        no_color: bool,
        verbose: bool,
    ) -> Result<Self, AppError> {
        let output_dir = match output_dir {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty());
        Ok(Self { output_dir, color: !no_color && !no_color_env, verbose })
    }

    /// Filter for the diagnostics subscriber.
    pub fn log_filter(&self) -> EnvFilter {
        if self.verbose {
            return EnvFilter::new("debug");
        }
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}
