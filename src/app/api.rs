//! API Facade for the application.
//!
//! Glues context creation to command execution for callers that do not need
//! to supply their own console or store.

use std::path::{Path, PathBuf};

use crate::app::commands::{generate, replay};
use crate::app::{AppContext, SessionConfig};
use crate::services::{FilesystemConfigStore, TerminalConsole};

pub use crate::app::commands::generate::GenerateOutcome;
pub use crate::domain::AppError;

/// Create an `AppContext` bound to the terminal and the configured output directory.
fn create_context(
    config: &SessionConfig,
) -> AppContext<TerminalConsole, FilesystemConfigStore> {
    let console = TerminalConsole::new(config.color);
    let store = FilesystemConfigStore::new(config.output_dir.clone());
    AppContext::new(console, store)
}

/// Run the interactive question session and write the resulting config.
pub fn generate(config: &SessionConfig) -> Result<GenerateOutcome, AppError> {
    let ctx = create_context(config);
    generate::execute(&ctx)
}

/// Regenerate a config from a saved answers file.
pub fn replay(config: &SessionConfig, answers_path: &Path) -> Result<PathBuf, AppError> {
    let ctx = create_context(config);
    replay::execute(&ctx, answers_path)
}
