use std::path::{Path, PathBuf};

use super::write_config;
use crate::app::AppContext;
use crate::domain::{AppError, render};
use crate::ports::{ConfigStore, Console};
use crate::services::load_answers;

/// Regenerate a config from a saved answers file without prompting.
pub fn execute<C, S>(ctx: &AppContext<C, S>, answers_path: &Path) -> Result<PathBuf, AppError>
where
    C: Console,
    S: ConfigStore,
{
    let answer = load_answers(answers_path)?;
    let rendered = render(&answer);
    write_config(ctx, &answer, &rendered)
}
