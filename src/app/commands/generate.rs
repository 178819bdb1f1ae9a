use std::path::PathBuf;

use tracing::debug;

use super::{interactive, write_config};
use crate::app::AppContext;
use crate::app::prompts::ask_yes_no;
use crate::domain::{AppError, answers_file_name, config_file_name, render};
use crate::ports::{ConfigStore, Console};
use crate::services::{AnswerFormat, encode_answers};

/// Result of an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Config written; `answers` is set when the answers were saved too.
    Written { config: PathBuf, answers: Option<PathBuf> },
    /// The user reviewed the document and chose not to write it.
    Declined,
    /// The user picked Exit from the menu.
    Exited,
}

/// Run the interactive session: ask, render, confirm, write.
pub fn execute<C, S>(ctx: &AppContext<C, S>) -> Result<GenerateOutcome, AppError>
where
    C: Console,
    S: ConfigStore,
{
    ctx.store().ensure_writable()?;

    let Some(answer) = interactive::collect_answer(ctx.console())? else {
        return Ok(GenerateOutcome::Exited);
    };

    let rendered = render(&answer);
    debug!(name = %rendered.name, bytes = rendered.document.len(), "rendered config");
    ctx.console().show_document(&rendered.document);

    let target = ctx.store().path_for(&config_file_name(&rendered.name));
    if !ask_yes_no(ctx.console(), &format!("Write this config to {}?", target.display()), true)? {
        ctx.console().say("Nothing written.");
        return Ok(GenerateOutcome::Declined);
    }
    let config = write_config(ctx, &answer, &rendered)?;

    let answers_name = answers_file_name(&rendered.name);
    let save_prompt = format!("Save answers to {answers_name} to regenerate this config later?");
    let answers = if ask_yes_no(ctx.console(), &save_prompt, false)? {
        let text = encode_answers(&answer, AnswerFormat::Json)?;
        let path = ctx.store().write(&answers_name, &text)?;
        ctx.console().success(&format!("Answers saved to {}", path.display()));
        Some(path)
    } else {
        None
    };

    Ok(GenerateOutcome::Written { config, answers })
}
