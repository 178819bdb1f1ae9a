//! Question loops over a [`Console`].
//!
//! Each helper asks until the typed line satisfies its parser. Rejections are
//! reported through the console and never surface as errors; only a closed
//! input or a broken prompt backend ends a loop early.

use std::path::PathBuf;

use crate::domain::AppError;
use crate::domain::input::{self, InputRules, PathCheck};
use crate::ports::Console;

/// Ask until the answer satisfies `rules`.
pub fn require_non_empty<C: Console>(
    console: &C,
    prompt: &str,
    rules: InputRules,
) -> Result<String, AppError> {
    loop {
        let raw = console.read_line(prompt)?;
        match input::require_non_empty(&raw, rules) {
            Ok(accepted) => {
                if accepted.truncated {
                    console.warn("More than one word entered, only the first word will be used");
                }
                return Ok(accepted.value);
            }
            Err(err) => console.error(&err.to_string()),
        }
    }
}

pub fn ask_yes_no<C: Console>(console: &C, prompt: &str, default: bool) -> Result<bool, AppError> {
    let hint = if default { "Y/n" } else { "y/N" };
    let raw = require_non_empty(console, &format!("{prompt} ({hint})"), InputRules::OPTIONAL_WORD)?;
    Ok(input::parse_yes_no(&raw, default))
}

pub fn ask_integer<C: Console>(console: &C, prompt: &str) -> Result<i64, AppError> {
    loop {
        let raw = require_non_empty(console, prompt, InputRules::REQUIRED_WORD)?;
        match input::parse_integer(&raw) {
            Ok(number) => return Ok(number),
            Err(err) => console.error(&err.to_string()),
        }
    }
}

/// Ask for a listen port. A blank answer takes `default` when there is one.
pub fn ask_port<C: Console>(
    console: &C,
    prompt: &str,
    default: Option<u16>,
) -> Result<u16, AppError> {
    let rules = InputRules { allow_empty: default.is_some(), single_worded: true };
    loop {
        let raw = require_non_empty(console, prompt, rules)?;
        if raw.is_empty()
            && let Some(port) = default
        {
            return Ok(port);
        }
        match input::parse_port(&raw) {
            Ok(port) => return Ok(port),
            Err(err) => console.error(&err.to_string()),
        }
    }
}

/// A document root as accepted from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootPath {
    /// Verified existing directory, absolute.
    Existing(PathBuf),
    /// Path the user chose to keep although it is not an existing directory.
    Unverified(String),
}

impl RootPath {
    pub fn into_string(self) -> String {
        match self {
            RootPath::Existing(path) => path.to_string_lossy().into_owned(),
            RootPath::Unverified(raw) => raw,
        }
    }
}

/// What to do with a root path that failed the directory check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathDecision {
    Keep,
    Reenter,
}

/// Ask for a document root, offering to keep paths that do not exist yet.
pub fn resolve_root<C: Console>(console: &C) -> Result<RootPath, AppError> {
    loop {
        let raw = require_non_empty(console, "Root path", InputRules::REQUIRED)?;
        match input::inspect_path(&raw) {
            PathCheck::Directory(path) => return Ok(RootPath::Existing(path)),
            PathCheck::NotADirectory => console.error(&format!("'{raw}' is not a directory")),
            PathCheck::Missing => console.error(&format!("Directory '{raw}' is non existent")),
        }
        match ask_path_decision(console)? {
            PathDecision::Keep => return Ok(RootPath::Unverified(raw)),
            PathDecision::Reenter => continue,
        }
    }
}

fn ask_path_decision<C: Console>(console: &C) -> Result<PathDecision, AppError> {
    let keep = ask_yes_no(console, "Use this path anyway (e.g. it will be created later)?", false)?;
    Ok(if keep { PathDecision::Keep } else { PathDecision::Reenter })
}
