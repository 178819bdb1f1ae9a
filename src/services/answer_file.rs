//! Persisted answers, used to regenerate a config without prompting.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, Answer};

/// Encoding of an answers file, chosen from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFormat {
    Json,
    Toml,
}

impl AnswerFormat {
    /// `.toml` files are TOML; everything else is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => AnswerFormat::Toml,
            _ => AnswerFormat::Json,
        }
    }
}

pub fn encode_answers(answer: &Answer, format: AnswerFormat) -> Result<String, AppError> {
    let encoded = match format {
        AnswerFormat::Json => serde_json::to_string_pretty(answer).map_err(|e| e.to_string()),
        AnswerFormat::Toml => toml::to_string(answer).map_err(|e| e.to_string()),
    };
    let mut text = encoded
        .map_err(|details| AppError::invalid_answers(format!("cannot encode answers: {details}")))?;
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

/// Decode, validate and normalize answers. `origin` names the source in errors.
pub fn decode_answers(text: &str, format: AnswerFormat, origin: &Path) -> Result<Answer, AppError> {
    let answer: Answer = match format {
        AnswerFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        AnswerFormat::Toml => toml::from_str(text).map_err(|e| e.to_string()),
    }
    .map_err(|details| AppError::answers_file(origin, details))?;

    let answer = answer.normalized();
    answer.validate()?;
    Ok(answer)
}

pub fn load_answers(path: &Path) -> Result<Answer, AppError> {
    let text = fs::read_to_string(path)
        .map_err(|err| AppError::answers_file(path, err.to_string()))?;
    let answer = decode_answers(&text, AnswerFormat::from_path(path), path)?;
    debug!(path = %path.display(), preset = ?answer.preset, "loaded answers");
    Ok(answer)
}
