use crate::domain::AppError;

/// Port for the interactive terminal.
///
/// Implementations print status lines and hand back one typed line per
/// question. Validation happens in the caller; a console never re-prompts.
pub trait Console {
    /// Show `prompt` and read one line, without its terminator.
    ///
    /// Returns `AppError::InputClosed` when input ends or is interrupted.
    fn read_line(&self, prompt: &str) -> Result<String, AppError>;

    /// Plain informational output.
    fn say(&self, message: &str);

    /// Non-fatal notice (for example a truncated answer).
    fn warn(&self, message: &str);

    /// Rejected input; the caller asks again.
    fn error(&self, message: &str);

    /// Successful completion of a step.
    fn success(&self, message: &str);

    /// Display a generated document for review.
    fn show_document(&self, document: &str);
}
