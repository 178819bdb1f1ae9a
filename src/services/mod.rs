pub mod answer_file;
mod filesystem_store;
mod terminal_console;

pub use answer_file::{AnswerFormat, decode_answers, encode_answers, load_answers};
pub use filesystem_store::FilesystemConfigStore;
pub use terminal_console::TerminalConsole;
