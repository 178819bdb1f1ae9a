pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
mod context;
pub mod prompts;

pub use config::SessionConfig;
pub use context::AppContext;
