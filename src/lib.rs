//! nginx-auto-config: generate nginx virtual server configurations from presets.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::SessionConfig;
pub use app::api::{GenerateOutcome, generate, replay};
pub use domain::{
    AppError, Answer, Preset, RenderedConfig, answers_file_name, config_file_name, render,
};
pub use services::{AnswerFormat, decode_answers, encode_answers, load_answers};
