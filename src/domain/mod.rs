pub mod answer;
pub mod error;
pub mod input;
pub mod preset;
pub mod render;

pub use answer::{Answer, CATCH_ALL_NAME, CATCH_ALL_SERVER_NAME, DEFAULT_MAX_CACHE_AGE};
pub use error::AppError;
pub use input::{Accepted, InputError, InputRules, PathCheck};
pub use preset::Preset;
pub use render::{RenderedConfig, render};

/// Suffix appended to the rendered name to form the config file name.
pub const CONFIG_FILE_SUFFIX: &str = "nginxAutoConfig.conf";

/// Suffix of the answers file saved next to a generated config.
pub const ANSWERS_FILE_SUFFIX: &str = "nginxAutoConfig.json";

/// File name of the generated configuration for `name`.
pub fn config_file_name(name: &str) -> String {
    format!("{name}.{CONFIG_FILE_SUFFIX}")
}

/// File name of the saved answers for `name`.
pub fn answers_file_name(name: &str) -> String {
    format!("{name}.{ANSWERS_FILE_SUFFIX}")
}
