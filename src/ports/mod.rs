mod config_store;
mod console;

pub use config_store::ConfigStore;
pub use console::Console;
