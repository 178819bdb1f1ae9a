mod memory_config_store;
mod scripted_console;

pub use memory_config_store::MemoryConfigStore;
pub use scripted_console::ScriptedConsole;
