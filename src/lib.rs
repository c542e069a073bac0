pub mod config;
pub mod console;
pub mod constants;
pub mod core;
pub mod prompt;
pub mod utils;
pub mod wizard;
