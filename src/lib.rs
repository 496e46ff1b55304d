pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod wheel;
