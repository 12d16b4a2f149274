pub mod commands;
pub mod render;

pub use commands::{Cli, Commands, LogFormat, init_tracing, run};
