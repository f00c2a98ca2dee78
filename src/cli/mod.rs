pub mod commands;
pub mod invoke;
pub mod serve;

pub use commands::{Cli, Commands, InvokeArgs};
