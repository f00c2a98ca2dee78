pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod notify;
pub mod pipeline;
pub mod registry;
pub mod reporting;
