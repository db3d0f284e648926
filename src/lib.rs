pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod gcloud;
pub mod logging;
pub mod profile;
pub mod tui;
