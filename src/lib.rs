pub mod cli;
pub mod config;
pub mod github;
pub mod logging;
pub mod platform;
pub mod store;
pub mod ui;
