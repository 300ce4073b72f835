pub mod app;
pub mod cli;
pub mod config;
pub mod message;
pub mod models;
pub mod paths;
pub mod time_display;
pub mod tokens;
pub mod util;
