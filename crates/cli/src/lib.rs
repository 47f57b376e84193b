pub mod app;
pub mod cli;
pub mod clipboard;
pub mod error;
pub mod logging;
pub mod report;
