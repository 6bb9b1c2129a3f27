//! CLI library components for the dividend dashboard.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod summary;
