//! CLI commands

pub mod check;
pub mod clean;
pub mod export;
pub mod list;
pub mod new;
pub mod show;
