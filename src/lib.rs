//! Fexplorer - a terminal file browser library
//!
//! This crate provides the directory-listing and filtering engine, the
//! navigation state it drives, and the terminal UI built on top of them.

pub mod async_listing;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod tui;

// Re-export primary types for convenience
pub use config::UserConfig;
pub use domain::{
    classify, list_common_directories, list_directory, Filter, FilterPolicy, Item, ItemKind,
    NavigationState,
};
pub use error::{ExplorerError, Result};
