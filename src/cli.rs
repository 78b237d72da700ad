// CLI module for argument parsing and configuration

use crate::config::UserConfig;
use crate::domain::{home_directory, Filter, FilterPolicy};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Fexplorer - browse directories from the terminal
///
/// Filter entries by kind and jump to your desktop, documents or downloads.
#[derive(Parser, Debug, Clone)]
#[command(name = "fexplorer")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to start in
    ///
    /// If not specified, uses the configured start directory or your home.
    pub directory: Option<PathBuf>,

    /// Filter active at startup
    #[arg(short = 'f', long = "filter", value_enum)]
    pub filter: Option<FilterArg>,

    /// Keep the active filter when entering another directory
    #[arg(long = "keep-filter", action = ArgAction::SetTrue)]
    pub keep_filter: bool,

    /// Print the listing once and exit instead of starting the browser
    #[arg(short = 'l', long = "list", action = ArgAction::SetTrue)]
    pub list: bool,

    /// Append log output to this file
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

/// Filter options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    /// Everything
    All,
    /// Directories only
    Dirs,
    /// Regular files only
    Files,
    /// Names starting with a dot
    Hidden,
}

impl From<FilterArg> for Filter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => Filter::All,
            FilterArg::Dirs => Filter::Directories,
            FilterArg::Files => Filter::Files,
            FilterArg::Hidden => Filter::Hidden,
        }
    }
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}

/// Configuration for one run: command line over config file over defaults
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub start_directory: PathBuf,
    pub filter: Filter,
    pub policy: FilterPolicy,
    pub show_common_directories: bool,
    pub list_only: bool,
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn resolve(args: Args, user: &UserConfig) -> Self {
        let start = args
            .directory
            .or_else(|| user.start_directory.clone())
            .unwrap_or_else(home_directory);

        let policy = if args.keep_filter {
            FilterPolicy::Preserve
        } else {
            user.filter_policy()
        };

        AppConfig {
            // Absolute paths keep parent navigation working; a missing path
            // is kept as given and simply lists empty
            start_directory: start.canonicalize().unwrap_or(start),
            filter: args.filter.map(Filter::from).unwrap_or(user.default_filter),
            policy,
            show_common_directories: user.show_common_directories,
            list_only: args.list,
            log_file: args.log_file,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            start_directory: home_directory(),
            filter: Filter::All,
            policy: FilterPolicy::Reset,
            show_common_directories: true,
            list_only: false,
            log_file: None,
        }
    }
}
