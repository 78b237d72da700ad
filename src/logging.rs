//! Log backend setup
//!
//! The TUI owns the terminal, so interactive sessions only log when a file
//! is given. Level comes from `RUST_LOG`, defaulting to `info`.

use crate::error::{ExplorerError, Result};
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::path::Path;

/// Where log records go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink<'a> {
    File(&'a Path),
    Stderr,
    Disabled,
}

pub fn init(sink: LogSink<'_>) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));

    match sink {
        LogSink::Disabled => return Ok(()),
        LogSink::Stderr => {
            builder.target(Target::Stderr);
        }
        LogSink::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| ExplorerError::LogFile {
                    path: path.to_path_buf(),
                    source,
                })?;
            builder.target(Target::Pipe(Box::new(file)));
        }
    }

    builder.try_init().map_err(|_| ExplorerError::LoggerInit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_is_noop() {
        assert!(init(LogSink::Disabled).is_ok());
    }

    #[test]
    fn test_unopenable_log_file() {
        let result = init(LogSink::File(Path::new("/nonexistent/dir/fexplorer.log")));
        assert!(matches!(result, Err(ExplorerError::LogFile { .. })));
    }
}
