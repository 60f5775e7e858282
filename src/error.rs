/*!
 * Copyright (c) 2026 Ming Lyu, aka mingcheng
 *
 * This source code is licensed under the MIT License,
 * which is located in the LICENSE file in the source tree's root directory.
 *
 * File: error.rs
 * Author: mingcheng <mingcheng@apache.org>
 * File Created: 2026-03-02 10:14:51
 *
 * Modified By: mingcheng <mingcheng@apache.org>
 * Last Modified: 2026-03-04 18:02:10
 */

use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, MailAssertError>;

#[derive(Debug, thiserror::Error)]
pub enum MailAssertError {
    /// The mail directory or one of its artifacts could not be read.
    #[error("Failed to read mail artifacts at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An artifact does not carry a usable header block.
    #[error("Malformed mail artifact {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    /// The subject pattern could not be compiled.
    #[error("Invalid subject pattern '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },

    /// An expectation about the generated emails was not met.
    #[error("{0}")]
    Assertion(String),

    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),
}

impl MailAssertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn assertion(message: impl Into<String>) -> Self {
        Self::Assertion(message.into())
    }

    /// True when the error is an unmet expectation rather than a failure to
    /// read or parse the artifacts.
    pub fn is_assertion_failure(&self) -> bool {
        matches!(self, Self::Assertion(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assertion_message_is_verbatim() {
        let err = MailAssertError::assertion("Email to 'a@x.com' not sent");
        assert_eq!(err.to_string(), "Email to 'a@x.com' not sent");
        assert!(err.is_assertion_failure());
    }

    #[test]
    fn test_io_error_names_path() {
        let err = MailAssertError::io(
            "/tmp/missing-mail",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        let message = err.to_string();
        assert!(message.contains("/tmp/missing-mail"));
        assert!(message.contains("not found"));
        assert!(!err.is_assertion_failure());
    }
}
