//! CLI failure type and its process exit codes.
//!
//! | code | meaning |
//! |---|---|
//! | 2  | clap usage error, reported by clap itself |
//! | 10 | the file or filter was rejected (unknown filter, unsupported BMP, bad size) |
//! | 11 | a file could not be opened, read, or written |
//! | 12 | the filter selection on the command line was empty or ambiguous |
//! | 13 | the `--json` report could not be produced |

use pixel_filter_core::FilterError;
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Rejected by the core or a codec.
    #[error(transparent)]
    Filter(FilterError),

    /// Filesystem or stream failure while loading or saving.
    #[error("{0}")]
    Io(String),

    /// Zero or several filters were selected.
    #[error("{0}")]
    Selection(String),

    #[error("cannot render json report: {0}")]
    Report(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Filter(_) => 10,
            CliError::Io(_) => 11,
            CliError::Selection(_) => 12,
            CliError::Report(_) => 13,
        }
    }

    /// The `--json` form printed to stderr.
    pub fn to_json(&self) -> Value {
        json!({ "error": self.to_string(), "exit_code": self.exit_code() })
    }
}

// `FilterError::Io` leaves the filter family for exit code 11.
impl From<FilterError> for CliError {
    fn from(e: FilterError) -> Self {
        match e {
            FilterError::Io(msg) => CliError::Io(msg),
            other => CliError::Filter(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codec_io_failures_get_their_own_code() {
        let err = CliError::from(FilterError::Io("cannot open in.bmp".into()));
        assert!(matches!(err, CliError::Io(_)));
        assert_eq!(err.exit_code(), 11);
        assert_eq!(err.to_string(), "cannot open in.bmp");
    }

    #[test]
    fn rejected_input_keeps_the_core_message() {
        let err = CliError::from(FilterError::UnsupportedFormat(
            "32 bits per pixel, expected 24".into(),
        ));
        assert_eq!(err.exit_code(), 10);
        assert_eq!(err.to_string(), "unsupported format: 32 bits per pixel, expected 24");
    }

    #[test]
    fn json_report_carries_message_and_code() {
        let err = CliError::Selection("only one filter allowed".into());
        assert_eq!(
            err.to_json(),
            json!({"error": "only one filter allowed", "exit_code": 12})
        );
    }

    #[test]
    fn report_failures_are_code_13() {
        let bad = serde_json::from_str::<Value>("{").unwrap_err();
        let err: CliError = bad.into();
        assert_eq!(err.exit_code(), 13);
        assert!(err.to_string().starts_with("cannot render json report"));
    }
}
