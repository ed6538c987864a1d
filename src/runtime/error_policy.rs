//! # Error Policy
//!
//! Every error ends the invocation. This module turns a [`FetchError`] into
//! user-facing text and a process exit code. Nothing is written to stdout on
//! failure except clap's `--help` output.

use crate::error::{FetchError, ParameterError};
use std::io::Write;
use tracing::debug;

/// Report `error` and return the exit code the process should end with
///
/// Help output goes to `stdout`; everything else goes to `stderr`.
pub fn report_error<O, E>(error: &FetchError, stdout: &mut O, stderr: &mut E) -> u8
where
    O: Write,
    E: Write,
{
    let exit_code = error.exit_code();

    // Reporting is best effort, the exit code is what the pipeline acts on
    let written = match error {
        FetchError::Parameter(ParameterError::Usage(e)) => {
            let rendered = e.render().to_string();
            if e.use_stderr() {
                stderr.write_all(rendered.as_bytes())
            } else {
                stdout.write_all(rendered.as_bytes())
            }
        }
        FetchError::Parameter(ParameterError::MissingRequired { usage }) => {
            writeln!(stderr, "{usage}").and_then(|()| writeln!(stderr, "{error}"))
        }
        FetchError::Retrieval(e) => {
            debug!(kind = e.kind(), "Secret retrieval failed");
            writeln!(stderr, "{error}")
        }
        FetchError::Configuration(_) | FetchError::Output(_) => writeln!(stderr, "{error}"),
    };

    if let Err(e) = written {
        debug!("Failed to write error report: {}", e);
    }

    exit_code
}
