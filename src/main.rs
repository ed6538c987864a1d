//! # get-secret
//!
//! Prints the value of one AWS Secrets Manager secret to stdout.
//!
//! ## Usage
//!
//! ```bash
//! get-secret -r REGION -s SECRET-ARN [-t TIMEOUT IN MILLISECONDS] [-n SESSION NAME]
//! ```
//!
//! Exit codes: `0` success, `2` invalid parameters, `1` configuration or
//! retrieval failure.

use secret_fetcher::config::EnvOverrides;
use secret_fetcher::runtime::{connect_aws, init_tracing, report_error, run};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = init_tracing() {
        eprintln!("{e:#}");
    }

    let overrides = EnvOverrides::from_env();
    let mut stdout = std::io::stdout().lock();

    match run(std::env::args_os(), &overrides, connect_aws, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = report_error(&e, &mut stdout, &mut std::io::stderr().lock());
            ExitCode::from(code)
        }
    }
}
