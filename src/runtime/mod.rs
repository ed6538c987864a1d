//! # Runtime Module
//!
//! Runtime components for `get-secret`: initialization, the execution
//! context, the retrieval flow and error reporting.

pub mod context;
pub mod error_policy;
pub mod fetch;
pub mod initialization;

pub use context::ExecutionContext;
pub use error_policy::report_error;
pub use fetch::{connect_aws, emit_result, fetch_secret, retrieve_from, retrieve_secret, run};
pub use initialization::init_tracing;
