//! Project generation and materialization.
//!
//! [`generate::generate`] is the end-to-end entry point;
//! [`materialize::materialize`] is the file-system boundary. All writes stay
//! within `output_dir/project_name`.

pub mod errors;
pub mod generate;
pub mod git;
pub mod materialize;
pub mod types;

pub use errors::{GenerateError, ProjectError};
pub use generate::generate;
pub use types::{GenerateOutcome, GenerateRequest, MaterializeResult, PreviewEntry};
