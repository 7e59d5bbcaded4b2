//! CLI command handlers for hexmatch.
//!
//! Headless, scriptable access to hex validation, normalization and the
//! nearest-color match flow, plus a line-oriented interactive form.

pub mod common;
pub mod config;
pub mod copy;
pub mod find;
pub mod interactive;
pub mod normalize;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliContext, CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use copy::CopyArgs;
pub use find::MatchArgs;
pub use interactive::InteractiveArgs;
pub use normalize::NormalizeArgs;
pub use validate::ValidateArgs;
