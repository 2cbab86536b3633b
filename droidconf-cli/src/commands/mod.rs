//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Resolve and print a project's build configuration
//! - `validate`: Validate a single source file
//! - `sources`: List the source layers and environment overrides in effect
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod resolve;
pub mod sources;
pub mod validate;

pub use completions::CompletionsCommand;
pub use resolve::ResolveCommand;
pub use sources::SourcesCommand;
pub use validate::ValidateCommand;
