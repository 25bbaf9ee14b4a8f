//! Boundary collaborators: CLI, persistence, catalog, and error handling

/// Theme catalog and difficulty labels
pub mod catalog;
/// Command-line interface
pub mod cli;
/// Constants and policy defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Batch progress display
pub mod progress;
/// Artifact persistence with fallback
pub mod store;
