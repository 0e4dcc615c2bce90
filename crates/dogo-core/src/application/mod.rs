//! Application layer for dogo.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::ScaffoldService;

// Re-export port traits (for adapter implementation)
pub use ports::{CommandOutput, CommandRunner, Filesystem};

pub use error::ApplicationError;
