//! Application ports (traits) for external dependencies.
//!
//! Ports define the interfaces the application needs from the outside
//! world. Adapters in `dogo-adapters` implement them.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory creation and file writes
//!   - `CommandRunner`: external module tool invocation

pub mod output;

pub use output::{CommandOutput, CommandRunner, Filesystem};

#[cfg(test)]
pub use output::{MockCommandRunner, MockFilesystem};
