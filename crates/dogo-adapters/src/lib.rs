//! Infrastructure adapters for dogo.
//!
//! This crate implements the ports defined in `dogo-core::application::ports`.
//! It contains all I/O: the local filesystem and external process execution,
//! plus in-memory doubles of both for tests.

pub mod filesystem;
pub mod process;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{ProcessRunner, RecordedCommand, RecordingRunner};
