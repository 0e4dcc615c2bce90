//! Core domain layer for dogo.
//!
//! Pure logic only: validation of the request, the directory table, the
//! source templates and the module tool commands. All I/O goes through the
//! ports defined in the application layer.
//!
//! - **No I/O**: No filesystem, process, or network calls
//! - **Immutable values**: `ServiceName`, `ServiceKind` and `ServiceRequest`
//!   can only be built through validation
pub mod entities;
pub mod error;
pub mod layout;
pub mod templates;
pub mod toolchain;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure},
    service_request::ServiceRequest,
};

pub use error::DomainError;
pub use layout::{DIRECTORY_PLAN, Segment, planned_directories};
pub use templates::RenderContext;
pub use toolchain::{ExternalCommand, Toolchain};
pub use value_objects::{ServiceKind, ServiceName};
