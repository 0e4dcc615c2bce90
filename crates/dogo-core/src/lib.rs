//! dogo Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers for the `dogo` microservice generator,
//! following the ports and adapters layout.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             dogo-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │      (Driven: Filesystem, Runner)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     dogo-adapters (Infrastructure)      │
//! │  (LocalFilesystem, ProcessRunner, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ServiceRequest, DIRECTORY_PLAN, ...)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dogo_core::application::ScaffoldService;
//!
//! let service = ScaffoldService::new(filesystem, runner);
//! let root = service.generate("orders", "rest", ".")?;
//! assert!(root.ends_with("orders"));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService,
        ports::{CommandOutput, CommandRunner, Filesystem},
    };
    pub use crate::domain::{
        DIRECTORY_PLAN, ExternalCommand, ProjectStructure, ServiceKind, ServiceName,
        ServiceRequest, Toolchain,
    };
    pub use crate::error::{DogoError, DogoResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
