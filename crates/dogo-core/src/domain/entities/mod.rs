pub mod project_structure;
pub mod service_request;

pub use crate::domain::DomainError;
pub use project_structure::ProjectStructure;
pub use service_request::ServiceRequest;
