use std::fmt;

use crate::domain::{
    error::DomainError,
    value_objects::{ServiceKind, ServiceName},
};

/// A validated request to generate one service.
///
/// The only way to build one is [`ServiceRequest::new`], which rejects an
/// empty or malformed name and any kind other than `rest`/`grpc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRequest {
    name: ServiceName,
    kind: ServiceKind,
}

impl ServiceRequest {
    /// Validate raw user input. The name is checked first.
    pub fn new(name: &str, kind: &str) -> Result<Self, DomainError> {
        let name = ServiceName::parse(name)?;
        let kind = kind.parse::<ServiceKind>()?;
        Ok(Self { name, kind })
    }

    pub fn name(&self) -> &ServiceName {
        &self.name
    }

    pub fn kind(&self) -> ServiceKind {
        self.kind
    }
}

impl fmt::Display for ServiceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}
