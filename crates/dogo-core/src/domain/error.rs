// ============================================================================
// domain/error.rs - VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Every domain error is raised while validating a request, before any
/// filesystem or process side effect has happened.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("service name cannot be empty")]
    EmptyServiceName,

    #[error("invalid service name '{name}': {reason}")]
    InvalidServiceName { name: String, reason: String },

    #[error("service type can only be 'rest' or 'grpc', got '{kind}'")]
    UnsupportedServiceKind { kind: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyServiceName => vec![
                "Pass a service name with --name / -n".into(),
                "Example: dogo gen --name orders".into(),
            ],
            Self::InvalidServiceName { name, .. } => vec![
                format!("'{}' is used as a directory name and a module path", name),
                "Use a single path segment without '/' or '\\'".into(),
                "Examples: orders, billing-api, user_service".into(),
            ],
            Self::UnsupportedServiceKind { kind } => vec![
                format!("'{}' is not a supported service type", kind),
                "Supported types:".into(),
                "  • rest  - HTTP service (default)".into(),
                "  • grpc  - gRPC service".into(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_kind_message_names_both_literals() {
        let msg = DomainError::UnsupportedServiceKind {
            kind: "soap".into(),
        }
        .to_string();
        assert!(msg.contains("'rest'"));
        assert!(msg.contains("'grpc'"));
        assert!(msg.contains("soap"));
    }

    #[test]
    fn every_variant_has_suggestions() {
        let errors = [
            DomainError::EmptyServiceName,
            DomainError::InvalidServiceName {
                name: "a/b".into(),
                reason: "contains a path separator".into(),
            },
            DomainError::UnsupportedServiceKind { kind: "x".into() },
        ];
        for err in errors {
            assert!(!err.suggestions().is_empty(), "no suggestions for {err:?}");
        }
    }
}
