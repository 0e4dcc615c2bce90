//! Domain value objects: ServiceName, ServiceKind.
//!
//! # Design
//!
//! Both types can only be obtained through validation, so holding one is
//! proof that the value is usable as a path segment (name) or is one of the
//! supported literals (kind).

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;

// ── ServiceName ──────────────────────────────────────────────────────────────

/// Name of the service being generated.
///
/// Invariant: non-empty, a single normal path component (no separators, not
/// `.` or `..`), no NUL bytes, no leading or trailing whitespace. The name is
/// kept exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ServiceName(String);

impl ServiceName {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let name = raw;
        if name.trim().is_empty() {
            return Err(DomainError::EmptyServiceName);
        }

        let invalid = |reason: &str| DomainError::InvalidServiceName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if name.trim() != name {
            return Err(invalid("name cannot start or end with whitespace"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid("name cannot contain path separators"));
        }
        if name.contains('\0') {
            return Err(invalid("name cannot contain NUL bytes"));
        }

        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(Self(name.to_string())),
            _ => Err(invalid("name must be a single directory name")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for ServiceName {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl FromStr for ServiceName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ── ServiceKind ──────────────────────────────────────────────────────────────

/// Flavour of service requested on the command line.
///
/// Both kinds currently produce the same layout; the kind is carried through
/// for reporting only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    #[default]
    Rest,
    Grpc,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 2] = [Self::Rest, Self::Grpc];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rest => "rest",
            Self::Grpc => "grpc",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rest" => Ok(Self::Rest),
            "grpc" => Ok(Self::Grpc),
            _ => Err(DomainError::UnsupportedServiceKind { kind: s.to_string() }),
        }
    }
}
