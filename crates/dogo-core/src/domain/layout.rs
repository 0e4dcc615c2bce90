//! The fixed directory table every generated service gets.

use std::path::PathBuf;

use crate::domain::value_objects::ServiceName;

/// One subdirectory segment in the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// A literal directory name.
    Literal(&'static str),
    /// Replaced by the service name at plan time.
    ServiceName,
}

impl Segment {
    pub fn resolve<'a>(&self, service: &'a ServiceName) -> &'a str {
        match *self {
            Self::Literal(s) => s,
            Self::ServiceName => service.as_str(),
        }
    }
}

/// Root directories and their subdirectories, in creation order.
pub const DIRECTORY_PLAN: &[(&str, &[Segment])] = &[
    ("dogo", &[Segment::ServiceName]),
    ("config", &[Segment::Literal("config")]),
    (
        "internal",
        &[
            Segment::Literal("router"),
            Segment::Literal("handler"),
            Segment::Literal("service"),
            Segment::Literal("repository"),
            Segment::Literal("middleware"),
        ],
    ),
    ("pkg", &[Segment::Literal("utils")]),
    ("api", &[Segment::Literal("proto")]),
    ("docs", &[Segment::Literal("swagger")]),
];

/// Every directory the plan produces, relative to the service root, roots
/// first followed by their subdirectories.
pub fn planned_directories(service: &ServiceName) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    for (root, subdirs) in DIRECTORY_PLAN {
        let root_path = PathBuf::from(root);
        dirs.push(root_path.clone());
        for sub in *subdirs {
            dirs.push(root_path.join(sub.resolve(service)));
        }
    }
    dirs
}

/// Entry-point file location relative to the service root.
pub fn entry_point_path(service: &ServiceName) -> PathBuf {
    PathBuf::from("dogo").join(service.as_str()).join("main.go")
}

/// Route setup file location relative to the service root.
pub fn routes_path() -> PathBuf {
    PathBuf::from("internal").join("router").join("routes.go")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orders() -> ServiceName {
        ServiceName::parse("orders").unwrap()
    }

    #[test]
    fn plan_has_six_roots() {
        let roots: Vec<_> = DIRECTORY_PLAN.iter().map(|(root, _)| *root).collect();
        assert_eq!(
            roots,
            ["dogo", "config", "internal", "pkg", "api", "docs"]
        );
    }

    #[test]
    fn service_segment_is_substituted() {
        let dirs = planned_directories(&orders());
        assert!(dirs.contains(&PathBuf::from("dogo").join("orders")));
    }

    #[test]
    fn directory_count_matches_table() {
        // 6 roots + 1 + 1 + 5 + 1 + 1 + 1 subdirectories
        assert_eq!(planned_directories(&orders()).len(), 16);
    }

    #[test]
    fn every_segment_is_a_single_component() {
        for (root, subdirs) in DIRECTORY_PLAN {
            assert_eq!(std::path::Path::new(root).components().count(), 1);
            for sub in *subdirs {
                if let Segment::Literal(s) = sub {
                    assert!(!s.is_empty());
                    assert_eq!(std::path::Path::new(s).components().count(), 1);
                }
            }
        }
    }

    #[test]
    fn files_live_inside_planned_directories() {
        let dirs = planned_directories(&orders());
        let entry = entry_point_path(&orders());
        let routes = routes_path();
        assert!(dirs.contains(&entry.parent().unwrap().to_path_buf()));
        assert!(dirs.contains(&routes.parent().unwrap().to_path_buf()));
    }
}
