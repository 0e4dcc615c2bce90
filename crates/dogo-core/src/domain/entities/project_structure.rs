use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    entities::ServiceRequest,
    layout::{entry_point_path, planned_directories, routes_path},
    templates::{ENTRY_POINT_TEMPLATE, RenderContext, ROUTES_TEMPLATE},
};

/// Final service structure ready for materialization.
///
/// Entry paths are relative to `root`. Directories come first, in plan
/// order, followed by the rendered files.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectStructure {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    /// Lay out the service described by `request` under
    /// `output_dir/<service>`.
    pub fn for_request(request: &ServiceRequest, output_dir: &Path) -> Self {
        let name = request.name();
        let ctx = RenderContext::new(name, request.kind());

        let mut structure = Self::new(output_dir.join(name.as_str()));
        for dir in planned_directories(name) {
            structure.add_directory(dir);
        }
        structure.add_file(entry_point_path(name), ctx.render(ENTRY_POINT_TEMPLATE));
        structure.add_file(routes_path(), ctx.render(ROUTES_TEMPLATE));
        structure
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            content,
        }));
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(FsEntry::Directory(DirectoryToCreate { path: path.into() }));
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

#[derive(Debug, Clone, Serialize)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}

impl FileToWrite {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}
