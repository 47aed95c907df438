//! Directory listing types returned by the backend.

use serde::{Deserialize, Serialize};

/// One child entry of the listed directory.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DirEntryInfo {
    /// Entry path as reported by the backend (used verbatim for requests)
    pub path: String,
    /// `true` for regular files, `false` for directories
    pub is_file: bool,
}

impl DirEntryInfo {
    /// Last non-empty path segment, or the full path when it has none.
    pub fn display_name(&self) -> &str {
        self.path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
            .unwrap_or(self.path.as_str())
    }

    pub fn is_dir(&self) -> bool {
        !self.is_file
    }
}

/// One ancestor segment of the listed directory, ordered root first.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Breadcrumb {
    pub title: String,
    pub path: String,
}

/// Snapshot of one directory: its breadcrumb trail and its entries.
///
/// Both halves always describe the same directory, so views replace them
/// together.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ListDirResponse {
    pub breadcrumbs: Vec<Breadcrumb>,
    pub entries: Vec<DirEntryInfo>,
}
