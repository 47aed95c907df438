//! In-memory [`DataSource`] for controller tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;

use crate::core::api::DataSource;
use crate::core::error::FetchError;
use crate::models::{Breadcrumb, CsvTable, DirEntryInfo, ListDirResponse};

/// Serves canned responses and records every call. Unknown paths fail with
/// `HttpError(400)`, like the backend does for bad paths.
#[derive(Default)]
pub struct MockSource {
    listings: HashMap<String, ListDirResponse>,
    tables: HashMap<String, CsvTable>,
    pub dir_calls: RefCell<Vec<String>>,
    pub table_calls: RefCell<Vec<String>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(mut self, path: &str, listing: ListDirResponse) -> Self {
        self.listings.insert(path.to_string(), listing);
        self
    }

    pub fn with_table(mut self, path: &str, table: CsvTable) -> Self {
        self.tables.insert(path.to_string(), table);
        self
    }
}

impl DataSource for MockSource {
    fn list_dir(&self, path: &str) -> impl Future<Output = Result<ListDirResponse, FetchError>> {
        self.dir_calls.borrow_mut().push(path.to_string());
        let result = self
            .listings
            .get(path)
            .cloned()
            .ok_or(FetchError::HttpError(400));
        async move { result }
    }

    fn csv_table(&self, path: &str) -> impl Future<Output = Result<CsvTable, FetchError>> {
        self.table_calls.borrow_mut().push(path.to_string());
        let result = self
            .tables
            .get(path)
            .cloned()
            .ok_or(FetchError::HttpError(400));
        async move { result }
    }
}

/// Listing with the given `(title, path)` breadcrumbs and `(path, is_file)`
/// entries.
pub fn listing(crumbs: &[(&str, &str)], entries: &[(&str, bool)]) -> ListDirResponse {
    ListDirResponse {
        breadcrumbs: crumbs
            .iter()
            .map(|(title, path)| Breadcrumb {
                title: title.to_string(),
                path: path.to_string(),
            })
            .collect(),
        entries: entries
            .iter()
            .map(|(path, is_file)| DirEntryInfo {
                path: path.to_string(),
                is_file: *is_file,
            })
            .collect(),
    }
}
