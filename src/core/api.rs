//! Backend data access.
//!
//! [`DataSource`] is the seam between the views and the backend. The
//! production implementation, [`HttpDataSource`], issues one GET per call
//! against the configured base URL.

use std::future::Future;

use crate::config::{ApiConfig, endpoints};
use crate::core::error::FetchError;
use crate::models::{CsvTable, ListDirResponse};
use crate::utils::fetch_json;

/// Source of directory listings and CSV tables.
pub trait DataSource {
    /// List the directory at `path`.
    fn list_dir(&self, path: &str) -> impl Future<Output = Result<ListDirResponse, FetchError>>;

    /// Load the CSV file at `path` as a table.
    fn csv_table(&self, path: &str) -> impl Future<Output = Result<CsvTable, FetchError>>;
}

/// [`DataSource`] backed by the HTTP API.
#[derive(Clone, Debug, Default)]
pub struct HttpDataSource {
    config: ApiConfig,
}

impl HttpDataSource {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// URL of the directory-list endpoint for `path`.
    pub fn dir_list_url(&self, path: &str) -> String {
        endpoint_url(self.config.base_url(), endpoints::DIR_LIST, path)
    }

    /// URL of the CSV-table endpoint for `path`.
    pub fn csv_table_url(&self, path: &str) -> String {
        endpoint_url(self.config.base_url(), endpoints::CSV_TABLE, path)
    }
}

impl DataSource for HttpDataSource {
    async fn list_dir(&self, path: &str) -> Result<ListDirResponse, FetchError> {
        fetch_json(&self.dir_list_url(path)).await
    }

    async fn csv_table(&self, path: &str) -> Result<CsvTable, FetchError> {
        fetch_json(&self.csv_table_url(path)).await
    }
}

/// Join base URL, endpoint prefix and a filesystem path.
///
/// Leading slashes of `path` are dropped (the backend resolves paths from its
/// root either way) and every segment is percent-encoded.
fn endpoint_url(base_url: &str, prefix: &str, path: &str) -> String {
    let encoded = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");
    format!("{}{}/{}", base_url, prefix, encoded)
}
