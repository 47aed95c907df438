//! Table viewer controller.
//!
//! The table view may re-evaluate many times before its data arrives. Loads
//! go through a [`RequestDedup`] keyed by file path, so each path is fetched
//! at most once per view, and a completed table stays put.

use std::sync::Arc;

use crate::core::api::DataSource;
use crate::core::dedup::RequestDedup;
use crate::core::error::FetchError;
use crate::models::{CsvTable, ViewState};

/// A table load claimed by [`TableModel::begin`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRequest {
    pub path: String,
}

impl TableRequest {
    /// Fetch the table from `source`.
    pub async fn send<S: DataSource>(self, source: &S) -> Result<LoadedTable, FetchError> {
        let table = source.csv_table(&self.path).await?;
        Ok(LoadedTable {
            path: self.path,
            table,
        })
    }
}

/// A table that arrived for a [`TableRequest`].
#[derive(Clone, Debug)]
pub struct LoadedTable {
    pub path: String,
    pub table: CsvTable,
}

/// State of the table viewer.
#[derive(Clone, Debug, Default)]
pub struct TableModel {
    requests: RequestDedup<String, Arc<CsvTable>>,
}

impl TableModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the load for `path`.
    ///
    /// Returns a request only the first time `path` is seen; while that
    /// request is in flight, and after it completes, returns `None`.
    pub fn begin(&mut self, path: &str) -> Option<TableRequest> {
        let path = path.to_string();
        self.requests
            .begin(&path)
            .then_some(TableRequest { path })
    }

    pub fn complete(&mut self, loaded: LoadedTable) {
        self.requests.complete(loaded.path, Arc::new(loaded.table));
    }

    /// View state for `path`: loading until its table has arrived.
    pub fn state(&self, path: &str) -> ViewState<Arc<CsvTable>> {
        match self.requests.completed(&path.to_string()) {
            Some(table) => ViewState::Ready(Arc::clone(table)),
            None => ViewState::Loading,
        }
    }
}
