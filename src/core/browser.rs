//! Directory browser controller.
//!
//! Holds the browser view's state and decides what each interaction does.
//! The view starts in [`ViewState::Loading`] and moves to
//! [`ViewState::Ready`] on the first applied listing. Later navigation
//! replaces the listing in place and never shows the loading state again.

use crate::core::api::DataSource;
use crate::core::error::FetchError;
use crate::core::sequence::{RequestSequence, RequestTicket};
use crate::models::{AppRoute, DirEntryInfo, ListDirResponse, ViewState};

/// What activating (double-clicking) an entry does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryAction {
    /// List this directory in place
    OpenDir(String),
    /// Navigate to the table viewer
    OpenTable(AppRoute),
}

impl EntryAction {
    pub fn for_entry(entry: &DirEntryInfo) -> Self {
        if entry.is_file {
            Self::OpenTable(AppRoute::table(entry.path.clone()))
        } else {
            Self::OpenDir(entry.path.clone())
        }
    }
}

/// A directory listing request issued by [`BrowserModel::request`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirRequest {
    pub path: String,
    pub ticket: RequestTicket,
}

impl DirRequest {
    /// Fetch the listing from `source`.
    pub async fn send<S: DataSource>(self, source: &S) -> Result<LoadedDir, FetchError> {
        let response = source.list_dir(&self.path).await?;
        Ok(LoadedDir {
            path: self.path,
            ticket: self.ticket,
            response,
        })
    }
}

/// A listing that arrived for a [`DirRequest`].
#[derive(Clone, Debug)]
pub struct LoadedDir {
    pub path: String,
    pub ticket: RequestTicket,
    pub response: ListDirResponse,
}

/// State of the directory browser view.
#[derive(Clone, Debug, Default)]
pub struct BrowserModel {
    state: ViewState<ListDirResponse>,
    sequence: RequestSequence,
}

impl BrowserModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState<ListDirResponse> {
        &self.state
    }

    /// Start listing `path`. Supersedes every earlier request.
    pub fn request(&mut self, path: impl Into<String>) -> DirRequest {
        DirRequest {
            path: path.into(),
            ticket: self.sequence.issue(),
        }
    }

    /// Apply a listing if it answers the latest request.
    ///
    /// Breadcrumbs and entries are replaced together. Returns `false` (and
    /// leaves the state untouched) for a superseded response.
    pub fn apply(&mut self, loaded: LoadedDir) -> bool {
        if !self.sequence.is_latest(loaded.ticket) {
            return false;
        }
        self.state = ViewState::Ready(loaded.response);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{MockSource, listing};

    fn entry(path: &str, is_file: bool) -> DirEntryInfo {
        DirEntryInfo {
            path: path.to_string(),
            is_file,
        }
    }

    fn source() -> MockSource {
        MockSource::new()
            .with_listing("/", listing(&[], &[("/a", false), ("/top.csv", true)]))
            .with_listing(
                "/a",
                listing(&[("root", "/")], &[("/a/sub", false), ("/a/data.csv", true)]),
            )
            .with_listing(
                "/a/sub",
                listing(&[("root", "/"), ("a", "/a")], &[("/a/sub/deep.csv", true)]),
            )
    }

    #[tokio::test]
    async fn test_initial_load() {
        let source = source();
        let mut model = BrowserModel::new();
        assert!(model.state().is_loading());

        let loaded = model.request("/").send(&source).await.unwrap();
        assert!(model.apply(loaded));

        let ready = model.state().ready().unwrap();
        assert_eq!(ready.entries.len(), 2);
        assert_eq!(*source.dir_calls.borrow(), vec!["/"]);
    }

    #[tokio::test]
    async fn test_breadcrumb_click_from_any_depth() {
        let source = source();
        let mut model = BrowserModel::new();
        let loaded = model.request("/a/sub").send(&source).await.unwrap();
        model.apply(loaded);

        let root = model.state().ready().unwrap().breadcrumbs[0].clone();
        assert_eq!(root.title, "root");

        let loaded = model.request(root.path).send(&source).await.unwrap();
        assert!(model.apply(loaded));

        assert_eq!(*source.dir_calls.borrow(), vec!["/a/sub", "/"]);
        assert_eq!(
            model.state().ready(),
            Some(&listing(&[], &[("/a", false), ("/top.csv", true)]))
        );
    }

    #[tokio::test]
    async fn test_entries_and_breadcrumbs_replaced_together() {
        let source = source();
        let mut model = BrowserModel::new();
        let loaded = model.request("/").send(&source).await.unwrap();
        model.apply(loaded);

        let loaded = model.request("/a").send(&source).await.unwrap();
        model.apply(loaded);

        let ready = model.state().ready().unwrap();
        assert_eq!(ready.breadcrumbs.len(), 1);
        assert_eq!(ready.breadcrumbs[0].path, "/");
        assert_eq!(
            ready.entries,
            vec![entry("/a/sub", false), entry("/a/data.csv", true)]
        );
    }

    #[test]
    fn test_file_entry_opens_table() {
        let source = source();
        let action = EntryAction::for_entry(&entry("/a/data.csv", true));
        assert_eq!(action, EntryAction::OpenTable(AppRoute::table("/a/data.csv")));
        let EntryAction::OpenTable(route) = action else {
            unreachable!()
        };
        assert_eq!(route.to_url(), "/table?path=/a/data.csv");
        assert!(source.dir_calls.borrow().is_empty());
        assert!(source.table_calls.borrow().is_empty());
    }

    #[test]
    fn test_dir_entry_lists_in_place() {
        assert_eq!(
            EntryAction::for_entry(&entry("/a/sub", false)),
            EntryAction::OpenDir("/a/sub".to_string())
        );
    }

    #[tokio::test]
    async fn test_dir_entry_fetches_without_navigating() {
        let source = source();
        let mut model = BrowserModel::new();

        let EntryAction::OpenDir(path) = EntryAction::for_entry(&entry("/a/sub", false)) else {
            panic!("directory entry must list in place");
        };
        let loaded = model.request(path).send(&source).await.unwrap();
        model.apply(loaded);

        assert_eq!(*source.dir_calls.borrow(), vec!["/a/sub"]);
    }

    #[tokio::test]
    async fn test_stale_response_discarded() {
        let source = source();
        let mut model = BrowserModel::new();

        let slow = model.request("/a");
        let fast = model.request("/a/sub");

        let fast = fast.send(&source).await.unwrap();
        assert!(model.apply(fast));
        let slow = slow.send(&source).await.unwrap();
        assert!(!model.apply(slow));

        let ready = model.state().ready().unwrap();
        assert_eq!(ready.entries, vec![entry("/a/sub/deep.csv", true)]);
    }

    #[tokio::test]
    async fn test_failed_request_keeps_state() {
        let source = source();
        let mut model = BrowserModel::new();

        let err = model.request("/missing").send(&source).await.unwrap_err();
        assert_eq!(err, FetchError::HttpError(400));
        assert!(model.state().is_loading());

        let loaded = model.request("/").send(&source).await.unwrap();
        model.apply(loaded);
        assert!(model.request("/missing").send(&source).await.is_err());
        assert_eq!(model.state().ready().unwrap().entries.len(), 2);
    }
}
