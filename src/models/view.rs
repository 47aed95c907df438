//! View lifecycle state shared by the browser and table views.

/// Loading state of a view that populates itself from one fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState<T> {
    /// No response has arrived yet
    #[default]
    Loading,
    /// Data from the latest applied response
    Ready(T),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Data, once ready.
    #[cfg(test)]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Loading => None,
            Self::Ready(data) => Some(data),
        }
    }
}
