//! Root application module.
//!
//! Contains the main App component and the AppContext definition.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config::ApiConfig;
use crate::core::HttpDataSource;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// Provided at the root of the component tree and accessed from views with
/// `use_context::<AppContext>()`. It carries only the backend client; each
/// view owns its own state.
#[derive(Clone)]
pub struct AppContext {
    /// Backend client, built from the configured base URL.
    pub source: HttpDataSource,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            source: HttpDataSource::new(config),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

/// Root application component.
///
/// Creates and provides the AppContext, then hands over to the router.
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::default());

    view! { <AppRouter /> }
}
