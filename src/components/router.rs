//! Application router component.
//!
//! Handles URL-based routing with the History API. Uses native `popstate`
//! events instead of a router crate; there are only two routes.
//!
//! # Architecture
//!
//! - **URL is the source of truth**: the route signal mirrors
//!   `location.pathname` + `location.search`
//! - **Views own their state**: switching routes unmounts the previous view
//! - **popstate events**: Browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::browser::FileBrowser;
use crate::components::table::{NoFileSelected, TableView};
use crate::models::AppRoute;

// ============================================================================
// Route Context
// ============================================================================

/// Context for reading and changing the current route from any component.
#[derive(Clone, Copy)]
pub struct RouteContext(pub RwSignal<AppRoute>);

impl RouteContext {
    /// Client-side navigation: push the URL, then switch views.
    pub fn navigate(&self, route: AppRoute) {
        route.push();
        self.0.set(route);
    }
}

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// - `/` → [`FileBrowser`]
/// - `/table?path=...` → [`TableView`]
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(AppRoute::current());

    // Set up popstate listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    provide_context(RouteContext(route));

    // Remount a view only when the route actually changes
    let route_memo = Memo::new(move |_| route.get());

    view! {
        {move || match route_memo.get() {
            AppRoute::Browser => view! { <FileBrowser /> }.into_any(),
            AppRoute::Table { path: Some(path) } => view! { <TableView path=path /> }.into_any(),
            AppRoute::Table { path: None } => view! { <NoFileSelected /> }.into_any(),
        }}
    }
}
