//! Main directory browser component.
//!
//! Lists the root directory on mount. Afterwards every breadcrumb click or
//! directory double-click lists the target in place, and a file
//! double-click opens it in the table viewer.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::{Breadcrumbs, DirList};
use crate::app::AppContext;
use crate::components::router::RouteContext;
use crate::config::{ROOT_DIR, routes};
use crate::core::{BrowserModel, EntryAction};
use crate::models::{DirEntryInfo, ViewState};
use crate::utils::console;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// Directory browser view.
///
/// Shows a loading placeholder until the first listing arrives. Later
/// listings replace the content directly, without the placeholder.
/// Failed requests are logged and leave the view as it was.
#[component]
pub fn FileBrowser() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");

    let model = RwSignal::new(BrowserModel::new());

    // List a directory in place; only the latest request may land
    let open_dir = Callback::new(move |path: String| {
        // Issuing a ticket doesn't change what is rendered
        let Some(request) = model.try_update_untracked(|m| m.request(path)) else {
            return;
        };
        let source = ctx.source.clone();
        spawn_local(async move {
            let requested = request.path.clone();
            match request.send(&source).await {
                Ok(loaded) => {
                    let path = loaded.path.clone();
                    match model.try_update_untracked(|m| m.apply(loaded)) {
                        Some(true) => model.notify(),
                        Some(false) => {
                            console::warn(&format!("discarded superseded listing for {}", path))
                        }
                        None => {}
                    }
                }
                Err(e) => console::error(&format!("listing {} failed: {}", requested, e)),
            }
        });
    });

    let activate = Callback::new(move |entry: DirEntryInfo| {
        match EntryAction::for_entry(&entry) {
            EntryAction::OpenDir(path) => {
                console::debug(&format!("dir handler: {}", path));
                open_dir.run(path);
            }
            EntryAction::OpenTable(route) => {
                console::debug(&format!("file handler: {}", entry.path));
                route_ctx.navigate(route);
            }
        }
    });

    // Initial listing, once on mount
    Effect::new(move |_| open_dir.run(ROOT_DIR.to_string()));

    view! {
        <div aria-busy=move || model.with(|m| m.state().is_loading()).to_string()>
        {move || model.with(|m| match m.state() {
            ViewState::Loading => view! {
                <div class=css::loading>"Loading..."</div>
            }.into_any(),
            ViewState::Ready(listing) => view! {
                <section class=css::browser>
                    <h1 class=css::title>"File browser"</h1>
                    <Breadcrumbs breadcrumbs=listing.breadcrumbs.clone() on_select=open_dir />
                    <DirList entries=listing.entries.clone() on_activate=activate />
                    <a class=css::tableLink href=routes::TABLE>"Table"</a>
                </section>
            }.into_any(),
        })}
        </div>
    }
}
