//! Table viewer component.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::DataGrid;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::router::RouteContext;
use crate::config::routes;
use crate::core::TableModel;
use crate::models::{AppRoute, ViewState};
use crate::utils::console;

stylance::import_crate_style!(css, "src/components/table/table.module.css");

/// Table viewer for the CSV file at `path`.
///
/// The file is fetched once per mount; the view stays on its loading
/// placeholder if that request fails.
#[component]
pub fn TableView(path: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");

    let model = RwSignal::new(TableModel::new());

    // Re-runs are harmless: the model hands out one request per path
    let request_path = path.clone();
    Effect::new(move |_| {
        let Some(request) = model
            .try_update_untracked(|m| m.begin(&request_path))
            .flatten()
        else {
            return;
        };
        let source = ctx.source.clone();
        spawn_local(async move {
            let requested = request.path.clone();
            match request.send(&source).await {
                Ok(loaded) => {
                    let _ = model.try_update(|m| m.complete(loaded));
                }
                Err(e) => console::error(&format!("loading table {} failed: {}", requested, e)),
            }
        });
    });

    let title = path.clone();
    let state = Signal::derive(move || model.with(|m| m.state(&path)));

    view! {
        <section class=css::tableView>
            <header class=css::header>
                <BackLink route_ctx=route_ctx />
                <span class=css::fileIcon aria-hidden="true"><Icon icon=ic::TABLE /></span>
                <h1 class=css::path title=title.clone()>{title.clone()}</h1>
            </header>
            {move || match state.get() {
                ViewState::Loading => view! {
                    <div class=css::loading>"Loading..."</div>
                }.into_any(),
                ViewState::Ready(table) => {
                    let summary = format!(
                        "{} rows · {} columns",
                        table.rows.len(),
                        table.columns.len()
                    );
                    view! {
                        <DataGrid table=table />
                        <footer class=css::summary>{summary}</footer>
                    }.into_any()
                }
            }}
        </section>
    }
}

/// Placeholder for `/table` without a `path` query parameter.
#[component]
pub fn NoFileSelected() -> impl IntoView {
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");

    view! {
        <section class=css::tableView>
            <header class=css::header>
                <BackLink route_ctx=route_ctx />
            </header>
            <div class=css::notice>
                "No file selected. Open a CSV file from the file browser."
            </div>
        </section>
    }
}

/// Client-side link back to the directory browser.
#[component]
fn BackLink(route_ctx: RouteContext) -> impl IntoView {
    view! {
        <a
            class=css::back
            href=routes::BROWSER
            title="Back to file browser"
            on:click=move |ev: ev::MouseEvent| {
                ev.prevent_default();
                route_ctx.navigate(AppRoute::Browser);
            }
        >
            <Icon icon=ic::CHEVRON_LEFT />
        </a>
    }
}
