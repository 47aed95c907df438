//! Breadcrumb trail of the listed directory.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::Breadcrumb;

stylance::import_crate_style!(css, "src/components/browser/breadcrumbs.module.css");

/// Ordered ancestor trail, root first. Clicking a crumb lists its path.
#[component]
pub fn Breadcrumbs(breadcrumbs: Vec<Breadcrumb>, on_select: Callback<String>) -> impl IntoView {
    let items = breadcrumbs
        .into_iter()
        .enumerate()
        .map(|(idx, crumb)| {
            let path = crumb.path.clone();
            let icon = if idx == 0 { ic::HOME } else { ic::FOLDER };

            view! {
                <li class=css::item>
                    {(idx > 0).then(|| view! {
                        <span class=css::separator aria-hidden="true">
                            <Icon icon=ic::CHEVRON_RIGHT />
                        </span>
                    })}
                    <a
                        class=css::link
                        title=crumb.path
                        on:click=move |_| on_select.run(path.clone())
                    >
                        <span class=css::icon><Icon icon=icon /></span>
                        <span>{crumb.title}</span>
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class=css::trail aria-label="breadcrumb">
            <ol class=css::list>{items}</ol>
        </nav>
    }
}
