//! Entry list of the listed directory.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::DirEntryInfo;

stylance::import_crate_style!(css, "src/components/browser/dir_list.module.css");

/// Flat list of entries. Files and directories are styled apart; double-click
/// hands the entry to `on_activate`.
#[component]
pub fn DirList(entries: Vec<DirEntryInfo>, on_activate: Callback<DirEntryInfo>) -> impl IntoView {
    view! {
        <ul class=css::dirs role="list">
            {entries
                .into_iter()
                .map(|entry| view! { <DirListItem entry=entry on_activate=on_activate /> })
                .collect_view()}
        </ul>
    }
}

#[component]
fn DirListItem(entry: DirEntryInfo, on_activate: Callback<DirEntryInfo>) -> impl IntoView {
    let (icon, kind_class, kind_label) = if entry.is_dir() {
        (ic::FOLDER, css::dirEntry, "Folder")
    } else {
        (ic::FILE, css::fileEntry, "File")
    };
    let name = entry.display_name().to_string();
    let aria_label = format!("{}: {}", kind_label, name);
    let full_path = entry.path.clone();

    view! {
        <li
            class=format!("{} {}", css::entry, kind_class)
            title=full_path
            aria-label=aria_label
            tabindex="0"
            on:dblclick=move |_| on_activate.run(entry.clone())
        >
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=css::name>{name}</span>
        </li>
    }
}
