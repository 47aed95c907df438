//! Data grid component.
//!
//! Renders a [`CsvTable`] exactly as received: one header per column, one row
//! per response row, each cell shown literally. Users can sort by clicking a
//! header, reorder columns by dragging headers, and resize columns by
//! dragging a header's right edge. None of this changes the table itself.

use std::sync::Arc;

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::core::{GridLayout, SortDirection};
use crate::models::{CellKind, CsvTable};

stylance::import_crate_style!(css, "src/components/table/grid.module.css");

/// In-progress column resize.
#[derive(Clone, Copy)]
struct ResizeDrag {
    column: usize,
    start_x: i32,
    start_width: f64,
}

fn cell_class(kind: CellKind) -> String {
    let modifier = match kind {
        CellKind::Empty => css::cellEmpty,
        CellKind::Bool => css::cellBool,
        CellKind::Number => css::cellNumber,
        CellKind::Text => css::cellText,
        CellKind::Nested => css::cellNested,
    };
    format!("{} {}", css::cell, modifier)
}

#[component]
pub fn DataGrid(table: Arc<CsvTable>) -> impl IntoView {
    let layout = RwSignal::new(GridLayout::new(table.columns.len()));
    let dragged = RwSignal::new(None::<usize>);
    let resizing = StoredValue::new(None::<ResizeDrag>);

    // Order and sort change rarely; widths change on every resize step
    let order = Memo::new(move |_| layout.with(|l| l.column_order().to_vec()));
    let sort = Memo::new(move |_| layout.with(|l| l.sort()));

    let move_listener = window_event_listener(ev::mousemove, move |ev| {
        if let Some(drag) = resizing.get_value() {
            let delta = f64::from(ev.client_x() - drag.start_x);
            layout.update(|l| l.resize(drag.column, drag.start_width + delta));
        }
    });
    let up_listener = window_event_listener(ev::mouseup, move |_| resizing.set_value(None));
    on_cleanup(move || {
        move_listener.remove();
        up_listener.remove();
    });

    let header_table = Arc::clone(&table);
    let header = move || {
        let active_sort = sort.get();
        let columns = order.get();
        let labels = layout.with_untracked(|l| l.header_labels(&header_table));
        columns
            .into_iter()
            .zip(labels)
            .map(|(column, label)| {
                let info = &header_table.columns[column];
                let sort_icon = active_sort
                    .filter(|s| s.column == column)
                    .map(|s| match s.direction {
                        SortDirection::Ascending => ic::SORT_ASC,
                        SortDirection::Descending => ic::SORT_DESC,
                    });
                let key = info.key.clone();
                let comment = info.comment.clone();

                view! {
                    <th
                        class=move || {
                            if dragged.get() == Some(column) {
                                format!("{} {}", css::header, css::headerDragged)
                            } else {
                                css::header.to_string()
                            }
                        }
                        style=move || format!("width: {}px", layout.with(|l| l.width(column)))
                        title=comment
                        draggable="true"
                        on:dragstart=move |ev: ev::DragEvent| {
                            if let Some(data) = ev.data_transfer() {
                                let _ = data.set_data("text/plain", &key);
                            }
                            dragged.set(Some(column));
                        }
                        on:dragover=move |ev: ev::DragEvent| ev.prevent_default()
                        on:drop=move |ev: ev::DragEvent| {
                            ev.prevent_default();
                            if let Some(from) = dragged.get_untracked() {
                                layout.update(|l| l.move_column(from, column));
                            }
                            dragged.set(None);
                        }
                        on:dragend=move |_| dragged.set(None)
                    >
                        <button
                            class=css::headerLabel
                            on:click=move |_| layout.update(|l| l.toggle_sort(column))
                        >
                            <span class=css::headerName>{label}</span>
                            {sort_icon.map(|icon| view! {
                                <span class=css::sortIcon><Icon icon=icon /></span>
                            })}
                        </button>
                        <span
                            class=css::resizeHandle
                            aria-hidden="true"
                            on:mousedown=move |ev: ev::MouseEvent| {
                                // Keep the header from starting a drag-and-drop
                                ev.prevent_default();
                                ev.stop_propagation();
                                resizing.set_value(Some(ResizeDrag {
                                    column,
                                    start_x: ev.client_x(),
                                    start_width: layout.with_untracked(|l| l.width(column)),
                                }));
                            }
                        />
                    </th>
                }
            })
            .collect_view()
    };

    let body_table = Arc::clone(&table);
    let body = move || {
        order.track();
        sort.track();
        let rows = layout.with_untracked(|l| l.rendered_rows(&body_table));

        rows.into_iter()
            .map(|row| {
                let cells = row
                    .into_iter()
                    .map(|(kind, text)| view! { <td class=cell_class(kind)>{text}</td> })
                    .collect_view();
                view! { <tr class=css::row>{cells}</tr> }
            })
            .collect_view()
    };

    view! {
        <div class=css::grid role="grid">
            <table class=css::table>
                <thead>
                    <tr>{header}</tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}
