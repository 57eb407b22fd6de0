//! Data table and pagination controls for the admin list screens.

#[cfg(test)]
#[path = "data_table_test.rs"]
mod data_table_test;

use leptos::prelude::*;

use crate::net::types::Pagination;

/// One rendered table row: the record id plus pre-formatted cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub id: String,
    pub cells: Vec<String>,
}

/// Plain table over pre-formatted rows with edit/delete actions per row.
#[component]
pub fn DataTable(
    columns: Vec<&'static str>,
    rows: RwSignal<Vec<TableRow>>,
    loading: RwSignal<bool>,
    on_edit: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <p class="data-table__loading">"Loading..."</p> }
        >
            <table class="data-table">
                <thead>
                    <tr>
                        {columns.iter().map(|c| view! { <th>{*c}</th> }).collect::<Vec<_>>()}
                        <th class="data-table__actions-head">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || rows.get().is_empty()>
                        <tr>
                            <td class="data-table__empty" colspan="99">"No records found."</td>
                        </tr>
                    </Show>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|row| {
                                let edit_id = row.id.clone();
                                let delete_id = row.id.clone();
                                view! {
                                    <tr>
                                        {row.cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect::<Vec<_>>()}
                                        <td class="data-table__actions">
                                            <button class="btn btn--small" on:click=move |_| on_edit.run(edit_id.clone())>
                                                "Edit"
                                            </button>
                                            <button class="btn btn--small btn--danger" on:click=move |_| on_delete.run(delete_id.clone())>
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </Show>
    }
}

/// Previous/next paging controls fed by the list response's paging block.
#[component]
pub fn Paginator(pagination: RwSignal<Pagination>, on_page: Callback<u64>) -> impl IntoView {
    let summary = move || {
        let p = pagination.get();
        page_summary(&p)
    };

    view! {
        <div class="paginator">
            <button
                class="btn btn--small"
                disabled=move || !has_prev(&pagination.get())
                on:click=move |_| {
                    let p = pagination.get();
                    if has_prev(&p) {
                        on_page.run(p.current_page - 1);
                    }
                }
            >
                "Previous"
            </button>
            <span class="paginator__summary">{summary}</span>
            <button
                class="btn btn--small"
                disabled=move || !has_next(&pagination.get())
                on:click=move |_| {
                    let p = pagination.get();
                    if has_next(&p) {
                        on_page.run(p.current_page + 1);
                    }
                }
            >
                "Next"
            </button>
        </div>
    }
}

fn has_prev(p: &Pagination) -> bool {
    p.current_page > 1
}

fn has_next(p: &Pagination) -> bool {
    p.current_page < p.total_pages
}

fn page_summary(p: &Pagination) -> String {
    if p.total_pages == 0 {
        return "No results".to_owned();
    }
    format!("Page {} of {} ({} total)", p.current_page, p.total_pages, p.total_items)
}
