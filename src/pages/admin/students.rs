//! Student management screen.

#[cfg(test)]
#[path = "students_test.rs"]
mod students_test;

use std::collections::HashMap;

use leptos::prelude::*;

use crate::components::data_table::{DataTable, Paginator, TableRow};
use crate::components::form_dialog::{FieldKind, FieldSpec, FormDialog};
use crate::components::page_header::PageHeader;
use crate::net::admin::ListParams;
use crate::net::types::{Pagination, StudentRecord};
use crate::state::auth::AuthState;
use crate::util::form;

const COLUMNS: &[&str] = &["Code", "Name", "Email", "Guardian Phone", "Grade", "Status"];

const STATUS_OPTIONS: &[(&str, &str)] = &[("ACTIVE", "Active"), ("INACTIVE", "Inactive")];

fn specs() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("full_name", "Full name", FieldKind::Text).required(),
        FieldSpec::new("code", "Code", FieldKind::Text),
        FieldSpec::new("email", "Email", FieldKind::Email).with_validator(form::email),
        FieldSpec::new("phone", "Phone", FieldKind::Text),
        FieldSpec::new("guardian_phone", "Guardian phone", FieldKind::Text),
        FieldSpec::new("grade_level", "Grade level", FieldKind::Text),
        FieldSpec::new("status", "Status", FieldKind::Select(STATUS_OPTIONS)),
    ]
}

fn row(record: &StudentRecord) -> TableRow {
    TableRow {
        id: record.id.clone(),
        cells: vec![
            record.code.clone().unwrap_or_else(|| "-".to_owned()),
            record.full_name.clone(),
            record.email.clone().unwrap_or_default(),
            record.guardian_phone.clone().unwrap_or_default(),
            record.grade_level.clone().unwrap_or_default(),
            record.status.clone().unwrap_or_default(),
        ],
    }
}

fn edit_values(record: &StudentRecord) -> HashMap<&'static str, String> {
    let mut values = HashMap::new();
    values.insert("full_name", record.full_name.clone());
    values.insert("code", record.code.clone().unwrap_or_default());
    values.insert("email", record.email.clone().unwrap_or_default());
    values.insert("phone", record.phone.clone().unwrap_or_default());
    values.insert("guardian_phone", record.guardian_phone.clone().unwrap_or_default());
    values.insert("grade_level", record.grade_level.clone().unwrap_or_default());
    values.insert("status", record.status.clone().unwrap_or_default());
    values
}

fn payload(values: &HashMap<&'static str, String>) -> serde_json::Value {
    let text = |key: &str| values.get(key).map(|v| v.trim().to_owned()).unwrap_or_default();
    let mut body = serde_json::Map::new();
    body.insert("full_name".to_owned(), text("full_name").into());
    for key in ["code", "email", "phone", "guardian_phone", "grade_level", "status"] {
        let value = text(key);
        if !value.is_empty() {
            body.insert(key.to_owned(), value.into());
        }
    }
    serde_json::Value::Object(body)
}

#[component]
pub fn StudentsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let rows = RwSignal::new(Vec::<TableRow>::new());
    let records = RwSignal::new(Vec::<StudentRecord>::new());
    let pagination = RwSignal::new(Pagination::default());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let search_input = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let page = RwSignal::new(1_u64);
    let reload = RwSignal::new(0_u32);

    Effect::new(move || {
        reload.track();
        let params = ListParams {
            page: page.get(),
            limit: 20,
            search: search.get(),
            status: status.get(),
        };
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let token = auth.get_untracked().access_token;
                match crate::net::admin::list_students(token.as_deref(), &params).await {
                    Ok(list) => {
                        rows.set(list.students.iter().map(row).collect());
                        records.set(list.students);
                        pagination.set(list.pagination);
                    }
                    Err(err) => {
                        crate::state::session::handle_api_error(auth, &err);
                        error.set(Some(err.message));
                    }
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = params;
        }
    });

    let show_form = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<String>);
    let values = RwSignal::new(HashMap::<&'static str, String>::new());
    let form_busy = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);
    let delete_id = RwSignal::new(None::<String>);

    let on_create = move |_| {
        editing_id.set(None);
        values.set(HashMap::from([("status", "ACTIVE".to_owned())]));
        form_error.set(None);
        show_form.set(true);
    };

    let on_edit = Callback::new(move |id: String| {
        if let Some(record) = records.get_untracked().iter().find(|r| r.id == id) {
            editing_id.set(Some(id));
            values.set(edit_values(record));
            form_error.set(None);
            show_form.set(true);
        }
    });

    let on_delete_request = Callback::new(move |id: String| delete_id.set(Some(id)));
    let on_cancel = Callback::new(move |()| show_form.set(false));
    let on_delete_cancel = Callback::new(move |()| delete_id.set(None));

    let on_submit = Callback::new(move |()| {
        if form_busy.get() {
            return;
        }
        form_busy.set(true);
        form_error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = auth.get_untracked().access_token;
            let body = payload(&values.get_untracked());
            let result = match editing_id.get_untracked() {
                Some(id) => crate::net::admin::update_student(token.as_deref(), &id, &body).await.map(|_| ()),
                None => crate::net::admin::create_student(token.as_deref(), &body).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    show_form.set(false);
                    reload.update(|n| *n += 1);
                }
                Err(err) => {
                    crate::state::session::handle_api_error(auth, &err);
                    form_error.set(Some(err.message));
                }
            }
            form_busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        form_busy.set(false);
    });

    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = delete_id.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = auth.get_untracked().access_token;
            match crate::net::admin::delete_student(token.as_deref(), &id).await {
                Ok(_) => reload.update(|n| *n += 1),
                Err(err) => {
                    crate::state::session::handle_api_error(auth, &err);
                    error.set(Some(err.message));
                }
            }
            delete_id.set(None);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            delete_id.set(None);
        }
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        page.set(1);
        search.set(search_input.get().trim().to_owned());
    };

    let on_page = Callback::new(move |target: u64| page.set(target));

    view! {
        <div class="list-page">
            <PageHeader title="Students" subtitle="Enrolled students and their guardians"/>

            <div class="list-page__toolbar">
                <form class="list-page__search" on:submit=on_search>
                    <input
                        class="list-page__search-input"
                        type="text"
                        placeholder="Search by name or code"
                        prop:value=move || search_input.get()
                        on:input=move |ev| search_input.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">"Search"</button>
                </form>
                <select
                    class="list-page__filter"
                    prop:value=move || status.get()
                    on:change=move |ev| {
                        page.set(1);
                        status.set(event_target_value(&ev));
                    }
                >
                    <option value="">"All statuses"</option>
                    <option value="ACTIVE">"Active"</option>
                    <option value="INACTIVE">"Inactive"</option>
                </select>
                <span class="list-page__spacer"></span>
                <button class="btn btn--primary" on:click=on_create>"+ New Student"</button>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="list-page__alert">
                    <p>{move || error.get().unwrap_or_default()}</p>
                    <button class="btn btn--small" on:click=move |_| {
                        error.set(None);
                        reload.update(|n| *n += 1);
                    }>
                        "Back to list"
                    </button>
                </div>
            </Show>

            <DataTable
                columns=COLUMNS.to_vec()
                rows=rows
                loading=loading
                on_edit=on_edit
                on_delete=on_delete_request
            />
            <Paginator pagination=pagination on_page=on_page/>

            <Show when=move || show_form.get()>
                <FormDialog
                    title=if editing_id.get_untracked().is_some() { "Edit Student" } else { "Create Student" }
                    specs=specs()
                    values=values
                    busy=form_busy
                    error=form_error
                    on_cancel=on_cancel
                    on_submit=on_submit
                />
            </Show>

            <Show when=move || delete_id.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| on_delete_cancel.run(())>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Delete Student"</h2>
                        <p class="dialog__danger">"This will permanently remove this student record."</p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| on_delete_cancel.run(())>"Cancel"</button>
                            <button class="btn btn--danger" on:click=move |_| on_delete_confirm.run(())>"Delete"</button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
