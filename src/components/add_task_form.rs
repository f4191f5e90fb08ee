//! Add Task Form Component
//!
//! Form for creating new tasks: title field, status selector, submit.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::AppContext;
use crate::models::{mint_task_id, TaskDraft};
use crate::store::{
    store_apply, store_begin_op, store_finish_op, store_snapshot, use_task_store, with_inserted,
    with_remote_ref, with_removed,
};

#[component]
pub fn AddTaskForm() -> impl IntoView {
    let store = use_task_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let (completed, set_completed) = signal(false);
    let (submitting, set_submitting) = signal(false);

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = TaskDraft {
            title: title.get(),
            completed: completed.get(),
        };

        // Validation failure blocks before any remote call is made.
        if let Err(message) = draft.validate() {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&message);
            }
            return;
        }
        if submitting.get() {
            return;
        }
        set_submitting.set(true);

        let task = draft.into_task(mint_task_id());
        // Optimistic append; rolled back below if the create fails. The
        // row's own controls stay disabled until the create resolves.
        store_apply(&store, with_inserted(&store_snapshot(&store), task.clone()));
        let token = store_begin_op(&store, task.id.clone());
        set_title.set(String::new());
        set_completed.set(false);

        spawn_local(async move {
            let result = api::create_task(&task.title, task.completed).await;
            if !store_finish_op(&store, &task.id, token) {
                set_submitting.set(false);
                return;
            }
            match result {
                Ok(remote) => {
                    store_apply(
                        &store,
                        with_remote_ref(&store_snapshot(&store), &task.id, remote.id),
                    );
                }
                Err(error) => {
                    store_apply(&store, with_removed(&store_snapshot(&store), &task.id).0);
                    ctx.report_error(format!("Couldn't add task: {}", error));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="add-task-form" on:submit=add_task>
            <h2>"Add Task"</h2>
            <label>
                "Title:"
                <input
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_title.set(input.value());
                    }
                />
            </label>
            <label>
                "Status:"
                <select
                    prop:value=move || if completed.get() { "true" } else { "false" }
                    on:change=move |ev| {
                        let target = ev.target().unwrap();
                        let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                        set_completed.set(select.value() == "true");
                    }
                >
                    <option value="false">"Pending"</option>
                    <option value="true">"Completed"</option>
                </select>
            </label>
            <button type="submit" disabled=move || submitting.get()>"Add Task"</button>
        </form>
    }
}
