//! Task Editor Column
//!
//! Edit column bound to the editing buffer. Field changes touch the
//! buffer only; "Save" commits it through the usual optimistic update and
//! "Cancel" discards it without any remote call.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::AppContext;
use crate::models::{TaskDraft, TaskId};
use crate::store::{
    store_apply, store_begin_op, store_finish_op, store_snapshot, use_task_store, with_replaced,
    TaskStateStoreFields,
};

#[component]
pub fn TaskEditor() -> impl IntoView {
    let store = use_task_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Local field mirrors so typing doesn't re-render the inputs. Reseed
    // only when the edited task changes, not on every buffer write.
    let (title_value, set_title_value) = signal(String::new());
    let (completed_value, set_completed_value) = signal(false);
    let (last_target, set_last_target) = signal::<Option<TaskId>>(None);

    Effect::new(move |_| {
        match ctx.editing.get().task().cloned() {
            Some(task) => {
                let current = Some(task.id.clone());
                if last_target.get_untracked() != current {
                    set_last_target.set(current);
                    set_title_value.set(task.title);
                    set_completed_value.set(task.completed);
                }
            }
            None => set_last_target.set(None),
        }
    });

    let save = move || {
        let Some(mut task) = ctx.take_edit() else {
            return;
        };
        let check = TaskDraft {
            title: task.title.clone(),
            completed: task.completed,
        };
        if let Err(message) = check.validate() {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&message);
            }
            // Keep editing rather than committing an empty title.
            ctx.begin_edit(task);
            return;
        }
        if store.pending().get_untracked().is_pending(&task.id) {
            ctx.begin_edit(task);
            return;
        }
        task.title = task.title.trim().to_string();

        let before = store_snapshot(&store);
        let Some(previous) = before.iter().find(|t| t.id == task.id).cloned() else {
            return;
        };
        let Some(remote_id) = task.remote_id else {
            web_sys::console::warn_1(&"Save before create was acknowledged".into());
            return;
        };
        store_apply(&store, with_replaced(&before, task.clone()));
        let token = store_begin_op(&store, task.id.clone());

        spawn_local(async move {
            let result = api::update_task(remote_id, &task.title, task.completed).await;
            if !store_finish_op(&store, &task.id, token) {
                return;
            }
            if let Err(error) = result {
                store_apply(&store, with_replaced(&store_snapshot(&store), previous));
                ctx.report_error(format!("Couldn't save task: {}", error));
            }
        });
    };

    view! {
        <Show when=move || ctx.editing.get().is_editing()>
            <div class="task-editor-column">
                <div class="task-editor-header">
                    <span class="task-editor-title">"Edit Task"</span>
                    <button class="close-btn" on:click=move |_| ctx.cancel_edit()>"×"</button>
                </div>

                <div class="editor-section">
                    <label class="editor-label">"Title"</label>
                    <input
                        type="text"
                        class="title-edit-input"
                        prop:value=move || title_value.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_title_value.set(input.value());
                            ctx.edit_title(input.value());
                        }
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                save();
                            }
                        }
                    />
                </div>

                <div class="editor-section">
                    <label class="editor-label">"Status"</label>
                    <select
                        prop:value=move || if completed_value.get() { "true" } else { "false" }
                        on:change=move |ev| {
                            let target = ev.target().unwrap();
                            let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                            let completed = select.value() == "true";
                            set_completed_value.set(completed);
                            ctx.edit_completed(completed);
                        }
                    >
                        <option value="false">"Pending"</option>
                        <option value="true">"Completed"</option>
                    </select>
                </div>

                <div class="editor-actions">
                    <button class="save-btn" on:click=move |_| save()>"Save"</button>
                    <button class="cancel-btn" on:click=move |_| ctx.cancel_edit()>"Cancel"</button>
                </div>
            </div>
        </Show>
    }
}
