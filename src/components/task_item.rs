//! Task Item Component
//!
//! A single task row: completion checkbox, title, edit and delete
//! controls. Mutations apply locally first and revert if the remote call
//! fails; while a call for this task is outstanding its controls are
//! disabled.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::Task;
use crate::store::{
    store_apply, store_begin_op, store_finish_op, store_snapshot, use_task_store, with_removed,
    with_restored, with_toggled, TaskStateStoreFields,
};

#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let store = use_task_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = task.id.clone();
    let completed = task.completed;
    let title = task.title.clone();

    let toggle_disabled = {
        let id = id.clone();
        move || store.pending().get().is_pending(&id)
    };
    let edit_disabled = toggle_disabled.clone();

    let on_toggle = {
        let id = id.clone();
        move |_| {
            let id = id.clone();
            if store.pending().get_untracked().is_pending(&id) {
                return;
            }
            let before = store_snapshot(&store);
            let Some(current) = before.iter().find(|t| t.id == id) else {
                return;
            };
            // A task only stays in the list once its create was
            // acknowledged, so a missing remote reference is a guard, not
            // a reachable flow.
            let Some(remote_id) = current.remote_id else {
                web_sys::console::warn_1(&"Toggle before create was acknowledged".into());
                return;
            };
            let next_completed = !current.completed;
            let current_title = current.title.clone();
            store_apply(&store, with_toggled(&before, &id));
            let token = store_begin_op(&store, id.clone());

            spawn_local(async move {
                let result = api::update_task(remote_id, &current_title, next_completed).await;
                if !store_finish_op(&store, &id, token) {
                    return;
                }
                if let Err(error) = result {
                    store_apply(&store, with_toggled(&store_snapshot(&store), &id));
                    ctx.report_error(format!("Couldn't update task: {}", error));
                }
            });
        }
    };

    let on_edit = {
        let id = id.clone();
        move |_| {
            if store.pending().get_untracked().is_pending(&id) {
                return;
            }
            if let Some(current) = store_snapshot(&store).iter().find(|t| t.id == id) {
                ctx.begin_edit(current.clone());
            }
        }
    };

    let on_delete = {
        let id = id.clone();
        Callback::new(move |_: ()| {
            let id = id.clone();
            if store.pending().get_untracked().is_pending(&id) {
                return;
            }
            let before = store_snapshot(&store);
            let Some(current) = before.iter().find(|t| t.id == id) else {
                return;
            };
            let Some(remote_id) = current.remote_id else {
                web_sys::console::warn_1(&"Delete before create was acknowledged".into());
                return;
            };
            let (next, removed) = with_removed(&before, &id);
            let Some((index, removed_task)) = removed else {
                return;
            };
            store_apply(&store, next);
            let token = store_begin_op(&store, id.clone());

            spawn_local(async move {
                let result = api::delete_task(remote_id).await;
                if !store_finish_op(&store, &id, token) {
                    return;
                }
                if let Err(error) = result {
                    store_apply(
                        &store,
                        with_restored(&store_snapshot(&store), index, removed_task),
                    );
                    ctx.report_error(format!("Couldn't delete task: {}", error));
                }
            });
        })
    };

    view! {
        <li class=move || if completed { "task-item completed" } else { "task-item" }>
            <input
                type="checkbox"
                checked=completed
                disabled=toggle_disabled
                on:change=on_toggle
            />
            <span class="task-title">{title}</span>
            <button class="edit-btn" disabled=edit_disabled on:click=on_edit>"Edit"</button>
            <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
        </li>
    }
}
