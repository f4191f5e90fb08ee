//! Task List Component
//!
//! Renders the store's ordered collection, one row per record.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::store::{use_task_store, TaskStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_task_store();

    view! {
        <div class="task-list">
            <h2>"Task List"</h2>
            <ul>
                <For
                    // Key on the rendered fields so an in-place change
                    // (toggle, edit) re-creates its row.
                    each=move || store.tasks().get()
                    key=|task| (task.id.clone(), task.title.clone(), task.completed)
                    children=move |task| view! { <TaskItem task=task /> }
                />
            </ul>
            <p class="task-count">
                {move || format!("{} tasks", store.tasks().get().len())}
            </p>
        </div>
    }
}
