//! Task Manager App
//!
//! Root component: owns the store and context, loads the first page of
//! remote tasks on mount, and lays out the form, list, and editor column.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{AddTaskForm, ErrorBanner, TaskEditor, TaskList};
use crate::context::AppContext;
use crate::edit::EditBuffer;
use crate::models::{mint_task_id, Task};
use crate::store::{store_load_tasks, TaskState, TaskStore};

#[component]
pub fn App() -> impl IntoView {
    let store: TaskStore = Store::new(TaskState::default());
    provide_context(store);

    let editing = signal(EditBuffer::default());
    let last_error = signal(None::<String>);
    let ctx = AppContext::new(editing, last_error);
    provide_context(ctx);

    // Initial load: a full replace of the collection, never an append. On
    // failure the store keeps its prior state (empty on first load).
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_tasks().await {
                Ok(remote) => {
                    let tasks: Vec<Task> = remote
                        .into_iter()
                        .map(|record| Task::from_remote(mint_task_id(), record))
                        .collect();
                    store_load_tasks(&store, tasks);
                }
                Err(error) => {
                    web_sys::console::error_1(
                        &format!("Error fetching tasks: {}", error).into(),
                    );
                    ctx.report_error(format!("Couldn't load tasks: {}", error));
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Task Manager"</h1>
                <ErrorBanner />
                <AddTaskForm />
                <TaskList />
            </main>
            <TaskEditor />
        </div>
    }
}
