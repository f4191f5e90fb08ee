//! Error Banner Component
//!
//! Non-blocking banner for remote failures: dismissible, auto-expiring.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;

const DISMISS_AFTER_MS: u32 = 5_000;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Each new message restarts the expiry clock; a stale timer must not
    // clear a newer message.
    let (generation, set_generation) = signal(0u32);

    Effect::new(move |_| {
        if ctx.last_error.get().is_some() {
            let current = generation.get_untracked() + 1;
            set_generation.set(current);
            spawn_local(async move {
                TimeoutFuture::new(DISMISS_AFTER_MS).await;
                if generation.get_untracked() == current {
                    ctx.clear_error();
                }
            });
        }
    });

    view! {
        {move || ctx.last_error.get().map(|message| view! {
            <div class="error-banner">
                <span>{message}</span>
                <button class="dismiss-btn" on:click=move |_| ctx.clear_error()>"×"</button>
            </div>
        })}
    }
}
