//! Cat Mission Control App
//!
//! Root component: provides the store and context, drives the mission list
//! fetch, and swaps the whole view for the fallback on a blocking error.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{AssignCatForm, ErrorPage, MissionList, NewMissionForm, NoticeArea};
use crate::context::AppContext;
use crate::store::{self, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger));
    provide_context(ctx);

    // Fetch missions on mount and on every reload (including retry)
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(
            &format!("[APP] Fetching missions, trigger={}", trigger).into(),
        );
        spawn_local(async move {
            store::refresh(store).await;
        });
    });

    view! {
        <Show
            when=move || store.error().read().is_none()
            fallback=move || {
                view! {
                    <ErrorPage
                        message=Signal::derive(move || {
                            store.error().get().unwrap_or_default()
                        })
                        on_retry=Callback::new(move |_| ctx.reload())
                    />
                }
            }
        >
            <div class="app-shell">
                <h1>"Cat Mission Control 🐾"</h1>
                <NoticeArea />
                <div class="form-grid">
                    <AssignCatForm />
                    <NewMissionForm />
                </div>
                <MissionList />
            </div>
        </Show>
    }
}
