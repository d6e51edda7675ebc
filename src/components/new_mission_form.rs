//! New Mission Form Component
//!
//! Creates a mission with a single target; the cat assignment is optional.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::blocking_prompt;
use crate::forms;
use crate::store::{self, use_app_store};

/// Form for creating a new mission. Clears itself after a successful create.
#[component]
pub fn NewMissionForm() -> impl IntoView {
    let store = use_app_store();

    let (cat_id, set_cat_id) = signal(String::new());
    let (target_name, set_target_name) = signal(String::new());
    let (target_country, set_target_country) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match forms::build_new_mission(&cat_id.get(), &target_name.get(), &target_country.get()) {
            Ok(mission) => {
                spawn_local(async move {
                    if store::create_mission(store, &mission).await {
                        set_cat_id.set(String::new());
                        set_target_name.set(String::new());
                        set_target_country.set(String::new());
                    }
                });
            }
            Err(missing) => blocking_prompt(&forms::missing_fields_prompt(&missing)),
        }
    };

    view! {
        <section class="form-card">
            <h2>"Create a New Mission"</h2>
            <form class="new-mission-form" on:submit=on_submit>
                <input
                    type="number"
                    placeholder="Cat ID (optional)"
                    prop:value=move || cat_id.get()
                    on:input=move |ev| set_cat_id.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Target Name"
                    prop:value=move || target_name.get()
                    on:input=move |ev| set_target_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Target Country"
                    prop:value=move || target_country.get()
                    on:input=move |ev| set_target_country.set(event_target_value(&ev))
                />
                <button type="submit">"Create Mission"</button>
            </form>
        </section>
    }
}
