//! Assign Cat Form Component
//!
//! Assigns an existing cat to an existing mission by id.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::blocking_prompt;
use crate::forms;
use crate::store::{self, use_app_store};

/// Form with mission id and cat id inputs. Clears itself after a
/// successful assignment.
#[component]
pub fn AssignCatForm() -> impl IntoView {
    let store = use_app_store();

    let (mission_id, set_mission_id) = signal(String::new());
    let (cat_id, set_cat_id) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match forms::parse_assign_cat(&mission_id.get(), &cat_id.get()) {
            Ok((mission, cat)) => {
                spawn_local(async move {
                    if store::assign_cat(store, mission, cat).await {
                        set_mission_id.set(String::new());
                        set_cat_id.set(String::new());
                    }
                });
            }
            Err(missing) => blocking_prompt(&forms::missing_fields_prompt(&missing)),
        }
    };

    view! {
        <section class="form-card">
            <h2>"Assign a Cat to a Mission"</h2>
            <form class="assign-cat-form" on:submit=on_submit>
                <input
                    type="number"
                    placeholder="Mission ID"
                    prop:value=move || mission_id.get()
                    on:input=move |ev| set_mission_id.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    placeholder="Cat ID"
                    prop:value=move || cat_id.get()
                    on:input=move |ev| set_cat_id.set(event_target_value(&ev))
                />
                <button type="submit">"Assign Cat"</button>
            </form>
        </section>
    }
}
