//! Mission Card Component
//!
//! One mission with its status, complete action, and nested target list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::Mission;
use crate::store::{self, use_app_store};

/// Card for a single mission. The "Mark as Completed" button is only shown
/// while the mission is still active.
#[component]
pub fn MissionCard(mission: Mission) -> impl IntoView {
    let store = use_app_store();
    let id = mission.id;
    let completed = mission.state;

    let status_class = if completed { "status completed" } else { "status active" };
    let cat_label = mission.cat_label();
    let status_label = mission.status_label();

    let on_complete = move |_| {
        spawn_local(async move {
            store::complete_mission(store, id).await;
        });
    };

    view! {
        <div class="mission-card">
            <h3>"Mission " <span class="mission-id">"#" {id}</span></h3>
            <p><strong>"Assigned Cat: "</strong> {cat_label}</p>
            <p><strong>"Status: "</strong> <span class=status_class>{status_label}</span></p>

            <Show when=move || !completed>
                <button class="complete-btn" on:click=on_complete>
                    "Mark as Completed"
                </button>
            </Show>

            <h4>"Targets:"</h4>
            {if mission.targets.is_empty() {
                view! { <p class="placeholder">"No targets for this mission."</p> }.into_any()
            } else {
                view! {
                    <ul class="target-list">
                        {mission.targets.iter().map(|target| {
                            let dot_class =
                                if target.state { "target-dot done" } else { "target-dot" };
                            view! {
                                <li class="target">
                                    <span class=dot_class></span>
                                    <div>
                                        <strong>{target.name.clone()}</strong>
                                        " (" {target.country.clone()} ")"
                                        <br/>
                                        <span class="target-notes">{target.notes.clone()}</span>
                                    </div>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                }
                .into_any()
            }}
        </div>
    }
}
