//! Mission List Component
//!
//! Grid of mission cards with loading and empty placeholders.

use leptos::prelude::*;

use crate::components::MissionCard;
use crate::store::{use_app_store, AppStateStoreFields};

/// Mission overview list driven by the store.
#[component]
pub fn MissionList() -> impl IntoView {
    let store = use_app_store();

    let loading = move || store.loading().get();
    let empty = move || store.missions().read().is_empty();

    view! {
        <section class="missions">
            <h2>"Current Missions Overview"</h2>

            <Show when=loading>
                <p class="placeholder">"Loading missions..."</p>
            </Show>
            <Show when=move || !loading() && empty()>
                <p class="placeholder">"No missions found. Create one!"</p>
            </Show>

            <Show when=move || !loading()>
                <div class="mission-grid">
                    <For
                        each=move || store.missions().get()
                        key=|mission| {
                            // Key on every field that can change across refetches
                            // so a replaced list re-renders its cards
                            (
                                mission.id,
                                mission.cat,
                                mission.state,
                                mission
                                    .targets
                                    .iter()
                                    .map(|t| (t.id, t.state))
                                    .collect::<Vec<_>>(),
                            )
                        }
                        children=move |mission| view! { <MissionCard mission=mission /> }
                    />
                </div>
            </Show>
        </section>
    }
}
