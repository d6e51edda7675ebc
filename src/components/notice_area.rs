//! Notice Area Component
//!
//! Renders transient alerts from failed or succeeded mutations. Each notice
//! has a dismiss button and also times out on its own (see `store::notify`).

use leptos::prelude::*;

use crate::store::{store_dismiss_notice, use_app_store, AppStateStoreFields};

#[component]
pub fn NoticeArea() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="notice-area">
            <For
                each=move || store.notices().get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class="notice">
                            <span class="notice-message">{notice.message.clone()}</span>
                            <button
                                class="notice-dismiss"
                                on:click=move |_| store_dismiss_notice(&store, id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
