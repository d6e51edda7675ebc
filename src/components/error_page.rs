//! Error Page Component
//!
//! Full-screen fallback shown when the mission list cannot be fetched at all.

use leptos::prelude::*;

/// Replaces the whole view with the blocking error and a retry button.
#[component]
pub fn ErrorPage(
    #[prop(into)] message: Signal<String>,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-page">
            <div class="error-card">
                <h2>"Oops! Something went wrong."</h2>
                <p class="error-message">{move || message.get()}</p>
                <button class="retry-btn" on:click=move |_| on_retry.run(())>
                    "Try Again"
                </button>
            </div>
        </div>
    }
}
