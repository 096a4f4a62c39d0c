//! Full-screen spinner shown while a request is in flight.

use leptos::prelude::*;

use crate::state::chat::{ChatPhase, ChatState};

/// Blocks interaction with the page while the view is submitting.
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    view! {
        <Show when=move || chat.with(|c| c.phase() == ChatPhase::Submitting)>
            <div class="loading-overlay" role="status" aria-live="polite">
                <div class="loading-overlay__content">
                    <div class="loader"></div>
                    <p class="loading-overlay__label">"Loading..."</p>
                </div>
            </div>
        </Show>
    }
}
