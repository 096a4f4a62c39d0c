//! Left column of a chat view: prompt textarea and send button.
//!
//! Submission only happens on the button; typing just updates the prompt.

use leptos::prelude::*;

use crate::state::chat::ChatState;

#[component]
pub fn PromptPanel(on_send: Callback<()>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    view! {
        <section class="prompt-panel">
            <h2 class="prompt-panel__heading">"Enter Prompt"</h2>
            <textarea
                class="prompt-panel__input"
                placeholder="Type your message..."
                prop:value=move || chat.with(|c| c.prompt.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    chat.update(|c| c.prompt = value);
                }
            ></textarea>
            <button class="btn btn--send prompt-panel__send" on:click=move |_| on_send.run(())>
                <span>"Send"</span>
                <span class="prompt-panel__send-icon" aria-hidden="true">"➤"</span>
            </button>
        </section>
    }
}
