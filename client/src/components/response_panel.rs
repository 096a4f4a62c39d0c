//! Right column of a chat view: the rendered answer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The same component serves both views; `mode` picks between escaped
//! markdown and verbatim backend markup (see `util::markup`).

use leptos::prelude::*;

use crate::state::chat::{ChatState, Outcome};
use crate::util::markup::{RenderMode, panel_html};

#[component]
pub fn ResponsePanel(mode: RenderMode) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let body_html = move || chat.with(|c| panel_html(mode, &c.response));
    let failed = move || chat.with(|c| c.last_outcome == Some(Outcome::Failure));
    let is_markdown = mode == RenderMode::Markdown;
    let is_raw = mode == RenderMode::TrustedRawMarkup;

    view! {
        <section class="response-panel">
            <h2 class="response-panel__heading">"Response"</h2>
            <div
                class="response-panel__body"
                class:response-panel__body--markdown=is_markdown
                class:response-panel__body--raw=is_raw
                class:response-panel__body--error=failed
                inner_html=body_html
            ></div>
        </section>
    }
}
