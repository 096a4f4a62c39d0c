//! Shared chat page: prompt in, one request out, answer rendered.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both chat routes mount this page with a different [`ChatView`]. The page
//! provides a fresh `RwSignal<ChatState>` to its components on every mount
//! and resets the page theme on mount and teardown, so no state survives
//! navigation.
//!
//! The request future is not cancelled on teardown. If it completes after the
//! view is gone the signal is already disposed and the result is dropped.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;

use crate::components::{
    loading_overlay::LoadingOverlay, nav_bar::NavBar, prompt_panel::PromptPanel,
    response_panel::ResponsePanel,
};
use crate::config::ClientConfig;
use crate::net::api::HttpExtractionApi;
use crate::net::types::Endpoint;
use crate::state::chat::ChatState;
use crate::state::ui::ThemeState;
use crate::util::markup::RenderMode;

/// What distinguishes one chat route from the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChatView {
    pub title: &'static str,
    pub endpoint: Endpoint,
    pub render_mode: RenderMode,
}

#[component]
pub fn ChatPage(chat_view: ChatView) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let theme = expect_context::<RwSignal<ThemeState>>();
    let chat = RwSignal::new(ChatState::default());
    provide_context(chat);

    theme.update(ThemeState::reset);
    on_cleanup(move || {
        let _ = theme.try_update(ThemeState::reset);
    });

    let endpoint = chat_view.endpoint;
    let on_send = Callback::new(move |()| {
        let Some(submission) = chat.try_update(|c| c.begin_submit(endpoint)) else {
            return;
        };
        let api = HttpExtractionApi::new(config.clone());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let settlement = crate::state::chat::fetch_answer(&api, submission).await;
            if chat.try_update(|c| c.settle(settlement)).is_none() {
                log::debug!("chat view closed before {} answered", endpoint.path());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, submission);
        }
    });

    view! {
        <div class="chat-page">
            <LoadingOverlay/>
            <NavBar title=chat_view.title/>
            <main class="chat-page__columns">
                <PromptPanel on_send=on_send/>
                <ResponsePanel mode=chat_view.render_mode/>
            </main>
            <footer class="chat-page__footer"></footer>
        </div>
    }
}
