//! Timpark HCL chat.
//!
//! The Timpark endpoint returns preformatted HTML, so this view opts into
//! verbatim injection instead of markdown rendering.

use leptos::prelude::*;

use super::chat::{ChatPage, ChatView};
use crate::net::types::Endpoint;
use crate::util::markup::RenderMode;

pub const TIMPARK_VIEW: ChatView = ChatView {
    title: "Timpark HCL Info",
    endpoint: Endpoint::Timpark,
    render_mode: RenderMode::TrustedRawMarkup,
};

#[component]
pub fn TimparkChatPage() -> impl IntoView {
    view! { <ChatPage chat_view=TIMPARK_VIEW/> }
}
