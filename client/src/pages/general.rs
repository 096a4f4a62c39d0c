//! General HCL chat: answers rendered as sanitized markdown.

use leptos::prelude::*;

use super::chat::{ChatPage, ChatView};
use crate::net::types::Endpoint;
use crate::util::markup::RenderMode;

pub const GENERAL_VIEW: ChatView = ChatView {
    title: "General HCL Info",
    endpoint: Endpoint::General,
    render_mode: RenderMode::Markdown,
};

#[component]
pub fn GeneralChatPage() -> impl IntoView {
    view! { <ChatPage chat_view=GENERAL_VIEW/> }
}
