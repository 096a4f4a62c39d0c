//! Top bar of a chat view: view title on the left, theme toggle on the right.

use leptos::prelude::*;

use super::theme_toggle::ThemeToggle;

#[component]
pub fn NavBar(title: &'static str) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <span class="nav-bar__title">{title}</span>
            <span class="nav-bar__spacer"></span>
            <ThemeToggle/>
        </nav>
    }
}
