//! Sun/moon button flipping the page-wide dark mode class.

use leptos::prelude::*;

use crate::state::ui::ThemeState;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    view! {
        <button
            class="btn nav-bar__dark-toggle"
            on:click=move |_| {
                theme.update(|t| {
                    t.toggle();
                });
            }
            title="Toggle dark mode"
        >
            {move || if theme.get().dark_mode { "☀" } else { "☾" }}
        </button>
    }
}
