//! Landing page with one button per chat view.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::{GENERAL_PATH, TIMPARK_PATH};

/// Button label and target route, in display order.
pub const DESTINATIONS: [(&str, &str); 2] = [("General HCL", GENERAL_PATH), ("Timpark HCL", TIMPARK_PATH)];

#[component]
pub fn LandingPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="landing-page">
            <div class="landing-card">
                <h1 class="landing-card__title">"Welcome to HCL Chat"</h1>
                <div class="landing-card__actions">
                    {DESTINATIONS
                        .into_iter()
                        .map(|(label, path)| {
                            let navigate = navigate.clone();
                            view! {
                                <button
                                    class="btn landing-card__button"
                                    on:click=move |_| navigate(path, Default::default())
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
