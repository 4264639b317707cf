//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Start your project"</h1>
            <p class="subtitle">
                "Attach the requirement documents you already have, "
                "or describe what you want to build and start a new specification."
            </p>
        </div>
    }
}
