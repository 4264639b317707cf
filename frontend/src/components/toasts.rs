//! Toast stack rendering the notification channel.

use leptos::*;

use crate::state::Toasts;

#[component]
pub fn ToastStack(toasts: Toasts) -> impl IntoView {
    let items = toasts.items();

    view! {
        <div class="toast-stack">
            <For
                each=move || items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast {}", toast.level.css_class())
                            on:click=move |_| toasts.dismiss(id)
                        >
                            <span class="toast-icon">{toast.level.emoji()}</span>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
