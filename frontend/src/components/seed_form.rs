//! Free-text seed for a new document.

use leptos::*;
use web_sys::SubmitEvent;

use crate::state::{ViewAction, ViewModeMachine};

#[component]
pub fn SeedForm(machine: ViewModeMachine) -> impl IntoView {
    let (text, set_text) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = {
        let machine = machine.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            match machine.dispatch(ViewAction::Submit(text.get_untracked())) {
                Ok(()) => {
                    set_text.set(String::new());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        }
    };
    let on_back = move |_| {
        set_error.set(None);
        let _ = machine.dispatch(ViewAction::Back);
    };

    view! {
        <form class="seed-form" on:submit=on_submit>
            <h2>"What do you want to build?"</h2>
            <textarea
                class="seed-input"
                rows="6"
                placeholder="An online shop for handmade ceramics with a booking system for workshops..."
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />
            <Show
                when=move || error.get().is_some()
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>
            <div class="seed-actions">
                <button type="button" class="secondary-button" on:click=on_back>
                    "← Back"
                </button>
                <button type="submit" class="primary-button">
                    "Create document"
                </button>
            </div>
        </form>
    }
}
