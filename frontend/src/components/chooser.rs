//! Dual-path chooser: attach files or author a new document.

use leptos::*;

use super::{HttpIngestion, UploadSection};
use crate::state::{ViewAction, ViewModeMachine};

#[component]
pub fn Chooser(machine: ViewModeMachine, ingestion: HttpIngestion) -> impl IntoView {
    let on_start = {
        let machine = machine.clone();
        move |_| {
            let _ = machine.dispatch(ViewAction::StartDocument);
        }
    };
    let on_converse = move |_| {
        let _ = machine.dispatch(ViewAction::Converse);
    };

    view! {
        <div class="chooser">
            <div class="chooser-card">
                <h2>"I have requirement documents"</h2>
                <UploadSection ingestion=ingestion/>
            </div>
            <div class="chooser-card">
                <h2>"I want to write a new specification"</h2>
                <p class="chooser-hint">
                    "Describe the product in a few sentences, or talk it through step by step."
                </p>
                <button class="primary-button" on:click=on_start>
                    "📝 Start a document"
                </button>
                <button class="secondary-button" on:click=on_converse>
                    "💬 Talk it through"
                </button>
            </div>
        </div>
    }
}
