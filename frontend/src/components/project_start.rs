//! Initial-state screen of a project.
//!
//! The whole screen is a drop surface: files dropped anywhere go through
//! the same ingestion path as the picker.

use std::rc::Rc;

use leptos::*;
use web_sys::DragEvent;

use super::{dropped_files, submit_files, Chooser, FileList, Hero, SeedForm, ToastStack};
use crate::services::{FileApi, LocalStorageToken};
use crate::state::{HttpProjectFiles, ProjectFiles, Toasts, ViewMode, ViewModeMachine};
use crate::{AUTH_TOKEN_KEY, BACKEND_URL};

#[component]
pub fn ProjectStart(
    /// Current project, `None` leaves the file list empty
    project_id: Option<String>,
    /// Downstream document-creation flow, receives the seed text
    on_create_document: Callback<String>,
    /// Fired after every successful upload
    #[prop(optional)]
    on_files_changed: Option<Callback<()>>,
) -> impl IntoView {
    let toasts = Toasts::new();
    let endpoint = Rc::new(FileApi::new(BACKEND_URL, LocalStorageToken::new(AUTH_TOKEN_KEY)));
    let files: HttpProjectFiles = ProjectFiles::new(endpoint, project_id, toasts, on_files_changed);
    let machine = ViewModeMachine::new(on_create_document);
    let mode = machine.mode();
    let (dragging, set_dragging) = create_signal(false);

    // Initial listing
    {
        let files = files.clone();
        spawn_local(async move {
            let _ = files.load().await;
        });
    }

    let on_drop = {
        let ingestion = files.ingestion.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_dragging.set(false);
            submit_files(&ingestion, dropped_files(&ev));
        }
    };

    let chooser_machine = machine.clone();
    let seed_machine = machine.clone();
    let ingestion = files.ingestion.clone();

    view! {
        <div
            class="project-start"
            class:dragging=move || dragging.get()
            on:dragover=move |ev: DragEvent| {
                ev.prevent_default();
                set_dragging.set(true);
            }
            on:dragleave=move |_| set_dragging.set(false)
            on:drop=on_drop
        >
            <Hero/>

            {move || match mode.get() {
                ViewMode::Chooser => view! {
                    <Chooser machine=chooser_machine.clone() ingestion=ingestion.clone()/>
                }
                .into_view(),
                ViewMode::AuthoringSeed => view! {
                    <SeedForm machine=seed_machine.clone()/>
                }
                .into_view(),
            }}

            <FileList store=files.store deletion=files.deletion.clone()/>
            <ToastStack toasts=toasts/>
        </div>
    }
}
