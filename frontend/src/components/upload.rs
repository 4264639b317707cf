//! File upload with picker and drag & drop support.
//!
//! Both entry points normalize their input into a `Vec<File>` and hand it
//! to the ingestion coordinator.

use leptos::*;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement};

use crate::services::HttpFileApi;
use crate::state::IngestionCoordinator;
use crate::ACCEPTED_EXTENSIONS;

pub type HttpIngestion = IngestionCoordinator<HttpFileApi>;

/// Collect the entries of a browser `FileList`.
pub fn collect_files(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Start an upload unless the batch is empty or one is already running.
pub fn submit_files(ingestion: &HttpIngestion, files: Vec<File>) {
    if files.is_empty() {
        return;
    }
    if ingestion.is_uploading() {
        log::warn!("⚠️ Upload in progress, ignoring {} file(s)", files.len());
        return;
    }

    let ingestion = ingestion.clone();
    spawn_local(async move {
        let _ = ingestion.ingest(files).await;
    });
}

/// Files carried by a drop event.
pub fn dropped_files(ev: &DragEvent) -> Vec<File> {
    ev.data_transfer()
        .and_then(|transfer| transfer.files())
        .map(|list| collect_files(&list))
        .unwrap_or_default()
}

#[component]
pub fn UploadSection(ingestion: HttpIngestion) -> impl IntoView {
    let uploading = ingestion.uploading();

    // Picker entry point
    let on_file_change = {
        let ingestion = ingestion.clone();
        move |ev: Event| {
            let input: HtmlInputElement = event_target(&ev);
            let files = input.files().map(|list| collect_files(&list)).unwrap_or_default();

            submit_files(&ingestion, files);

            // Allow picking the same file again
            input.set_value("");
        }
    };

    view! {
        <div class="upload-section" id="uploadZone">
            <div class="upload-icon">"📤"</div>
            <div class="upload-text">
                {move || if uploading.get() {
                    "⏳ Uploading..."
                } else {
                    "Drop requirement documents anywhere on this page"
                }}
            </div>

            <Show
                when=move || !uploading.get()
                fallback=|| view! { }
            >
                <div class="upload-hint">"or pick them from your computer"</div>
                <div class="upload-hint mt-20">
                    "PDF, Word, text and Markdown documents"
                </div>
            </Show>

            <input
                type="file"
                id="fileInput"
                accept=ACCEPTED_EXTENSIONS
                multiple=true
                style="display:none"
                disabled=move || uploading.get()
                on:change=on_file_change
            />

            <Show
                when=move || !uploading.get()
                fallback=|| view! { }
            >
                <label for="fileInput" class="upload-button">
                    "Choose files"
                </label>
            </Show>
        </div>
    }
}
