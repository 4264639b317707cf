//! List of the project's files with per-file delete buttons.

use leptos::*;

use crate::services::HttpFileApi;
use crate::state::{DeletionCoordinator, FileStore};

#[component]
pub fn FileList(store: FileStore, deletion: DeletionCoordinator<HttpFileApi>) -> impl IntoView {
    let files = store.files();

    view! {
        <Show
            when=move || files.with(|f| !f.is_empty())
            fallback=|| view! { }
        >
            <div class="file-list">
                <div class="file-list-header">
                    {move || format!("📁 Project files ({})", files.with(Vec::len))}
                </div>
                <For
                    each=move || files.get()
                    key=|file| file.id.clone()
                    children={
                        let deletion = deletion.clone();
                        move |file| {
                            let busy_check = deletion.clone();
                            let id = file.id.clone();
                            let is_deleting = move || busy_check.is_deleting(&id);

                            let on_delete = {
                                let deletion = deletion.clone();
                                let id = file.id.clone();
                                move |_| {
                                    let deletion = deletion.clone();
                                    let id = id.clone();
                                    spawn_local(async move {
                                        let _ = deletion.request_delete(&id).await;
                                    });
                                }
                            };

                            let row_busy = is_deleting.clone();
                            let button_busy = is_deleting.clone();
                            let kind = file.kind();
                            view! {
                                <div class="file-row" class:deleting=row_busy>
                                    <span class="file-icon">{kind.icon()}</span>
                                    <span class="file-name" title=file.name.clone()>{file.name.clone()}</span>
                                    <span class="file-size">{file.size_label()}</span>
                                    {file.created_label().map(|date| view! {
                                        <span class="file-date">{date}</span>
                                    })}
                                    <button
                                        class="file-delete"
                                        disabled=button_busy
                                        on:click=on_delete
                                    >
                                        {move || if is_deleting() { "Deleting..." } else { "Delete" }}
                                    </button>
                                </div>
                            }
                        }
                    }
                />
            </div>
        </Show>
    }
}
