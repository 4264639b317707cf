//! Project Files - Frontend Rust/Leptos Application
//!
//! The start screen of a project workspace: attach existing requirement
//! documents to the project, or begin authoring a new specification.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     ProjectStart                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero                                                        │
//! │  Chooser (UploadSection + start buttons) or SeedForm         │
//! │  FileList                                                    │
//! │  ToastStack                                                  │
//! └─────────────────────────────────────────────────────────────┘
//!          │ drop / pick / delete / submit
//!          ▼
//! ┌──────────────────┐   ┌──────────────────┐   ┌──────────────┐
//! │ Ingestion /      │──▶│ FileEndpoint     │──▶│ file service │
//! │ Deletion         │   │ (gloo-net)       │   │ /api/files/* │
//! └────────┬─────────┘   └──────────────────┘   └──────────────┘
//!          ▼
//!     FileStore (signals) ──▶ re-render
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (FileAsset, Toast, FileError, etc.)
//! - [`services`] - Backend communication (file endpoint, credentials)
//! - [`state`] - Store, coordinators and view-mode machine
//! - [`components`] - UI components

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod state;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    FileAsset, FileKind,
    // Toasts
    Toast, ToastLevel,
    // API
    DeleteReceipt, UploadReceipt,
    // Errors
    FileError, FileResult,
};

// Components
pub use components::{ProjectStart, ToastStack};

// Services
pub use services::{CredentialSource, FileApi, FileEndpoint, LocalStorageToken};

// State
pub use state::{FileStore, ProjectFiles, Toasts, ViewMode, ViewModeMachine};

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Project Files - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Project files"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=StartPage/>
                    <Route path="/documents/new" view=DocumentHandoff/>
                </Routes>
            </main>
        </Router>
    }
}

/// Start screen for the project named in `?project=`.
#[component]
fn StartPage() -> impl IntoView {
    let query = use_query_map();
    let project_id = query
        .with_untracked(|q| q.get("project").cloned())
        .filter(|id| !id.trim().is_empty());

    if project_id.is_none() {
        log::warn!("⚠️ No project in URL, file list disabled");
    }

    let navigate = use_navigate();
    let handoff_project = project_id.clone().unwrap_or_default();
    let on_create_document = Callback::new(move |seed: String| {
        let path = format!(
            "/documents/new?project={}&seed={}",
            urlencoding::encode(&handoff_project),
            urlencoding::encode(&seed)
        );
        navigate(&path, Default::default());
    });

    view! {
        <div class="container">
            <ProjectStart project_id=project_id on_create_document=on_create_document/>
        </div>
    }
}

/// Landing point of the document-authoring flow, which lives elsewhere.
#[component]
fn DocumentHandoff() -> impl IntoView {
    let query = use_query_map();
    let seed = move || query.with(|q| q.get("seed").cloned().unwrap_or_default());

    view! {
        <div class="container">
            <div class="hero">
                <h1>"Drafting your document..."</h1>
                <Show
                    when=move || !seed().is_empty()
                    fallback=|| view! { <p class="subtitle">"Starting a guided conversation."</p> }
                >
                    <p class="subtitle">{seed}</p>
                </Show>
            </div>
        </div>
    }
}
