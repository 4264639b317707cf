//! UI Components for the project start screen.
//!
//! # Layout Components
//! - [`ProjectStart`] - Screen root, ambient drop surface
//! - [`Hero`] - Title and description
//!
//! # Feature Components
//! - [`Chooser`] - Upload files or start a document
//! - [`UploadSection`] - File picker
//! - [`SeedForm`] - Free-text description of a new document
//! - [`FileList`] - Project files with delete buttons
//! - [`ToastStack`] - Notifications

mod chooser;
mod file_list;
mod hero;
mod project_start;
mod seed_form;
mod toasts;
mod upload;

pub use chooser::*;
pub use file_list::*;
pub use hero::*;
pub use project_start::*;
pub use seed_form::*;
pub use toasts::*;
pub use upload::*;
