//! Severity-tagged messages for the toast surface.

use leptos::*;

use crate::config::MAX_TOASTS;
use crate::types::{Toast, ToastLevel};

#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    /// Toasts currently on screen, oldest first.
    pub fn items(&self) -> Signal<Vec<Toast>> {
        self.items.into()
    }

    pub fn snapshot(&self) -> Vec<Toast> {
        self.items.get_untracked()
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Info, message)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Error, message)
    }

    pub fn push(&self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let toast = Toast {
            id,
            level,
            message: message.into(),
        };
        match level {
            ToastLevel::Info => log::info!("{} {}", level.emoji(), toast.message),
            ToastLevel::Error => log::error!("{} {}", level.emoji(), toast.message),
        }

        self.items.update(|items| {
            items.push(toast);
            // Keep max toasts on screen
            if items.len() > MAX_TOASTS {
                items.remove(0);
            }
        });

        #[cfg(target_arch = "wasm32")]
        {
            let toasts = *self;
            gloo_timers::callback::Timeout::new(crate::config::TOAST_TIMEOUT_MS, move || {
                toasts.dismiss(id);
            })
            .forget();
        }

        id
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|t| t.id != id));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}
