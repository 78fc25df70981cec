//! Shared context for SolarOps pages.
//!
//! Provides the toast slot and the launch configuration to all components.
//!
//! ## Usage
//!
//! ```ignore
//! let toast = use_toast();
//! show_toast(toast, "Form Data Submitted Successfully");
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dioxus::prelude::*;

use crate::AppConfig;

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

/// A transient confirmation message
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed),
            message: message.into(),
        }
    }
}

/// Get the launch configuration.
pub fn get_config() -> AppConfig {
    crate::get_config()
}

/// Hook to access the toast slot from context.
pub fn use_toast() -> Signal<Option<Toast>> {
    use_context::<Signal<Option<Toast>>>()
}

/// Hook to access the pending start-page redirect.
///
/// True until the login page has applied `--start` once.
pub fn use_start_pending() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

/// Show a toast and clear it after [`TOAST_DURATION`].
///
/// A newer toast is never cleared by an older timer.
pub fn show_toast(mut slot: Signal<Option<Toast>>, message: impl Into<String>) {
    let toast = Toast::new(message);
    let id = toast.id;
    slot.set(Some(toast));

    spawn(async move {
        tokio::time::sleep(TOAST_DURATION).await;
        if slot.peek().as_ref().is_some_and(|t| t.id == id) {
            slot.set(None);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique() {
        let a = Toast::new("first");
        let b = Toast::new("second");
        assert_ne!(a.id, b.id);
        assert_eq!(b.message, "second");
    }
}
