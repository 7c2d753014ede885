//! User-facing notifications: system notification plus an in-page toast.
//!
//! The system notification only fires once the user granted permission;
//! the toast always shows, so nothing is lost when permission is denied.

use leptos::prelude::*;

use crate::state::toasts::{ToastKind, ToastState};

pub const NOTIFICATION_TITLE: &str = "专注助手";

/// Show `message` as a system notification (when allowed) and a toast.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: &str) {
    show_system_notification(message);
    let now = crate::util::clock::now_ms();
    toasts.update(|t| {
        t.push(kind, message, now);
    });
}

/// Ask for notification permission if the user has not decided yet.
pub fn request_permission() {
    #[cfg(feature = "hydrate")]
    {
        use web_sys::{Notification, NotificationPermission};
        if Notification::permission() == NotificationPermission::Default {
            let _ = Notification::request_permission();
        }
    }
}

fn show_system_notification(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        use web_sys::{Notification, NotificationOptions, NotificationPermission};
        if Notification::permission() != NotificationPermission::Granted {
            return;
        }
        let options = NotificationOptions::new();
        options.set_body(message);
        if let Err(e) = Notification::new_with_options(NOTIFICATION_TITLE, &options) {
            leptos::logging::warn!("notification failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
