// web_app/components/common.rs - Reusable UI components
//
// Small, composable components used throughout the application.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;
use crate::web_app::model::{Notification, NotifyKind};

/// How long a toast stays on screen before dismissing itself
#[cfg(feature = "hydrate")]
const TOAST_TIMEOUT: std::time::Duration = std::time::Duration::from_millis(3500);

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-8">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Tailwind classes for a toast of the given kind
pub fn toast_class(kind: NotifyKind) -> &'static str {
    match kind {
        NotifyKind::Warning => "toast bg-yellow-50 border border-yellow-300 text-yellow-900",
        NotifyKind::Failure => "toast bg-red-50 border border-red-300 text-red-800",
        NotifyKind::Info => "toast bg-blue-50 border border-blue-300 text-blue-800",
    }
}

fn toast_icon(kind: NotifyKind) -> &'static str {
    match kind {
        NotifyKind::Warning => "⚠",
        NotifyKind::Failure => "✖",
        NotifyKind::Info => "ℹ",
    }
}

/// One notification toast
///
/// Dismisses itself after a few seconds in the browser; the close button
/// dismisses it immediately.
#[component]
pub fn Toast(
    notification: Notification,
    on_dismiss: Callback<u64>,
) -> impl IntoView {
    let id = notification.id;

    #[cfg(feature = "hydrate")]
    set_timeout(move || on_dismiss.run(id), TOAST_TIMEOUT);

    view! {
        <div class=toast_class(notification.kind) role="status">
            <span class="font-bold">{toast_icon(notification.kind)}</span>
            <p class="flex-1 text-sm">{notification.message}</p>
            <button
                type="button"
                class="text-sm opacity-60 hover:opacity-100"
                title="Dismiss"
                on:click=move |_| on_dismiss.run(id)
            >
                "×"
            </button>
        </div>
    }
}

/// Stack of active notifications, newest last
#[component]
pub fn Toasts(
    notifications: Signal<Vec<Notification>>,
    on_dismiss: Callback<u64>,
) -> impl IntoView {
    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 w-80">
            <For
                each=move || notifications.get()
                key=|n| n.id
                children=move |notification| view! {
                    <Toast notification on_dismiss />
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_class_per_kind() {
        assert!(toast_class(NotifyKind::Warning).contains("yellow"));
        assert!(toast_class(NotifyKind::Failure).contains("red"));
        assert!(toast_class(NotifyKind::Info).contains("blue"));
    }

    #[test]
    fn test_toast_icons_distinct() {
        let icons = [
            toast_icon(NotifyKind::Warning),
            toast_icon(NotifyKind::Failure),
            toast_icon(NotifyKind::Info),
        ];
        assert_ne!(icons[0], icons[1]);
        assert_ne!(icons[1], icons[2]);
    }
}
