use crate::latency::BrowserLatency;
use dioxus::prelude::*;
use portal::{Latency, Notifier};
use shared_types::{Notification, NotificationLevel};
use std::time::Duration;

/// How long a toast stays on screen.
const TOAST_LIFETIME: Duration = Duration::from_millis(4000);

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Notification sink that renders as a stack of toasts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn dismiss(&self, id: u64) {
        let mut items = self.items;
        items.write().retain(|t| t.id != id);
    }
}

impl Notifier for Toasts {
    fn notify(&self, notification: Notification) {
        let mut next_id = self.next_id;
        let id = *next_id.peek();
        next_id.set(id + 1);

        let mut items = self.items;
        items.write().push(Toast { id, notification });
    }
}

fn level_class(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Success => "toast toast-success",
        NotificationLevel::Error => "toast toast-error",
        NotificationLevel::Info => "toast toast-info",
    }
}

/// Fixed-position stack of the current toasts.
#[component]
pub fn ToastList() -> Element {
    let toasts = use_context::<Toasts>();
    let items = toasts.items.read().clone();

    rsx! {
        div { class: "toast-stack",
            for toast in items {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let toasts = use_context::<Toasts>();
    let id = toast.id;

    use_future(move || async move {
        BrowserLatency.pause(TOAST_LIFETIME).await;
        toasts.dismiss(id);
    });

    rsx! {
        div { class: level_class(toast.notification.level),
            div { class: "toast-body",
                p { class: "toast-title", "{toast.notification.title}" }
                if let Some(description) = toast.notification.description.as_ref() {
                    p { class: "toast-description", "{description}" }
                }
            }
            button {
                class: "toast-close",
                r#type: "button",
                onclick: move |_| toasts.dismiss(id),
                "×"
            }
        }
    }
}
