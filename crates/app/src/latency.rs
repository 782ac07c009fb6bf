use dioxus::prelude::*;
use portal::Latency;
use std::future::Future;
use std::time::Duration;

/// Simulated network delay backed by the webview's `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLatency;

pub(crate) fn timeout_script(duration: Duration) -> String {
    format!(
        "await new Promise((resolve) => setTimeout(resolve, {})); return true;",
        duration.as_millis()
    )
}

impl Latency for BrowserLatency {
    fn pause(&self, duration: Duration) -> impl Future<Output = ()> {
        async move {
            if duration.is_zero() {
                return;
            }
            if let Err(e) = document::eval(&timeout_script(duration)).await {
                tracing::warn!(error = ?e, "timer eval failed, continuing without delay");
            }
        }
    }
}
