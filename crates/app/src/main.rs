use dioxus::prelude::*;
use portal::{MockDashboardSource, Portal};
use std::rc::Rc;

mod format_helpers;
mod latency;
mod routes;
mod session;
mod toast;

use latency::BrowserLatency;
use routes::Route;
use session::BrowserSession;
use toast::{ToastList, Toasts};

/// The portal wired for the browser: `sessionStorage`-backed role,
/// timer-based delays, toasts as the notification sink.
pub type AppPortal = Portal<BrowserSession, MockDashboardSource<BrowserLatency>, Toasts, BrowserLatency>;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Hook to access the shared portal.
pub fn use_portal() -> Rc<AppPortal> {
    use_context::<Rc<AppPortal>>()
}

#[component]
fn App() -> Element {
    let session = use_context_provider(BrowserSession::new);
    let toasts = use_context_provider(Toasts::new);
    use_context_provider(|| {
        Rc::new(Portal::new(
            session,
            MockDashboardSource::new(BrowserLatency),
            toasts,
            BrowserLatency,
        ))
    });

    // Pick up a role left in sessionStorage by an earlier page load before
    // any route decides whether to redirect.
    let restored = use_resource(move || async move { session.restore().await });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        if restored.read().is_some() {
            Router::<Route> {}
        } else {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        }
        ToastList {}
    }
}
