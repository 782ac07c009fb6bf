pub mod dashboard;
pub mod not_found;
pub mod sign_in;

use crate::session::BrowserSession;
use crate::toast::Toasts;
use crate::use_portal;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdLayoutDashboard, LdLogOut};
use dioxus_free_icons::Icon;
use portal::views::announce_unread;
use portal::SessionStore;

use dashboard::Dashboard;
use not_found::NotFound;
use sign_in::SignIn;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    SignIn {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/dashboard")]
    Dashboard {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Sends visitors without a stored role back to the sign-in page.
#[component]
fn AuthGuard() -> Element {
    let session = use_context::<BrowserSession>();

    if session.is_authenticated() {
        rsx! { Outlet::<Route> {} }
    } else {
        navigator().push(Route::SignIn {});
        rsx! {
            div { class: "auth-guard-loading",
                p { "Redirecting to sign in..." }
            }
        }
    }
}

/// Unread count shown on the navbar bell.
const UNREAD_NOTIFICATIONS: u32 = 3;

/// Top bar with the signed-in role, a notification bell and a logout button.
#[component]
fn AppLayout() -> Element {
    let portal = use_portal();
    let toasts = use_context::<Toasts>();
    let session = use_context::<BrowserSession>();
    let role_name = session
        .get_role()
        .map(|r| r.display_name())
        .unwrap_or_default();

    let handle_logout = move |_| {
        if let Err(e) = portal.sign_out() {
            tracing::error!(error = %e, "sign out failed");
        }
        navigator().push(Route::SignIn {});
    };

    rsx! {
        div { class: "app-shell",
            header { class: "app-navbar",
                div { class: "app-brand",
                    Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 20, height: 20 }
                    span { class: "app-brand-name", "Department Management System" }
                }
                div { class: "app-navbar-user",
                    span { class: "app-navbar-role", "{role_name}" }
                    button {
                        class: "button button-ghost app-navbar-bell",
                        r#type: "button",
                        onclick: move |_| announce_unread(UNREAD_NOTIFICATIONS, &toasts),
                        Icon::<LdBell> { icon: LdBell, width: 16, height: 16 }
                        span { class: "badge", "{UNREAD_NOTIFICATIONS}" }
                    }
                    button {
                        class: "button button-ghost",
                        r#type: "button",
                        onclick: handle_logout,
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Logout"
                    }
                }
            }
            main { class: "app-content",
                Outlet::<Route> {}
            }
        }
    }
}
