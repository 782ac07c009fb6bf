use crate::routes::Route;
use crate::session::BrowserSession;
use crate::use_portal;
use dioxus::prelude::*;
use portal::SessionStore;

/// Sign-in page. Any non-empty username and password are accepted; the
/// username alone decides which dashboard opens.
#[component]
pub fn SignIn() -> Element {
    let portal = use_portal();
    let session = use_context::<BrowserSession>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    // Checked once on mount; a fresh sign-in navigates from the submit handler
    use_hook(|| {
        if let Some(route) = landing_route(session.is_authenticated()) {
            navigator().push(route);
        }
    });

    let handle_sign_in = move |evt: FormEvent| {
        let portal = portal.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            let result = portal.sign_in(&username(), &password()).await;
            loading.set(false);
            if let Some(route) = landing_route(result.is_ok()) {
                navigator().push(route);
            }
        }
    };

    rsx! {
        div { class: "auth-page",
            div { class: "card auth-card",
                div { class: "card-header",
                    h1 { class: "card-title", "Department Management System" }
                    p { class: "card-description", "Sign in to access your dashboard" }
                }

                form { class: "card-content", onsubmit: handle_sign_in,
                    div { class: "auth-field",
                        label { r#for: "username", "Username" }
                        input {
                            id: "username",
                            class: "input",
                            placeholder: "Enter your username",
                            value: username(),
                            disabled: loading(),
                            oninput: move |e: FormEvent| username.set(e.value()),
                        }
                    }
                    div { class: "auth-field",
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            class: "input",
                            r#type: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            disabled: loading(),
                            oninput: move |e: FormEvent| password.set(e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "auth-submit button",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }

                div { class: "card-footer auth-hint",
                    p { "Demo accounts: use \"hod\" for Head of Department, \"admin\" for Sub-Department Admin, or any other username for Team Member." }
                }
            }
        }
    }
}

/// Where the sign-in page sends a visitor who holds a role.
fn landing_route(authenticated: bool) -> Option<Route> {
    authenticated.then_some(Route::Dashboard {})
}
