use dioxus::prelude::*;

use crate::routes::Route;

/// 404 page for any path outside the sign-in and dashboard routes.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    "The page "
                    code { "{path}" }
                    " could not be found."
                }
                Link { to: Route::SignIn {},
                    class: "not-found-link",
                    "Return to Home"
                }
            }
        }
    }
}
