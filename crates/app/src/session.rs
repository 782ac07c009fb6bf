use dioxus::prelude::*;
use portal::session::decode_role;
use portal::{SessionStore, ROLE_KEY};
use shared_types::{AppError, Role};

/// Role storage for the web shell.
///
/// The signal drives rendering; every write is mirrored into the browser's
/// `sessionStorage` so the role survives a reload but not the tab.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrowserSession {
    role: Signal<Option<Role>>,
}

impl BrowserSession {
    pub fn new() -> Self {
        Self {
            role: Signal::new(None),
        }
    }

    /// Load any role a previous page load left in `sessionStorage`.
    pub async fn restore(&self) {
        let stored = match document::eval(&get_item_script()).join::<Option<String>>().await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = ?e, "could not read sessionStorage");
                None
            }
        };
        let mut role = self.role;
        role.set(decode_role(stored.as_deref()));
    }

    fn mirror(&self, script: String) {
        spawn(async move {
            if let Err(e) = document::eval(&script).await {
                tracing::warn!(error = ?e, "could not write sessionStorage");
            }
        });
    }
}

impl SessionStore for BrowserSession {
    fn get_role(&self) -> Option<Role> {
        *self.role.read()
    }

    fn set_role(&self, role: Role) -> Result<(), AppError> {
        let mut signal = self.role;
        signal.set(Some(role));
        self.mirror(set_item_script(role)?);
        Ok(())
    }

    fn clear_role(&self) -> Result<(), AppError> {
        let mut signal = self.role;
        signal.set(None);
        self.mirror(remove_item_script());
        Ok(())
    }
}

fn js_string(value: &str) -> Result<String, AppError> {
    Ok(serde_json::to_string(value)?)
}

fn get_item_script() -> String {
    format!("return sessionStorage.getItem(\"{ROLE_KEY}\");")
}

fn set_item_script(role: Role) -> Result<String, AppError> {
    Ok(format!(
        "sessionStorage.setItem(\"{ROLE_KEY}\", {});",
        js_string(role.as_str())?
    ))
}

fn remove_item_script() -> String {
    format!("sessionStorage.removeItem(\"{ROLE_KEY}\");")
}
