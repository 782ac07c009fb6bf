use shared_types::{AppError, Role};
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Fixed storage key holding the active role.
pub const ROLE_KEY: &str = "userRole";

/// Session-scoped role storage handed to consumers by explicit reference.
///
/// An absent key means nobody is signed in.
pub trait SessionStore {
    fn get_role(&self) -> Option<Role>;
    fn set_role(&self, role: Role) -> Result<(), AppError>;
    fn clear_role(&self) -> Result<(), AppError>;

    fn is_authenticated(&self) -> bool {
        self.get_role().is_some()
    }
}

impl<T: SessionStore + ?Sized> SessionStore for &T {
    fn get_role(&self) -> Option<Role> {
        (**self).get_role()
    }

    fn set_role(&self, role: Role) -> Result<(), AppError> {
        (**self).set_role(role)
    }

    fn clear_role(&self) -> Result<(), AppError> {
        (**self).clear_role()
    }
}

impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    fn get_role(&self) -> Option<Role> {
        (**self).get_role()
    }

    fn set_role(&self, role: Role) -> Result<(), AppError> {
        (**self).set_role(role)
    }

    fn clear_role(&self) -> Result<(), AppError> {
        (**self).clear_role()
    }
}

/// Turn a raw stored value into a role, treating garbage as signed out.
pub fn decode_role(raw: Option<&str>) -> Option<Role> {
    let raw = raw?;
    let role = Role::parse(raw);
    if role.is_none() {
        tracing::warn!(value = raw, "ignoring unrecognized stored role");
    }
    role
}

/// Key/value session storage kept in process memory.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value under `key`, as a browser's `sessionStorage.getItem` would return it.
    pub fn get_item(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn set_item(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    pub fn remove_item(&self, key: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

impl SessionStore for MemorySessionStore {
    fn get_role(&self) -> Option<Role> {
        decode_role(self.get_item(ROLE_KEY).as_deref())
    }

    fn set_role(&self, role: Role) -> Result<(), AppError> {
        self.set_item(ROLE_KEY, role.as_str());
        Ok(())
    }

    fn clear_role(&self) -> Result<(), AppError> {
        self.remove_item(ROLE_KEY);
        Ok(())
    }
}

#[cfg(feature = "native")]
pub use file::FileSessionStore;

#[cfg(feature = "native")]
mod file {
    use super::{decode_role, SessionStore, ROLE_KEY};
    use shared_types::{AppError, Role};
    use std::collections::BTreeMap;
    use std::path::{Path, PathBuf};

    const SESSION_FILE: &str = "session.json";

    /// Session storage persisted as a small JSON object on disk, so a role
    /// outlives a single CLI invocation. `end_session` plays the part of
    /// closing the browser.
    #[derive(Debug, Clone)]
    pub struct FileSessionStore {
        path: PathBuf,
    }

    impl FileSessionStore {
        pub fn open(dir: impl AsRef<Path>) -> Result<Self, AppError> {
            let dir = dir.as_ref();
            std::fs::create_dir_all(dir)?;
            Ok(Self {
                path: dir.join(SESSION_FILE),
            })
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        /// Delete every session entry, including the role.
        pub fn end_session(&self) -> Result<(), AppError> {
            match std::fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            }
        }

        fn read_entries(&self) -> Result<BTreeMap<String, String>, AppError> {
            match std::fs::read_to_string(&self.path) {
                Ok(contents) => Ok(serde_json::from_str(&contents)?),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
                Err(e) => Err(e.into()),
            }
        }

        /// Entries to rewrite; an unreadable file is replaced, with a warning.
        fn entries_or_reset(&self) -> BTreeMap<String, String> {
            self.read_entries().unwrap_or_else(|e| {
                tracing::warn!(path = %self.path.display(), error = %e, "replacing unreadable session file");
                BTreeMap::new()
            })
        }

        fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), AppError> {
            let json = serde_json::to_string_pretty(entries)?;
            std::fs::write(&self.path, json)?;
            Ok(())
        }
    }

    impl SessionStore for FileSessionStore {
        fn get_role(&self) -> Option<Role> {
            match self.read_entries() {
                Ok(entries) => decode_role(entries.get(ROLE_KEY).map(String::as_str)),
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), error = %e, "unreadable session file");
                    None
                }
            }
        }

        fn set_role(&self, role: Role) -> Result<(), AppError> {
            let mut entries = self.entries_or_reset();
            entries.insert(ROLE_KEY.to_string(), role.as_str().to_string());
            self.write_entries(&entries)
        }

        fn clear_role(&self) -> Result<(), AppError> {
            let mut entries = self.entries_or_reset();
            if entries.remove(ROLE_KEY).is_some() {
                self.write_entries(&entries)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_is_unauthenticated() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get_role(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn role_round_trips() {
        let store = MemorySessionStore::new();
        for role in Role::ALL {
            store.set_role(role).unwrap();
            assert_eq!(store.get_role(), Some(role));
        }
    }

    #[test]
    fn clear_removes_key() {
        let store = MemorySessionStore::new();
        store.set_role(Role::TeamMember).unwrap();
        store.clear_role().unwrap();
        assert_eq!(store.get_role(), None);
        assert_eq!(store.get_item(ROLE_KEY), None);
    }

    #[test]
    fn role_is_stored_as_plain_string() {
        let store = MemorySessionStore::new();
        store.set_role(Role::SubDepartmentAdmin).unwrap();
        assert_eq!(store.get_item(ROLE_KEY).as_deref(), Some("sub-department-admin"));
    }

    #[test]
    fn garbage_value_reads_as_signed_out() {
        let store = MemorySessionStore::new();
        store.set_item(ROLE_KEY, "superuser");
        assert_eq!(store.get_role(), None);
    }

    #[test]
    fn clearing_an_empty_store_is_fine() {
        let store = MemorySessionStore::new();
        assert!(store.clear_role().is_ok());
    }

    #[cfg(feature = "native")]
    #[test]
    fn file_store_round_trips_and_ends() {
        let dir = std::env::temp_dir().join(format!("dms-session-{}", uuid::Uuid::new_v4()));
        let store = FileSessionStore::open(&dir).unwrap();
        assert_eq!(store.get_role(), None);

        store.set_role(Role::HeadOfDepartment).unwrap();
        let reopened = FileSessionStore::open(&dir).unwrap();
        assert_eq!(reopened.get_role(), Some(Role::HeadOfDepartment));

        reopened.end_session().unwrap();
        assert_eq!(store.get_role(), None);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
