//! Local persistence for the two client-side preferences: the chosen language
//! and the cookie-consent flag.
//!
//! Browser builds keep them in `localStorage`; native builds keep a small JSON
//! file under the platform data directory. Failures are never fatal: reads
//! degrade to "unset" and write errors are logged.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

use crate::i18n::Language;

pub const LANGUAGE_KEY: &str = "language";
pub const COOKIES_ACCEPTED_KEY: &str = "cookiesAccepted";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable on this platform")]
    Unavailable,
    #[error("storage rejected the write: {0}")]
    Rejected(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt preferences file: {0}")]
    Json(#[from] serde_json::Error),
}

/// String key/value store backing [`Preferences`].
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Typed accessors over a [`PreferenceStore`].
#[derive(Debug, Clone, Default)]
pub struct Preferences<S> {
    store: S,
}

impl<S: PreferenceStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Saved language, if any and if it is one we support.
    pub fn language(&self) -> Option<Language> {
        self.store
            .read(LANGUAGE_KEY)
            .and_then(|code| Language::from_code(&code))
    }

    pub fn set_language(&self, lang: Language) {
        if let Err(err) = self.store.write(LANGUAGE_KEY, lang.code()) {
            tracing::warn!("[storage] failed to persist language: {err}");
        }
    }

    pub fn cookies_accepted(&self) -> bool {
        self.store
            .read(COOKIES_ACCEPTED_KEY)
            .is_some_and(|value| value == "true")
    }

    pub fn accept_cookies(&self) {
        if let Err(err) = self.store.write(COOKIES_ACCEPTED_KEY, "true") {
            tracing::warn!("[storage] failed to persist cookie consent: {err}");
        }
    }
}

impl Preferences<PlatformStore> {
    pub fn platform() -> Self {
        Self::new(PlatformStore::default())
    }
}

/// In-memory store, used by tests and as a stand-in when nothing else works.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        let store = Self::default();
        for (key, value) in entries {
            store
                .values
                .borrow_mut()
                .insert((*key).to_string(), (*value).to_string());
        }
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub type PlatformStore = LocalStore;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = FileStore;

/// `window.localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStore {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::Rejected(format!("{err:?}")))
    }
}

/// JSON object stored at `<data dir>/preferences.json`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: Option<std::path::PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for FileStore {
    fn default() -> Self {
        let path = directories::ProjectDirs::from("com", "Tauler Group", "tauler-site")
            .map(|dirs| dirs.data_dir().join("preferences.json"));
        Self { path }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn at(path: impl Into<std::path::PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn load(&self) -> Result<HashMap<String, String>, StorageError> {
        let path = self.path.as_ref().ok_or(StorageError::Unavailable)?;
        match std::fs::read_to_string(path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        match self.load() {
            Ok(mut values) => values.remove(key),
            Err(err) => {
                tracing::debug!("[storage] preferences unreadable: {err}");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path.as_ref().ok_or(StorageError::Unavailable)?;
        let mut values = self.load().unwrap_or_default();
        values.insert(key.to_string(), value.to_string());
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_vec_pretty(&values)?)?;
        Ok(())
    }
}
