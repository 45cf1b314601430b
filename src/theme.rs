//! Dark/light preference: one boolean, mirrored onto a presentation class and
//! persisted under a fixed storage key.

use crate::log::{log_event, LogLevel};
use serde_json::json;
use std::cell::Cell;
use thiserror::Error;

pub const DARK_MODE_KEY: &str = "darkMode";
pub const DARK_MODE_CLASS: &str = "dark-mode";
const STORED_TRUE: &str = "true";
const STORED_FALSE: &str = "false";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Only the exact marker `"true"` selects dark. Absent, `"false"` and
    /// corrupted values all resolve to light.
    pub fn from_stored(value: Option<&str>) -> Self {
        Self::from_dark(value == Some(STORED_TRUE))
    }

    pub fn stored_value(self) -> &'static str {
        if self.is_dark() {
            STORED_TRUE
        } else {
            STORED_FALSE
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    /// Class carried by the page wrapper alongside the root class.
    pub fn wrapper_class(self) -> &'static str {
        match self {
            Self::Light => "bg-light",
            Self::Dark => DARK_MODE_CLASS,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("durable storage is unavailable")]
    Unavailable,
    #[error("durable storage rejected the write: {0}")]
    Write(String),
}

/// Durable string key-value store scoped to the client.
pub trait KeyValueStore {
    /// Any read failure is reported as `None`.
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The document-level element whose class list reflects the theme.
pub trait PresentationRoot {
    fn set_class(&self, class: &str, present: bool);
}

pub struct ThemePreference<S, R> {
    store: S,
    root: R,
    is_dark: Cell<bool>,
    log_level: LogLevel,
}

impl<S: KeyValueStore, R: PresentationRoot> ThemePreference<S, R> {
    pub fn new(store: S, root: R) -> Self {
        Self {
            store,
            root,
            is_dark: Cell::new(false),
            log_level: LogLevel::Info,
        }
    }

    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    /// Seeds the flag from storage and reflects it onto the root. Never writes.
    pub fn initialize(&self) {
        let stored = self.store.get_item(DARK_MODE_KEY);
        let theme = Theme::from_stored(stored.as_deref());

        self.is_dark.set(theme.is_dark());
        self.root.set_class(DARK_MODE_CLASS, theme.is_dark());

        log_event(
            self.log_level,
            LogLevel::Debug,
            "theme.initialized",
            json!({
                "theme": theme.as_str(),
                "stored": stored.is_some(),
            }),
        );
    }

    pub fn get(&self) -> bool {
        self.is_dark.get()
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark(self.get())
    }

    /// Updates memory, then the root class, then storage. A failed write leaves
    /// the first two applied.
    pub fn set(&self, is_dark: bool) {
        let theme = Theme::from_dark(is_dark);

        self.is_dark.set(is_dark);
        self.root.set_class(DARK_MODE_CLASS, is_dark);

        if let Err(error) = self.store.set_item(DARK_MODE_KEY, theme.stored_value()) {
            log_event(
                self.log_level,
                LogLevel::Warn,
                "theme.storage_write_failed",
                json!({ "error": error.to_string() }),
            );
        }

        log_event(
            self.log_level,
            LogLevel::Debug,
            "theme.changed",
            json!({ "theme": theme.as_str() }),
        );
    }

    pub fn toggle(&self) {
        self.set(!self.get());
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{KeyValueStore, PresentationRoot, StorageError};
    use std::cell::RefCell;
    use std::collections::{BTreeSet, HashMap};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    pub struct MemoryStore {
        items: Rc<RefCell<HashMap<String, String>>>,
        reject_writes: bool,
    }

    impl MemoryStore {
        pub fn with_item(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.items.borrow_mut().insert(key.to_string(), value.to_string());
            store
        }

        pub fn read_only() -> Self {
            Self {
                reject_writes: true,
                ..Self::default()
            }
        }

        pub fn value(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get_item(&self, key: &str) -> Option<String> {
            self.value(key)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.reject_writes {
                return Err(StorageError::Write("quota exceeded".to_string()));
            }
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    pub struct MemoryRoot {
        classes: Rc<RefCell<BTreeSet<String>>>,
    }

    impl MemoryRoot {
        pub fn has_class(&self, class: &str) -> bool {
            self.classes.borrow().contains(class)
        }

        pub fn add(&self, class: &str) {
            self.classes.borrow_mut().insert(class.to_string());
        }
    }

    impl PresentationRoot for MemoryRoot {
        fn set_class(&self, class: &str, present: bool) {
            if present {
                self.add(class);
            } else {
                self.classes.borrow_mut().remove(class);
            }
        }
    }
}
