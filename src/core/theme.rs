//! Dark theme preference
//!
//! The preference lives outside the page (browser storage plus a class on the
//! document element). Access goes through [`ThemeEnvironment`] so the UI can run
//! against the browser or an in-memory stand-in.

use std::collections::BTreeSet;
use std::sync::Mutex;

/// Storage key holding `"true"` or `"false"`
pub const THEME_STORAGE_KEY: &str = "isDarkTheme";

/// Document element class enabling the PatternFly dark palette
pub const DARK_THEME_CLASS: &str = "pf-v5-theme-dark";

/// Capability to read and write the persisted theme and document class
pub trait ThemeEnvironment: Send + Sync {
    /// Raw persisted value, if any
    fn read_preference(&self) -> Option<String>;

    fn write_preference(&self, value: &str);

    /// Add or remove a class on the document element
    fn set_document_class(&self, class: &str, present: bool);
}

/// Initial dark theme state derived from storage
pub fn load_dark_theme(env: &dyn ThemeEnvironment) -> bool {
    env.read_preference().as_deref() == Some("true")
}

/// Reflect the state onto the document and persist it
pub fn apply_dark_theme(env: &dyn ThemeEnvironment, is_dark: bool) {
    env.set_document_class(DARK_THEME_CLASS, is_dark);
    env.write_preference(if is_dark { "true" } else { "false" });
}

/// In-memory environment, used on the server and in tests
#[derive(Debug, Default)]
pub struct MemoryThemeEnvironment {
    preference: Mutex<Option<String>>,
    classes: Mutex<BTreeSet<String>>,
}

impl MemoryThemeEnvironment {
    pub fn with_preference(value: impl Into<String>) -> Self {
        Self {
            preference: Mutex::new(Some(value.into())),
            classes: Mutex::default(),
        }
    }

    pub fn preference(&self) -> Option<String> {
        self.preference
            .lock()
            .map(|value| value.clone())
            .unwrap_or_default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes
            .lock()
            .map(|classes| classes.contains(class))
            .unwrap_or(false)
    }
}

impl ThemeEnvironment for MemoryThemeEnvironment {
    fn read_preference(&self) -> Option<String> {
        self.preference()
    }

    fn write_preference(&self, value: &str) {
        if let Ok(mut preference) = self.preference.lock() {
            *preference = Some(value.to_string());
        }
    }

    fn set_document_class(&self, class: &str, present: bool) {
        if let Ok(mut classes) = self.classes.lock() {
            if present {
                classes.insert(class.to_string());
            } else {
                classes.remove(class);
            }
        }
    }
}
