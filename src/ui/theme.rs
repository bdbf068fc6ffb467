//! Theme context module for the dark/light switch
//!
//! Provides:
//! - ThemeContext for reactive theme state
//! - BrowserThemeEnvironment backed by localStorage and the `<html>` class list
//! - An effect keeping storage and document class in sync with the state

use std::sync::Arc;

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

use crate::core::theme::{ThemeEnvironment, apply_dark_theme, load_dark_theme};

/// Theme environment of the running browser
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserThemeEnvironment;

impl ThemeEnvironment for BrowserThemeEnvironment {
    fn read_preference(&self) -> Option<String> {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    if let Ok(value) = storage.get_item(crate::core::theme::THEME_STORAGE_KEY) {
                        return value;
                    }
                }
            }
        }
        None
    }

    fn write_preference(&self, value: &str) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(crate::core::theme::THEME_STORAGE_KEY, value);
                }
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = value;
        }
    }

    fn set_document_class(&self, class: &str, present: bool) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Some(html) = document.document_element() {
                        let class_list = html.class_list();
                        if present {
                            let _ = class_list.add_1(class);
                        } else {
                            let _ = class_list.remove_1(class);
                        }
                    }
                }
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (class, present);
        }
    }
}

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Whether the dark theme is active
    pub is_dark: RwSignal<bool>,
    env: StoredValue<Arc<dyn ThemeEnvironment>>,
}

impl ThemeContext {
    pub fn set_dark(&self, is_dark: bool) {
        self.is_dark.set(is_dark);
    }

    pub fn toggle(&self) {
        self.is_dark.update(|dark| *dark = !*dark);
    }

    /// Write the current state to the environment
    pub fn sync(&self) {
        let is_dark = self.is_dark.get_untracked();
        self.env.with_value(|env| apply_dark_theme(env.as_ref(), is_dark));
    }
}

/// Effect body: subscribes to the theme state and writes it out
fn sync_on_change(ctx: ThemeContext) {
    let _ = ctx.is_dark.get();
    ctx.sync();
}

/// Provide theme context to the component tree
pub fn provide_theme_context(env: Arc<dyn ThemeEnvironment>) -> ThemeContext {
    let is_dark = RwSignal::new(load_dark_theme(env.as_ref()));

    let ctx = ThemeContext {
        is_dark,
        env: StoredValue::new(env),
    };

    // Apply on mount and on every change
    Effect::new(move |_| sync_on_change(ctx));

    provide_context(ctx);
    ctx
}

/// Use the provided theme context, falling back to the browser environment
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>()
        .unwrap_or_else(|| provide_theme_context(Arc::new(BrowserThemeEnvironment)))
}
