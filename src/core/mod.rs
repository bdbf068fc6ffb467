//! Framework independent logic of the login theme

pub mod branding;
pub mod classes;
#[cfg(feature = "ssr")]
pub mod config;
pub mod context;
#[cfg(feature = "ssr")]
pub mod error;
pub mod i18n;
pub mod initialize;
pub mod sanitize;
pub mod template;
pub mod theme;

pub use classes::{ClassKey, KcClasses, KcClsx, clsx};
pub use context::{Auth, KcContext, Message, MessageType};
pub use i18n::I18n;
pub use initialize::{ImmediateInitializer, Initializer};
pub use sanitize::{SanitizedHtml, sanitize_html};
pub use template::{TemplateModel, TemplateOptions};
pub use theme::{MemoryThemeEnvironment, ThemeEnvironment};
