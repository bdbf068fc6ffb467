pub mod alert;
pub mod class_name;
pub mod icon;
pub mod initialize;
pub mod language_select;
pub mod login_page;
pub mod pages;
pub mod template;
pub mod theme;
pub mod theme_switch;
pub mod tooltip;

pub use alert::Alert;
pub use class_name::{ClassTarget, use_set_class_name};
pub use icon::{Icon, icons};
pub use initialize::{StylesheetInitializer, use_initialize};
pub use language_select::LanguageSelect;
pub use login_page::LoginPage;
pub use pages::{KcPage, Login};
pub use template::Template;
pub use theme::{BrowserThemeEnvironment, ThemeContext, provide_theme_context, use_theme_context};
pub use theme_switch::ThemeSwitch;
pub use tooltip::Tooltip;
