//! Keycloak pages rendered by the theme
//!
//! `KcPage` picks the page component from the `pageId` of the context. Pages
//! without a dedicated component render the bare template.

mod login;

use leptos::prelude::*;

pub use login::Login;

use crate::core::context::KcContext;
use crate::core::i18n::I18n;
use crate::ui::template::Template;

/// Page component for a `pageId`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Login,
    Fallback,
}

impl PageKind {
    pub fn from_page_id(page_id: &str) -> Self {
        match page_id {
            "login.ftl" => PageKind::Login,
            _ => PageKind::Fallback,
        }
    }
}

/// Render the page the context asks for
#[component]
pub fn KcPage(
    kc_context: KcContext,
    #[prop(default = true)] do_use_default_css: bool,
) -> impl IntoView {
    let i18n = I18n::from_context(&kc_context);

    match PageKind::from_page_id(&kc_context.page_id) {
        PageKind::Login => view! {
            <Login kc_context=kc_context i18n=i18n do_use_default_css=do_use_default_css />
        }
        .into_any(),
        PageKind::Fallback => view! {
            <Template kc_context=kc_context i18n=i18n do_use_default_css=do_use_default_css>
                {()}
            </Template>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_kind_from_page_id() {
        assert_eq!(PageKind::from_page_id("login.ftl"), PageKind::Login);
        assert_eq!(PageKind::from_page_id("register.ftl"), PageKind::Fallback);
        assert_eq!(PageKind::from_page_id(""), PageKind::Fallback);
    }
}
