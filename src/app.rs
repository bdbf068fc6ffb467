use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};

use crate::core::{I18n, KcContext};
use crate::ui::KcPage;

/// Global holding the serialized context in the page
pub const CONTEXT_GLOBAL: &str = "kcContext";
/// Global holding the default styling flag
pub const DEFAULT_CSS_GLOBAL: &str = "kcDoUseDefaultCss";

/// What the page is rendered from, shared by server and client
#[derive(Debug, Clone, PartialEq)]
pub struct PageBootstrap {
    pub kc_context: KcContext,
    pub do_use_default_css: bool,
}

impl Default for PageBootstrap {
    fn default() -> Self {
        Self {
            kc_context: KcContext::mock(),
            do_use_default_css: true,
        }
    }
}

impl PageBootstrap {
    /// Inline script handing the bootstrap over to the client bundle
    pub fn script(&self) -> serde_json::Result<String> {
        Ok(format!(
            "window.{} = {}; window.{} = {};",
            CONTEXT_GLOBAL,
            self.kc_context.to_script_json()?,
            DEFAULT_CSS_GLOBAL,
            self.do_use_default_css
        ))
    }

    /// Read the bootstrap embedded by the server, falling back to the mock
    #[cfg(feature = "hydrate")]
    pub fn from_window() -> Self {
        use leptos::logging::{log, warn};
        use leptos::wasm_bindgen::JsValue;

        let Some(window) = leptos::web_sys::window() else {
            return Self::default();
        };

        let global = |name: &str| {
            js_sys::Reflect::get(&window, &JsValue::from_str(name))
                .ok()
                .filter(|value| !value.is_undefined() && !value.is_null())
        };

        let kc_context = match global(CONTEXT_GLOBAL).map(serde_wasm_bindgen::from_value) {
            Some(Ok(ctx)) => ctx,
            Some(Err(err)) => {
                warn!("Invalid {}: {}, using mock context", CONTEXT_GLOBAL, err);
                KcContext::mock()
            }
            None => {
                log!("No {} found, using mock context", CONTEXT_GLOBAL);
                KcContext::mock()
            }
        };

        let do_use_default_css = global(DEFAULT_CSS_GLOBAL)
            .and_then(|value| value.as_bool())
            .unwrap_or(true);

        Self {
            kc_context,
            do_use_default_css,
        }
    }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let bootstrap = use_context::<PageBootstrap>().unwrap_or_default();
    let lang = I18n::from_context(&bootstrap.kc_context)
        .current_language
        .language_tag;
    let script = bootstrap.script().unwrap_or_else(|err| {
        leptos::logging::error!("Failed to serialize page bootstrap: {}", err);
        String::new()
    });

    view! {
        <!DOCTYPE html>
        <html lang=lang>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="robots" content="noindex, nofollow"/>
                <script inner_html=script></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let PageBootstrap {
        kc_context,
        do_use_default_css,
    } = use_context::<PageBootstrap>().unwrap_or_default();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/trustify-login.css"/>

        <KcPage kc_context=kc_context do_use_default_css=do_use_default_css />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bootstrap_uses_mock() {
        let bootstrap = PageBootstrap::default();

        assert_eq!(bootstrap.kc_context, KcContext::mock());
        assert!(bootstrap.do_use_default_css);
    }

    #[test]
    fn test_script_assigns_both_globals() {
        let bootstrap = PageBootstrap {
            kc_context: KcContext::mock(),
            do_use_default_css: false,
        };

        let script = bootstrap.script().unwrap();

        assert!(script.starts_with("window.kcContext = {"));
        assert!(script.ends_with("window.kcDoUseDefaultCss = false;"));
    }

    #[test]
    fn test_script_embeds_parseable_context() {
        let bootstrap = PageBootstrap::default();
        let script = bootstrap.script().unwrap();

        let json = script
            .strip_prefix("window.kcContext = ")
            .and_then(|rest| rest.split("; window.").next())
            .unwrap();

        assert_eq!(KcContext::from_json(json).unwrap(), bootstrap.kc_context);
    }
}
