//! Readiness hook deferring the first paint of the template

use std::sync::Arc;

use async_trait::async_trait;
use leptos::prelude::*;

use crate::core::context::KcContext;
use crate::core::initialize::{Initializer, default_stylesheets};

/// Injects the default keycloak stylesheets and waits until they loaded
#[derive(Debug, Clone, Copy, Default)]
pub struct StylesheetInitializer;

#[async_trait(?Send)]
impl Initializer for StylesheetInitializer {
    async fn initialize(&self, ctx: &KcContext, do_use_default_css: bool) -> bool {
        let hrefs = default_stylesheets(ctx, do_use_default_css);

        #[cfg(not(feature = "ssr"))]
        {
            for href in &hrefs {
                if let Err(err) = browser::load_stylesheet(href).await {
                    leptos::logging::warn!("Stylesheet {} not loaded: {:?}", href, err);
                }
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = hrefs;
        }

        true
    }
}

#[cfg(not(feature = "ssr"))]
mod browser {
    use leptos::wasm_bindgen::{JsCast, JsValue};
    use leptos::web_sys;
    use wasm_bindgen::closure::Closure;

    /// Append a `<link rel="stylesheet">` unless present, resolving on load or error
    pub async fn load_stylesheet(href: &str) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("No document"))?;

        let selector = format!("link[rel=\"stylesheet\"][href=\"{}\"]", href);
        if document.query_selector(&selector)?.is_some() {
            return Ok(());
        }

        let link: web_sys::HtmlLinkElement = document.create_element("link")?.dyn_into()?;
        link.set_rel("stylesheet");
        link.set_href(href);

        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            let on_done = Closure::once_into_js(move || {
                let _ = resolve.call0(&JsValue::NULL);
            });
            link.set_onload(Some(on_done.unchecked_ref()));
            link.set_onerror(Some(on_done.unchecked_ref()));
        });

        let head = document
            .head()
            .ok_or_else(|| JsValue::from_str("No <head>"))?;
        head.append_child(&link)?;

        wasm_bindgen_futures::JsFuture::from(promise).await?;
        Ok(())
    }
}

/// Readiness as a signal: `false` until the initializer completed
///
/// Server and first client render agree on `false`, which keeps hydration stable.
pub fn use_initialize(
    initializer: Arc<dyn Initializer>,
    ctx: KcContext,
    do_use_default_css: bool,
) -> ReadSignal<bool> {
    let (is_ready, set_is_ready) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::task::spawn_local;

        Effect::new(move |_| {
            let initializer = initializer.clone();
            let ctx = ctx.clone();
            spawn_local(async move {
                let ready = initializer.initialize(&ctx, do_use_default_css).await;
                set_is_ready.set(ready);
            });
        });
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (initializer, ctx, do_use_default_css, set_is_ready);
    }

    is_ready
}
