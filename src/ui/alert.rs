//! Alert banner for feedback messages

use leptos::prelude::*;

use crate::core::sanitize::SanitizedHtml;
use crate::core::template::AlertVariant;
use crate::ui::{Icon, icons};

fn variant_icon(variant: &AlertVariant) -> &'static str {
    match variant {
        AlertVariant::Danger => icons::EXCLAMATION_CIRCLE,
        AlertVariant::Success => icons::CHECK_CIRCLE,
        AlertVariant::Warning => icons::EXCLAMATION_TRIANGLE,
        AlertVariant::Info => icons::INFO_CIRCLE,
        AlertVariant::Custom(_) => icons::BELL,
    }
}

/// PatternFly alert whose title is server-supplied markup
///
/// Only [`SanitizedHtml`] is accepted for the title.
#[component]
pub fn Alert(
    variant: AlertVariant,
    /// Sanitized title markup
    title: SanitizedHtml,
    /// Classes for the element holding the title markup
    #[prop(into, default = String::new())]
    title_class: String,
    #[prop(default = "DangerAlert")]
    ouia_id: &'static str,
) -> impl IntoView {
    let icon = variant_icon(&variant);

    view! {
        <div
            class=format!("pf-v5-c-alert pf-m-{}", variant)
            data-ouia-component-type="PF5/Alert"
            data-ouia-component-id=ouia_id
        >
            <div class="pf-v5-c-alert__icon">
                <Icon name=icon />
            </div>
            <p class="pf-v5-c-alert__title">
                <span class=title_class inner_html=title.into_inner()></span>
            </p>
        </div>
    }
}
