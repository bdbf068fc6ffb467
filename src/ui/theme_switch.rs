use leptos::prelude::*;

use crate::ui::theme::ThemeContext;

/// Switch flipping the dark theme
#[component]
pub fn ThemeSwitch(
    theme: ThemeContext,
    #[prop(into)] label: String,
    #[prop(default = "theme-switch")] id: &'static str,
) -> impl IntoView {
    view! {
        <label class="pf-v5-c-switch" for=id data-ouia-component-id="ThemeSwitch">
            <input
                id=id
                class="pf-v5-c-switch__input"
                type="checkbox"
                role="switch"
                prop:checked=move || theme.is_dark.get()
                on:change=move |ev| theme.set_dark(event_target_checked(&ev))
            />
            <span class="pf-v5-c-switch__toggle"></span>
            <span class="pf-v5-c-switch__label" aria-hidden="true">{label}</span>
        </label>
    }
}
