use leptos::prelude::*;
use leptos::web_sys::MouseEvent;

use crate::core::template::LanguageOption;
use crate::ui::{Icon, icons};

/// Language selector for the page header
///
/// Options are plain links to the locale switch URLs, selecting one navigates away.
#[component]
pub fn LanguageSelect(
    /// Label of the current language, shown on the toggle
    label: String,
    /// Accessible name of the select
    aria_label: String,
    /// Languages in display order
    options: Vec<LanguageOption>,
) -> impl IntoView {
    let options = StoredValue::new(options);
    let (is_open, set_is_open) = signal(false);

    let toggle = move |_: MouseEvent| {
        set_is_open.update(|open| *open = !*open);
    };

    let close_on_outside = move |_| {
        if is_open.get() {
            set_is_open.set(false);
        }
    };

    let selected = label.clone();

    view! {
        <div class="pf-v5-c-select" aria-label=aria_label>
            <button
                type="button"
                class="pf-v5-c-menu-toggle"
                class:pf-m-expanded=move || is_open.get()
                aria-expanded=move || is_open.get().to_string()
                on:click=toggle
            >
                <span class="pf-v5-c-menu-toggle__text">{label}</span>
                <span class="pf-v5-c-menu-toggle__controls">
                    <span class="pf-v5-c-menu-toggle__toggle-icon">
                        <Icon name=icons::CARET_DOWN />
                    </span>
                </span>
            </button>

            <Show when=move || is_open.get()>
                <div class="kc-select-backdrop" on:click=close_on_outside></div>
            </Show>
            // Kept in the markup so the locale links exist before hydration
            <div class="pf-v5-c-menu" hidden=move || !is_open.get()>
                <div class="pf-v5-c-menu__content">
                    <ul class="pf-v5-c-menu__list" role="listbox">
                        {options.get_value().into_iter().map(|option| {
                            let is_selected = option.label == selected;
                            view! {
                                <li
                                    class="pf-v5-c-menu__list-item"
                                    role="none"
                                >
                                    <a
                                        id=option.id
                                        class="pf-v5-c-menu__item"
                                        class:pf-m-selected=is_selected
                                        href=option.href
                                        hreflang=option.language_tag
                                        role="option"
                                        aria-selected=is_selected.to_string()
                                    >
                                        <span class="pf-v5-c-menu__item-main">
                                            <span class="pf-v5-c-menu__item-text">{option.label}</span>
                                        </span>
                                    </a>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<LanguageOption> {
        [("en", "English"), ("de", "Deutsch"), ("fr", "Français")]
            .into_iter()
            .enumerate()
            .map(|(index, (tag, label))| LanguageOption {
                id: format!("language-{}", index + 1),
                language_tag: tag.to_string(),
                label: label.to_string(),
                href: format!("/realms/test/login-actions/authenticate?kc_locale={tag}"),
            })
            .collect()
    }

    fn render() -> String {
        let owner = Owner::new();
        owner.with(|| {
            view! {
                <LanguageSelect
                    label="Deutsch".to_string()
                    aria_label="Languages".to_string()
                    options=options()
                />
            }
            .to_html()
        })
    }

    #[test]
    fn test_options_link_to_locales_in_order() {
        let html = render();

        let positions: Vec<usize> = ["en", "de", "fr"]
            .iter()
            .enumerate()
            .map(|(index, tag)| {
                let id = format!("id=\"language-{}\"", index + 1);
                let href = format!(
                    "href=\"/realms/test/login-actions/authenticate?kc_locale={tag}\""
                );
                assert!(html.contains(&href), "missing {href} in {html}");
                html.find(&id).unwrap()
            })
            .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_toggle_shows_current_language() {
        let html = render();

        assert!(html.contains("aria-label=\"Languages\""));
        assert!(html.contains("pf-v5-c-menu-toggle__text\">Deutsch"));
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(!html.contains("kc-select-backdrop"));
    }
}
