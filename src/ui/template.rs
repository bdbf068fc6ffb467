//! Page template shared by every login page
//!
//! Derives the [`TemplateModel`] once, then renders its variants inside the
//! PatternFly login layout. Nothing is rendered until the readiness hook
//! reports the page as initialized.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::web_sys::MouseEvent;
use leptos_meta::Title;

use crate::core::branding::{
    BACKGROUND_IMAGE, BRAND_IMAGE_ALT, FOOTER_LINKS, LOGIN_TITLE, SOCIAL_LOGIN_ARIA_LABEL,
    TEXT_CONTENT, THEME_SWITCH_LABEL, brand_image,
};
use crate::core::classes::{ClassKey, KcClasses, KcClsx, clsx};
use crate::core::context::KcContext;
use crate::core::i18n::I18n;
use crate::core::initialize::Initializer;
use crate::core::template::{
    AlertModel, HeaderNode, LanguageMenu, TemplateModel, TemplateOptions, TryAnotherWay,
    UsernameBlock,
};
use crate::ui::alert::Alert;
use crate::ui::class_name::{ClassTarget, use_set_class_name};
use crate::ui::initialize::{StylesheetInitializer, use_initialize};
use crate::ui::language_select::LanguageSelect;
use crate::ui::login_page::LoginPage;
use crate::ui::theme::use_theme_context;
use crate::ui::theme_switch::ThemeSwitch;
use crate::ui::tooltip::Tooltip;

/// Localized strings and resolved classes used while rendering
#[derive(Clone)]
struct RenderParts {
    model: TemplateModel,
    kc: KcClsx,
    restart_login_tooltip: String,
    required_fields: String,
    try_another_way: String,
}

/// Login page template
#[component]
pub fn Template(
    /// Context supplied by the identity provider
    kc_context: KcContext,
    i18n: I18n,
    /// Show the feedback message of the previous request
    #[prop(default = true)]
    display_message: bool,
    /// Show the required-fields legend
    #[prop(default = false)]
    display_required_fields: bool,
    #[prop(optional_no_strip)]
    social_providers_node: Option<ViewFn>,
    /// Shown below the form, e.g. the registration link
    #[prop(optional_no_strip)]
    info_node: Option<ViewFn>,
    /// Overrides the localized default title
    #[prop(optional, into)]
    document_title: Option<String>,
    /// Overrides the `kcBodyClass` classes of `<body>`
    #[prop(optional, into)]
    body_class_name: Option<String>,
    #[prop(default = true)]
    do_use_default_css: bool,
    #[prop(optional)]
    classes: KcClasses,
    /// Readiness capability, defaults to loading the keycloak stylesheets
    #[prop(optional)]
    initializer: Option<Arc<dyn Initializer>>,
    children: ChildrenFn,
) -> impl IntoView {
    let options = TemplateOptions {
        display_message,
        display_required_fields,
        document_title,
        body_class_name,
        do_use_default_css,
        classes,
    };
    let model = TemplateModel::derive(&kc_context, &i18n, &options);
    let theme = use_theme_context();

    use_set_class_name(ClassTarget::Html, model.html_class.clone());
    use_set_class_name(ClassTarget::Body, model.body_class.clone());

    let initializer = initializer.unwrap_or_else(|| Arc::new(StylesheetInitializer));
    let is_ready = use_initialize(initializer, kc_context, do_use_default_css);

    let title = model.document_title.clone();
    let parts = StoredValue::new(RenderParts {
        model,
        kc: options.kc_clsx(),
        restart_login_tooltip: i18n.msg("restartLoginTooltip"),
        required_fields: i18n.msg("requiredFields"),
        try_another_way: i18n.msg("doTryAnotherWay"),
    });

    let brand_img_src = Signal::derive(move || brand_image(theme.is_dark.get()));

    view! {
        <Title text=title />
        <Show when=move || is_ready.get()>
            {
                let RenderParts {
                    model,
                    kc,
                    restart_login_tooltip,
                    required_fields,
                    try_another_way,
                } = parts.get_value();
                let children = children.clone();

                view! {
                    <LoginPage
                        brand_img_src=brand_img_src
                        brand_img_alt=BRAND_IMAGE_ALT
                        background_img_src=BACKGROUND_IMAGE
                        login_title=LOGIN_TITLE
                        text_content=TEXT_CONTENT
                        footer_links=FOOTER_LINKS
                        header_utilities=language_utilities(model.language_menu)
                        social_media_login_content=social_providers_node.clone()
                        social_media_login_aria_label=SOCIAL_LOGIN_ARIA_LABEL
                        sign_up_for_account_message=info_node.clone()
                    >
                        {header_view(model.header, &kc, restart_login_tooltip, required_fields)}
                        {model.alert.map(|alert| alert_view(alert, &kc))}
                        {children()}
                        {model.try_another_way.map(|form| view! {
                            <TryAnotherWayForm
                                form=form
                                label=try_another_way
                                group_class=kc.class(ClassKey::KcFormGroupClass)
                            />
                        })}
                    </LoginPage>

                    <div class="pf-v5-l-flex pf-m-column pf-m-gap-lg ws-full-page-utils pf-v5-m-dir-ltr">
                        <ThemeSwitch theme=theme label=THEME_SWITCH_LABEL />
                    </div>
                }
            }
        </Show>
    }
}

fn language_utilities(menu: LanguageMenu) -> Option<ViewFn> {
    match menu {
        LanguageMenu::Hidden => None,
        LanguageMenu::Selector {
            label,
            aria_label,
            options,
        } => Some(ViewFn::from(move || {
            view! {
                <LanguageSelect
                    label=label.clone()
                    aria_label=aria_label.clone()
                    options=options.clone()
                />
            }
        })),
    }
}

fn header_view(
    header: HeaderNode,
    kc: &KcClsx,
    restart_login_tooltip: String,
    required_fields: String,
) -> AnyView {
    match header {
        HeaderNode::Plain(block) => username_view(block, kc, restart_login_tooltip),
        HeaderNode::RequiredFields(block) => view! {
            <div class=kc.class(ClassKey::KcContentWrapperClass)>
                <div class=clsx([kc.class(ClassKey::KcLabelWrapperClass), "subtitle".to_string()])>
                    <span class="subtitle">
                        <span class="required">"*"</span>
                        {required_fields}
                    </span>
                </div>
                <div class="col-md-10">{username_view(block, kc, restart_login_tooltip)}</div>
            </div>
        }
        .into_any(),
    }
}

fn username_view(block: UsernameBlock, kc: &KcClsx, restart_login_tooltip: String) -> AnyView {
    match block {
        UsernameBlock::Empty => ().into_any(),
        UsernameBlock::Attempted {
            username,
            restart_url,
        } => {
            let icon_class = kc.class(ClassKey::KcResetFlowIcon);
            let tooltip_text = restart_login_tooltip.clone();
            let tooltip = ViewFn::from(move || {
                view! {
                    <div>
                        <span class="kc-tooltip-text">{tooltip_text.clone()}</span>
                    </div>
                }
            });

            view! {
                <div id="kc-username" class=kc.class(ClassKey::KcFormGroupClass)>
                    <label id="kc-attempted-username">{username}</label>
                    <a id="reset-login" href=restart_url aria-label=restart_login_tooltip>
                        <Tooltip content=tooltip>
                            <i class=icon_class></i>
                        </Tooltip>
                    </a>
                </div>
            }
            .into_any()
        }
    }
}

fn alert_view(alert: AlertModel, kc: &KcClsx) -> AnyView {
    view! {
        <Alert
            variant=alert.variant
            title=alert.summary
            title_class=kc.class(ClassKey::KcAlertTitleClass)
        />
    }
    .into_any()
}

/// Hidden form posting `tryAnotherWay=on`, submitted from a link
#[component]
fn TryAnotherWayForm(form: TryAnotherWay, label: String, group_class: String) -> impl IntoView {
    let form_ref = NodeRef::<leptos::html::Form>::new();

    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(form) = form_ref.get() {
                if let Err(err) = form.submit() {
                    leptos::logging::warn!("Try another way form not submitted: {:?}", err);
                }
            }
        }
    };

    view! {
        <form
            id="kc-select-try-another-way-form"
            action=form.action
            method="post"
            node_ref=form_ref
        >
            <div class=group_class>
                <input type="hidden" name="tryAnotherWay" value="on" />
                <a href="#" id="try-another-way" on:click=on_click>
                    {label}
                </a>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kc() -> KcClsx {
        KcClsx::new(true, KcClasses::default())
    }

    fn attempted() -> UsernameBlock {
        UsernameBlock::Attempted {
            username: "alice".to_string(),
            restart_url: "/realms/test/login-actions/restart".to_string(),
        }
    }

    fn render(view: impl FnOnce() -> AnyView) -> String {
        let owner = Owner::new();
        owner.with(|| view().to_html())
    }

    #[test]
    fn test_try_another_way_posts_hidden_flag() {
        let form = TryAnotherWay {
            action: "/realms/test/login-actions/authenticate".to_string(),
        };
        let html = render(|| {
            view! {
                <TryAnotherWayForm
                    form=form
                    label="Try another way".to_string()
                    group_class="kcFormGroupClass".to_string()
                />
            }
            .into_any()
        });

        assert!(html.contains("id=\"kc-select-try-another-way-form\""));
        assert!(html.contains("action=\"/realms/test/login-actions/authenticate\""));
        assert!(html.contains("method=\"post\""));
        assert!(html.contains("type=\"hidden\""));
        assert!(html.contains("name=\"tryAnotherWay\""));
        assert!(html.contains("value=\"on\""));
        assert!(html.contains("id=\"try-another-way\""));
        assert!(html.contains("Try another way"));
    }

    #[test]
    fn test_username_block_links_to_restart() {
        let html = render(|| username_view(attempted(), &kc(), "Restart login".to_string()));

        assert!(html.contains("id=\"kc-username\""));
        assert!(html.contains("alice"));
        assert!(html.contains("id=\"reset-login\""));
        assert!(html.contains("href=\"/realms/test/login-actions/restart\""));
        assert!(html.contains("aria-label=\"Restart login\""));
    }

    #[test]
    fn test_empty_username_block_renders_nothing() {
        let html = render(|| {
            username_view(UsernameBlock::Empty, &kc(), "Restart login".to_string())
        });

        assert!(!html.contains("kc-username"));
        assert!(!html.contains("reset-login"));
    }

    #[test]
    fn test_required_fields_legend_wraps_username() {
        let html = render(|| {
            header_view(
                HeaderNode::RequiredFields(attempted()),
                &kc(),
                "Restart login".to_string(),
                "Required fields".to_string(),
            )
        });

        assert!(html.contains("<span class=\"required\">*</span>"));
        assert!(html.contains("Required fields"));
        assert!(html.contains("class=\"col-md-10\""));
        assert!(html.find("Required fields").unwrap() < html.find("id=\"reset-login\"").unwrap());
    }

    #[test]
    fn test_plain_header_has_no_legend() {
        let html = render(|| {
            header_view(
                HeaderNode::Plain(attempted()),
                &kc(),
                "Restart login".to_string(),
                "Required fields".to_string(),
            )
        });

        assert!(!html.contains("class=\"required\""));
        assert!(html.contains("id=\"reset-login\""));
    }
}
