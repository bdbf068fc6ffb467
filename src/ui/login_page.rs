//! PatternFly login page layout
//!
//! Brand header, main card with title and header utilities, social login and
//! sign-up slots, and a footer with descriptive text and links.

use leptos::prelude::*;

use crate::core::branding::FooterLink;

#[component]
pub fn LoginPage(
    /// Brand image, reactive so it can follow the theme
    #[prop(into)]
    brand_img_src: Signal<&'static str>,
    brand_img_alt: &'static str,
    background_img_src: &'static str,
    login_title: &'static str,
    text_content: &'static str,
    footer_links: &'static [FooterLink],
    /// Rendered in the main header, e.g. the language selector
    #[prop(optional_no_strip)]
    header_utilities: Option<ViewFn>,
    #[prop(optional_no_strip)]
    social_media_login_content: Option<ViewFn>,
    social_media_login_aria_label: &'static str,
    #[prop(optional_no_strip)]
    sign_up_for_account_message: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="pf-v5-c-background-image"
            style=format!("--pf-v5-c-background-image--BackgroundImage: url({})", background_img_src)
        ></div>
        <div class="pf-v5-c-login">
            <div class="pf-v5-c-login__container">
                <header class="pf-v5-c-login__header">
                    <img class="pf-v5-c-brand" src=move || brand_img_src.get() alt=brand_img_alt />
                </header>
                <main class="pf-v5-c-login__main">
                    <header class="pf-v5-c-login__main-header">
                        <h1 class="pf-v5-c-title pf-m-3xl">{login_title}</h1>
                        {header_utilities.map(|utilities| view! {
                            <div class="pf-v5-c-login__main-header-utilities">
                                {utilities.run()}
                            </div>
                        })}
                    </header>
                    <div class="pf-v5-c-login__main-body">{children()}</div>
                    <footer class="pf-v5-c-login__main-footer">
                        {social_media_login_content.map(|content| view! {
                            <ul
                                class="pf-v5-c-login__main-footer-links"
                                aria-label=social_media_login_aria_label
                            >
                                {content.run()}
                            </ul>
                        })}
                        {sign_up_for_account_message.map(|message| view! {
                            <div class="pf-v5-c-login__main-footer-band">
                                <p class="pf-v5-c-login__main-footer-band-item">{message.run()}</p>
                            </div>
                        })}
                    </footer>
                </main>
                <footer class="pf-v5-c-login__footer">
                    <p>{text_content}</p>
                    <ul class="pf-v5-c-list pf-m-inline">
                        {footer_links.iter().map(|link| view! {
                            <li>
                                <a class="pf-v5-c-login__footer-link" href=link.href target="_blank">
                                    {link.label}
                                </a>
                            </li>
                        }).collect_view()}
                    </ul>
                </footer>
            </div>
        </div>
    }
}
