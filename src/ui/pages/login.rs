//! Username and password login page
//!
//! Posts the credentials to the login action of the current flow.

use leptos::prelude::*;

use crate::core::classes::{ClassKey, KcClasses, KcClsx};
use crate::core::context::KcContext;
use crate::core::i18n::I18n;
use crate::ui::template::Template;

/// Login page component
#[component]
pub fn Login(
    kc_context: KcContext,
    i18n: I18n,
    #[prop(default = true)] do_use_default_css: bool,
    #[prop(optional)] classes: KcClasses,
) -> impl IntoView {
    let kc = KcClsx::new(do_use_default_css, classes.clone());
    let realm = kc_context.realm.clone();
    let url = kc_context.url.clone();
    let prefill = kc_context.login.clone().unwrap_or_default();

    // Keep the button from being pressed twice while the post is in flight
    let (is_submitting, set_is_submitting) = signal(false);

    let username_label = if realm.login_with_email_allowed {
        i18n.msg("usernameOrEmail")
    } else {
        i18n.msg("username")
    };

    let info_node = realm.registration_allowed.then(|| {
        let no_account = i18n.msg("noAccount");
        let do_register = i18n.msg("doRegister");
        let registration_url = url.registration_url.clone();
        ViewFn::from(move || {
            view! {
                <div id="kc-registration">
                    <span>
                        {no_account.clone()}" "
                        <a tabindex="6" href=registration_url.clone()>{do_register.clone()}</a>
                    </span>
                </div>
            }
        })
    });

    let remember_me = realm
        .remember_me
        .then(|| (prefill.remember_me.is_some(), i18n.msg("rememberMe")));

    let forgot_password = realm.reset_password_allowed.then(|| {
        (
            url.login_reset_credentials_url.clone(),
            i18n.msg("doForgotPassword"),
        )
    });

    let password_label = i18n.msg("password");
    let login_label = i18n.msg("doLogIn");

    view! {
        <Template
            kc_context=kc_context
            i18n=i18n
            do_use_default_css=do_use_default_css
            classes=classes
            info_node=info_node
        >
            <div id="kc-form">
                <div id="kc-form-wrapper">
                    <form
                        id="kc-form-login"
                        class=kc.class(ClassKey::KcFormClass)
                        action=url.login_action.clone()
                        method="post"
                        on:submit=move |_| set_is_submitting.set(true)
                    >
                        <div class=kc.class(ClassKey::KcFormGroupClass)>
                            <label for="username" class=kc.class(ClassKey::KcLabelClass)>
                                {username_label.clone()}
                            </label>
                            <input
                                tabindex="1"
                                id="username"
                                class=kc.class(ClassKey::KcInputClass)
                                name="username"
                                value=prefill.username.clone().unwrap_or_default()
                                type="text"
                                autofocus
                                autocomplete="username"
                            />
                        </div>

                        <div class=kc.class(ClassKey::KcFormGroupClass)>
                            <label for="password" class=kc.class(ClassKey::KcLabelClass)>
                                {password_label.clone()}
                            </label>
                            <input
                                tabindex="2"
                                id="password"
                                class=kc.class(ClassKey::KcInputClass)
                                name="password"
                                type="password"
                                autocomplete="current-password"
                            />
                        </div>

                        <div class=kc.classes_for(&[ClassKey::KcFormGroupClass, ClassKey::KcFormSettingClass])>
                            <div id="kc-form-options">
                                {remember_me.clone().map(|(checked, label)| view! {
                                    <div class="checkbox">
                                        <label>
                                            <input
                                                tabindex="3"
                                                id="rememberMe"
                                                name="rememberMe"
                                                type="checkbox"
                                                checked=checked
                                            />
                                            {label}
                                        </label>
                                    </div>
                                })}
                            </div>
                            <div class=kc.class(ClassKey::KcFormOptionsClass)>
                                {forgot_password.clone().map(|(href, label)| view! {
                                    <span>
                                        <a tabindex="5" href=href>{label}</a>
                                    </span>
                                })}
                            </div>
                        </div>

                        <div id="kc-form-buttons" class=kc.class(ClassKey::KcFormGroupClass)>
                            <input
                                tabindex="4"
                                class=kc.classes_for(&[
                                    ClassKey::KcButtonClass,
                                    ClassKey::KcButtonPrimaryClass,
                                    ClassKey::KcButtonBlockClass,
                                ])
                                name="login"
                                id="kc-login"
                                type="submit"
                                value=login_label.clone()
                                disabled=move || is_submitting.get()
                            />
                        </div>
                    </form>
                </div>
            </div>
        </Template>
    }
}
