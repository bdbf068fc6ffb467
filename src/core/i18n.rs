//! Internationalization handle for the login pages
//!
//! Only the handful of keys the login theme renders itself ship with the
//! crate. Lookups fall back from the current language to English and finally
//! to the key itself.

use serde::{Deserialize, Serialize};

use super::context::KcContext;

pub const FALLBACK_LANGUAGE_TAG: &str = "en";

/// The language the page is rendered in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub language_tag: String,
    pub label: String,
}

/// A language the user can switch to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnabledLanguage {
    pub language_tag: String,
    pub label: String,
    pub href: String,
}

/// Read-only message lookup for a single request
#[derive(Debug, Clone, PartialEq)]
pub struct I18n {
    pub current_language: Language,
    pub enabled_languages: Vec<EnabledLanguage>,
}

impl I18n {
    /// Build the handle from the locale section of the context
    pub fn from_context(ctx: &KcContext) -> Self {
        let Some(locale) = ctx.locale.as_ref() else {
            return Self {
                current_language: Language {
                    language_tag: FALLBACK_LANGUAGE_TAG.to_string(),
                    label: language_label(FALLBACK_LANGUAGE_TAG).to_string(),
                },
                enabled_languages: Vec::new(),
            };
        };

        let enabled_languages: Vec<EnabledLanguage> = locale
            .supported
            .iter()
            .map(|supported| EnabledLanguage {
                language_tag: supported.language_tag.clone(),
                label: supported.label.clone(),
                href: supported.url.clone(),
            })
            .collect();

        let current_tag = if locale.current_language_tag.is_empty() {
            FALLBACK_LANGUAGE_TAG
        } else {
            locale.current_language_tag.as_str()
        };

        let label = enabled_languages
            .iter()
            .find(|language| language.language_tag == current_tag)
            .map(|language| language.label.clone())
            .unwrap_or_else(|| language_label(current_tag).to_string());

        Self {
            current_language: Language {
                language_tag: current_tag.to_string(),
                label,
            },
            enabled_languages,
        }
    }

    /// Look up a message and substitute `{0}`, `{1}`, ... placeholders
    pub fn msg_str(&self, key: &str, args: &[&str]) -> String {
        let template = lookup(&self.current_language.language_tag, key)
            .or_else(|| lookup(FALLBACK_LANGUAGE_TAG, key))
            .unwrap_or(key);

        format_message(template, args)
    }

    /// Look up a message without arguments
    pub fn msg(&self, key: &str) -> String {
        self.msg_str(key, &[])
    }
}

fn format_message(template: &str, args: &[&str]) -> String {
    args.iter()
        .enumerate()
        .fold(template.to_string(), |message, (index, arg)| {
            message.replace(&format!("{{{index}}}"), arg)
        })
}

/// Endonym for the language tags the theme knows about
fn language_label(tag: &str) -> &str {
    match primary_subtag(tag) {
        "en" => "English",
        "de" => "Deutsch",
        "fr" => "Français",
        _ => tag,
    }
}

fn primary_subtag(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}

fn lookup(tag: &str, key: &str) -> Option<&'static str> {
    match primary_subtag(tag) {
        "en" => english(key),
        "de" => german(key),
        "fr" => french(key),
        _ => None,
    }
}

fn english(key: &str) -> Option<&'static str> {
    Some(match key {
        "loginTitle" => "Sign in to {0}",
        "loginAccountTitle" => "Sign in to your account",
        "languages" => "Languages",
        "restartLoginTooltip" => "Restart login",
        "requiredFields" => "Required fields",
        "doTryAnotherWay" => "Try Another Way",
        "usernameOrEmail" => "Username or email",
        "username" => "Username",
        "password" => "Password",
        "rememberMe" => "Remember me",
        "doForgotPassword" => "Forgot Password?",
        "doLogIn" => "Sign In",
        "noAccount" => "New user?",
        "doRegister" => "Register",
        _ => return None,
    })
}

fn german(key: &str) -> Option<&'static str> {
    Some(match key {
        "loginTitle" => "Anmeldung bei {0}",
        "loginAccountTitle" => "Melden Sie sich bei Ihrem Konto an",
        "languages" => "Sprachen",
        "restartLoginTooltip" => "Anmeldung neu starten",
        "requiredFields" => "Erforderliche Felder",
        "doTryAnotherWay" => "Einen anderen Weg versuchen",
        "usernameOrEmail" => "Benutzername oder E-Mail",
        "username" => "Benutzername",
        "password" => "Passwort",
        "rememberMe" => "Angemeldet bleiben",
        "doForgotPassword" => "Passwort vergessen?",
        "doLogIn" => "Anmelden",
        "noAccount" => "Neuer Benutzer?",
        "doRegister" => "Registrieren",
        _ => return None,
    })
}

fn french(key: &str) -> Option<&'static str> {
    Some(match key {
        "loginTitle" => "Se connecter à {0}",
        "loginAccountTitle" => "Connectez-vous à votre compte",
        "languages" => "Langues",
        "restartLoginTooltip" => "Redémarrer la connexion",
        "requiredFields" => "Champs obligatoires",
        "doTryAnotherWay" => "Essayer une autre méthode",
        "usernameOrEmail" => "Nom d'utilisateur ou courriel",
        "username" => "Nom d'utilisateur",
        "password" => "Mot de passe",
        "rememberMe" => "Se souvenir de moi",
        "doForgotPassword" => "Mot de passe oublié ?",
        "doLogIn" => "Connexion",
        "noAccount" => "Nouvel utilisateur ?",
        "doRegister" => "Enregistrement",
        _ => return None,
    })
}
