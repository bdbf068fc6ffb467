//! Authentication context handed over by the identity provider.
//!
//! The server-side login flow serializes this object (camelCase JSON) into the
//! page as `window.kcContext`. It is read-only for the rest of the crate.

use serde::{Deserialize, Serialize};

/// Page identifier used when the context does not name one.
pub const DEFAULT_PAGE_ID: &str = "login.ftl";

/// Per-request authentication context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KcContext {
    #[serde(default = "default_page_id")]
    pub page_id: String,
    pub realm: Realm,
    pub url: Urls,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<Auth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(default)]
    pub is_app_initiated_action: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<LoginPrefill>,
}

fn default_page_id() -> String {
    DEFAULT_PAGE_ID.to_string()
}

/// Realm the user is signing into
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Realm {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub remember_me: bool,
    pub reset_password_allowed: bool,
    pub registration_allowed: bool,
    pub login_with_email_allowed: bool,
}

impl Realm {
    /// Human readable realm name, falling back to the technical name
    pub fn display_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.name)
    }
}

/// Navigation targets of the login flow
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Urls {
    pub login_action: String,
    pub login_restart_flow_url: String,
    pub login_reset_credentials_url: String,
    pub registration_url: String,
    pub resources_path: String,
    pub resources_common_path: String,
}

/// State of the current authentication attempt
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Auth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempted_username: Option<String>,
    pub show_username: bool,
    pub show_reset_credentials: bool,
    pub show_try_another_way_link: bool,
}

/// Feedback message produced by the previous request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub summary: String,
}

/// Message severity as sent by the server.
///
/// Unknown literals are preserved so they can be forwarded untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(from = "String", into = "String")]
pub enum MessageType {
    #[display("success")]
    Success,
    #[display("warning")]
    Warning,
    #[display("error")]
    Error,
    #[display("info")]
    Info,
    #[display("{_0}")]
    Other(String),
}

impl From<String> for MessageType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "success" => MessageType::Success,
            "warning" => MessageType::Warning,
            "error" => MessageType::Error,
            "info" => MessageType::Info,
            _ => MessageType::Other(value),
        }
    }
}

impl From<MessageType> for String {
    fn from(value: MessageType) -> Self {
        value.to_string()
    }
}

/// Locale information, present when internationalization is enabled for the realm
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Locale {
    pub current_language_tag: String,
    pub supported: Vec<SupportedLocale>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupportedLocale {
    pub language_tag: String,
    pub label: String,
    pub url: String,
}

/// Values to prefill the login form with
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginPrefill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remember_me: Option<String>,
}

impl KcContext {
    /// Parse a context from its JSON representation
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// JSON safe to embed inside an inline `<script>` element
    pub fn to_script_json(&self) -> serde_json::Result<String> {
        Ok(escape_script_json(&serde_json::to_string(self)?))
    }

    /// Context used when no identity provider is driving the page
    pub fn mock() -> Self {
        let realm_path = "/realms/trustify";
        let login_actions = format!("{realm_path}/login-actions");

        Self {
            page_id: DEFAULT_PAGE_ID.to_string(),
            realm: Realm {
                name: "trustify".to_string(),
                display_name: Some("Trustify".to_string()),
                remember_me: true,
                reset_password_allowed: true,
                registration_allowed: false,
                login_with_email_allowed: true,
            },
            url: Urls {
                login_action: format!("{login_actions}/authenticate"),
                login_restart_flow_url: format!("{login_actions}/restart"),
                login_reset_credentials_url: format!("{login_actions}/reset-credentials"),
                registration_url: format!("{realm_path}/protocol/openid-connect/registrations"),
                resources_path: "/resources/login/trustify".to_string(),
                resources_common_path: "/resources/common/keycloak".to_string(),
            },
            auth: None,
            message: None,
            is_app_initiated_action: false,
            locale: Some(Locale {
                current_language_tag: "en".to_string(),
                supported: [("en", "English"), ("de", "Deutsch"), ("fr", "Français")]
                    .into_iter()
                    .map(|(tag, label)| SupportedLocale {
                        language_tag: tag.to_string(),
                        label: label.to_string(),
                        url: format!("{login_actions}/authenticate?kc_locale={tag}"),
                    })
                    .collect(),
            }),
            login: None,
        }
    }
}

/// Prevent `</script>` and HTML comment openers from terminating an inline script
fn escape_script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_context_applies_defaults() {
        let ctx = KcContext::from_json(r#"{"realm":{"name":"demo"},"url":{}}"#).unwrap();

        assert_eq!(ctx.page_id, DEFAULT_PAGE_ID);
        assert!(ctx.auth.is_none());
        assert!(ctx.message.is_none());
        assert!(ctx.locale.is_none());
        assert!(!ctx.is_app_initiated_action);
    }

    #[test]
    fn test_camel_case_fields() {
        let json = r#"{
            "pageId": "login.ftl",
            "realm": {"name": "demo", "displayName": "Demo Realm"},
            "url": {"loginAction": "/act", "loginRestartFlowUrl": "/restart"},
            "auth": {"attemptedUsername": "alice", "showUsername": true, "showTryAnotherWayLink": true},
            "message": {"type": "error", "summary": "Invalid password"},
            "isAppInitiatedAction": true
        }"#;
        let ctx = KcContext::from_json(json).unwrap();

        assert_eq!(ctx.realm.display_name(), "Demo Realm");
        assert_eq!(ctx.url.login_action, "/act");
        assert_eq!(ctx.url.login_restart_flow_url, "/restart");

        let auth = ctx.auth.unwrap();
        assert_eq!(auth.attempted_username.as_deref(), Some("alice"));
        assert!(auth.show_username);
        assert!(!auth.show_reset_credentials);
        assert!(auth.show_try_another_way_link);

        let message = ctx.message.unwrap();
        assert_eq!(message.kind, MessageType::Error);
        assert!(ctx.is_app_initiated_action);
    }

    #[test]
    fn test_realm_display_name_falls_back_to_name() {
        let mut realm = Realm {
            name: "trustify".to_string(),
            ..Default::default()
        };
        assert_eq!(realm.display_name(), "trustify");

        realm.display_name = Some(String::new());
        assert_eq!(realm.display_name(), "trustify");
    }

    #[test]
    fn test_unknown_message_type_is_preserved() {
        let message: Message =
            serde_json::from_str(r#"{"type":"notice","summary":"hi"}"#).unwrap();

        assert_eq!(message.kind, MessageType::Other("notice".to_string()));
        assert_eq!(message.kind.to_string(), "notice");

        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains(r#""type":"notice""#));
    }

    #[test]
    fn test_script_json_cannot_close_script_tag() {
        let mut ctx = KcContext::mock();
        ctx.message = Some(Message {
            kind: MessageType::Info,
            summary: "</script><script>alert(1)</script>".to_string(),
        });

        let json = ctx.to_script_json().unwrap();
        assert!(!json.contains("</script>"));

        let parsed = KcContext::from_json(&json).unwrap();
        assert_eq!(parsed, ctx);
    }

    #[test]
    fn test_mock_offers_several_languages() {
        let ctx = KcContext::mock();
        let locale = ctx.locale.unwrap();

        assert_eq!(locale.current_language_tag, "en");
        assert_eq!(locale.supported.len(), 3);
        assert!(locale.supported[1].url.ends_with("kc_locale=de"));
    }
}
