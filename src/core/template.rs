//! View model of the login page template
//!
//! Every conditional fragment of the template is decided here by a small pure
//! function returning a tagged variant. The UI layer only dispatches on the
//! result.

use super::classes::{ClassKey, KcClasses, KcClsx};
use super::context::{KcContext, MessageType};
use super::i18n::I18n;
use super::sanitize::{SanitizedHtml, sanitize_html};

/// Configuration bag accepted by the template
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateOptions {
    pub display_message: bool,
    pub display_required_fields: bool,
    pub document_title: Option<String>,
    pub body_class_name: Option<String>,
    pub do_use_default_css: bool,
    pub classes: KcClasses,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            display_message: true,
            display_required_fields: false,
            document_title: None,
            body_class_name: None,
            do_use_default_css: true,
            classes: KcClasses::new(),
        }
    }
}

impl TemplateOptions {
    pub fn kc_clsx(&self) -> KcClsx {
        KcClsx::new(self.do_use_default_css, self.classes.clone())
    }
}

/// Attempted username with a link to restart the flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsernameBlock {
    Empty,
    Attempted {
        username: String,
        restart_url: String,
    },
}

/// Content placed above the page body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderNode {
    Plain(UsernameBlock),
    /// Wrapped in a container carrying the required-fields legend
    RequiredFields(UsernameBlock),
}

/// Visual severity of the alert banner
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum AlertVariant {
    #[display("danger")]
    Danger,
    #[display("success")]
    Success,
    #[display("warning")]
    Warning,
    #[display("info")]
    Info,
    #[display("{_0}")]
    Custom(String),
}

impl From<&MessageType> for AlertVariant {
    fn from(kind: &MessageType) -> Self {
        match kind {
            MessageType::Error => AlertVariant::Danger,
            MessageType::Success => AlertVariant::Success,
            MessageType::Warning => AlertVariant::Warning,
            MessageType::Info => AlertVariant::Info,
            MessageType::Other(other) => AlertVariant::Custom(other.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertModel {
    pub variant: AlertVariant,
    pub summary: SanitizedHtml,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    /// Element id, `language-1` for the first option
    pub id: String,
    pub language_tag: String,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageMenu {
    Hidden,
    Selector {
        label: String,
        aria_label: String,
        options: Vec<LanguageOption>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TryAnotherWay {
    pub action: String,
}

pub fn username_block(ctx: &KcContext) -> UsernameBlock {
    match ctx.auth.as_ref() {
        Some(auth) if auth.show_username && !auth.show_reset_credentials => {
            match auth.attempted_username.as_ref() {
                Some(username) => UsernameBlock::Attempted {
                    username: username.clone(),
                    restart_url: ctx.url.login_restart_flow_url.clone(),
                },
                None => UsernameBlock::Empty,
            }
        }
        _ => UsernameBlock::Empty,
    }
}

pub fn header_node(ctx: &KcContext, options: &TemplateOptions) -> HeaderNode {
    let block = username_block(ctx);
    if options.display_required_fields {
        HeaderNode::RequiredFields(block)
    } else {
        HeaderNode::Plain(block)
    }
}

pub fn alert(ctx: &KcContext, options: &TemplateOptions) -> Option<AlertModel> {
    if !options.display_message {
        return None;
    }
    let message = ctx.message.as_ref()?;
    if message.kind == MessageType::Warning && ctx.is_app_initiated_action {
        return None;
    }

    Some(AlertModel {
        variant: AlertVariant::from(&message.kind),
        summary: sanitize_html(&message.summary),
    })
}

pub fn language_menu(i18n: &I18n) -> LanguageMenu {
    if i18n.enabled_languages.len() <= 1 {
        return LanguageMenu::Hidden;
    }

    LanguageMenu::Selector {
        label: i18n.current_language.label.clone(),
        aria_label: i18n.msg("languages"),
        options: i18n
            .enabled_languages
            .iter()
            .enumerate()
            .map(|(index, language)| LanguageOption {
                id: format!("language-{}", index + 1),
                language_tag: language.language_tag.clone(),
                label: language.label.clone(),
                href: language.href.clone(),
            })
            .collect(),
    }
}

pub fn try_another_way(ctx: &KcContext) -> Option<TryAnotherWay> {
    ctx.auth
        .as_ref()
        .filter(|auth| auth.show_try_another_way_link)
        .map(|_| TryAnotherWay {
            action: ctx.url.login_action.clone(),
        })
}

pub fn document_title(ctx: &KcContext, i18n: &I18n, options: &TemplateOptions) -> String {
    options
        .document_title
        .clone()
        .unwrap_or_else(|| i18n.msg_str("loginTitle", &[ctx.realm.display_name()]))
}

pub fn html_class_name(kc: &KcClsx) -> String {
    kc.class(ClassKey::KcHtmlClass)
}

pub fn body_class_name(kc: &KcClsx, options: &TemplateOptions) -> String {
    options
        .body_class_name
        .clone()
        .unwrap_or_else(|| kc.class(ClassKey::KcBodyClass))
}

/// Everything the template needs, derived once per render
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateModel {
    pub document_title: String,
    pub html_class: String,
    pub body_class: String,
    pub header: HeaderNode,
    pub alert: Option<AlertModel>,
    pub language_menu: LanguageMenu,
    pub try_another_way: Option<TryAnotherWay>,
}

impl TemplateModel {
    pub fn derive(ctx: &KcContext, i18n: &I18n, options: &TemplateOptions) -> Self {
        let kc = options.kc_clsx();
        Self {
            document_title: document_title(ctx, i18n, options),
            html_class: html_class_name(&kc),
            body_class: body_class_name(&kc, options),
            header: header_node(ctx, options),
            alert: alert(ctx, options),
            language_menu: language_menu(i18n),
            try_another_way: try_another_way(ctx),
        }
    }
}
