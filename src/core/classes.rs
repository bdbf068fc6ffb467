//! Class name resolution for keycloak class keys
//!
//! Every key resolves to the key name itself, the PatternFly defaults (when
//! default styling is enabled) and any override supplied by the page.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Class keys referenced by the login templates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClassKey {
    KcHtmlClass,
    KcBodyClass,
    KcFormGroupClass,
    KcResetFlowIcon,
    KcContentWrapperClass,
    KcLabelWrapperClass,
    KcAlertTitleClass,
    KcFormClass,
    KcLabelClass,
    KcInputClass,
    KcButtonClass,
    KcButtonPrimaryClass,
    KcButtonBlockClass,
    KcFormSettingClass,
    KcFormOptionsClass,
    KcFormButtonsClass,
}

impl ClassKey {
    pub fn name(&self) -> &'static str {
        match self {
            ClassKey::KcHtmlClass => "kcHtmlClass",
            ClassKey::KcBodyClass => "kcBodyClass",
            ClassKey::KcFormGroupClass => "kcFormGroupClass",
            ClassKey::KcResetFlowIcon => "kcResetFlowIcon",
            ClassKey::KcContentWrapperClass => "kcContentWrapperClass",
            ClassKey::KcLabelWrapperClass => "kcLabelWrapperClass",
            ClassKey::KcAlertTitleClass => "kcAlertTitleClass",
            ClassKey::KcFormClass => "kcFormClass",
            ClassKey::KcLabelClass => "kcLabelClass",
            ClassKey::KcInputClass => "kcInputClass",
            ClassKey::KcButtonClass => "kcButtonClass",
            ClassKey::KcButtonPrimaryClass => "kcButtonPrimaryClass",
            ClassKey::KcButtonBlockClass => "kcButtonBlockClass",
            ClassKey::KcFormSettingClass => "kcFormSettingClass",
            ClassKey::KcFormOptionsClass => "kcFormOptionsClass",
            ClassKey::KcFormButtonsClass => "kcFormButtonsClass",
        }
    }

    /// Classes applied when the default keycloak stylesheets are in use
    pub fn default_classes(&self) -> &'static str {
        match self {
            ClassKey::KcHtmlClass => "login-pf",
            ClassKey::KcBodyClass => "",
            ClassKey::KcFormGroupClass => "form-group",
            ClassKey::KcResetFlowIcon => "pficon pficon-arrow fa",
            ClassKey::KcContentWrapperClass => "row",
            ClassKey::KcLabelWrapperClass => "col-xs-12 col-sm-12 col-md-12 col-lg-12",
            ClassKey::KcAlertTitleClass => "pf-c-alert__title kc-feedback-text",
            ClassKey::KcFormClass => "",
            ClassKey::KcLabelClass => "pf-c-form__label pf-c-form__label-text",
            ClassKey::KcInputClass => "pf-c-form-control",
            ClassKey::KcButtonClass => "pf-c-button",
            ClassKey::KcButtonPrimaryClass => "pf-m-primary",
            ClassKey::KcButtonBlockClass => "pf-m-block",
            ClassKey::KcFormSettingClass => "login-pf-settings",
            ClassKey::KcFormOptionsClass => "col-xs-12 col-sm-12 col-md-12 col-lg-12",
            ClassKey::KcFormButtonsClass => "col-xs-12 col-sm-12 col-md-12 col-lg-12",
        }
    }
}

/// Per-page class overrides
pub type KcClasses = HashMap<ClassKey, String>;

/// Resolves class keys into class attribute values
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KcClsx {
    do_use_default_css: bool,
    classes: KcClasses,
}

impl KcClsx {
    pub fn new(do_use_default_css: bool, classes: KcClasses) -> Self {
        Self {
            do_use_default_css,
            classes,
        }
    }

    /// Resolve a single key
    pub fn class(&self, key: ClassKey) -> String {
        self.classes_for(&[key])
    }

    /// Resolve several keys into one class attribute
    pub fn classes_for(&self, keys: &[ClassKey]) -> String {
        clsx(keys.iter().flat_map(|key| {
            [
                key.name(),
                if self.do_use_default_css {
                    key.default_classes()
                } else {
                    ""
                },
                self.classes.get(key).map(String::as_str).unwrap_or(""),
            ]
        }))
    }
}

/// Join class name fragments, skipping empty ones
pub fn clsx<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for part in parts {
        for class in part.as_ref().split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(class);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clsx_skips_empty_parts() {
        assert_eq!(clsx(["a", "", "  b  c ", ""]), "a b c");
        assert_eq!(clsx(Vec::<String>::new()), "");
    }

    #[test]
    fn test_default_css_adds_patternfly_classes() {
        let kc = KcClsx::new(true, KcClasses::new());

        assert_eq!(kc.class(ClassKey::KcHtmlClass), "kcHtmlClass login-pf");
        assert_eq!(kc.class(ClassKey::KcBodyClass), "kcBodyClass");
    }

    #[test]
    fn test_without_default_css_only_key_and_override() {
        let mut classes = KcClasses::new();
        classes.insert(ClassKey::KcFormGroupClass, "my-group".to_string());
        let kc = KcClsx::new(false, classes);

        assert_eq!(kc.class(ClassKey::KcFormGroupClass), "kcFormGroupClass my-group");
        assert_eq!(kc.class(ClassKey::KcHtmlClass), "kcHtmlClass");
    }

    #[test]
    fn test_override_is_appended_after_defaults() {
        let mut classes = KcClasses::new();
        classes.insert(ClassKey::KcButtonClass, "wide".to_string());
        let kc = KcClsx::new(true, classes);

        assert_eq!(
            kc.classes_for(&[ClassKey::KcButtonClass, ClassKey::KcButtonPrimaryClass]),
            "kcButtonClass pf-c-button wide kcButtonPrimaryClass pf-m-primary"
        );
    }

    #[test]
    fn test_class_keys_deserialize_from_camel_case() {
        let classes: KcClasses =
            serde_json::from_str(r#"{"kcHtmlClass":"custom-html"}"#).unwrap();

        assert_eq!(
            classes.get(&ClassKey::KcHtmlClass).map(String::as_str),
            Some("custom-html")
        );
    }
}
