//! Applies class names to elements outside the Leptos tree (`<html>`, `<body>`)

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Element receiving the classes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassTarget {
    Html,
    Body,
}

/// Individual class tokens of a class attribute value
pub fn class_tokens(class_name: &str) -> Vec<String> {
    class_name.split_whitespace().map(str::to_string).collect()
}

/// Add `class_name` to the target on mount and remove it again on cleanup
pub fn use_set_class_name(target: ClassTarget, class_name: impl Into<Signal<String>>) {
    let class_name = class_name.into();

    #[cfg(not(feature = "ssr"))]
    {
        let applied = StoredValue::new(Vec::<String>::new());

        let element = move || -> Option<web_sys::Element> {
            let document = web_sys::window()?.document()?;
            match target {
                ClassTarget::Html => document.document_element(),
                ClassTarget::Body => document.body().map(Into::into),
            }
        };

        let revert = move || {
            let tokens = applied.try_update_value(std::mem::take).unwrap_or_default();
            if let Some(element) = element() {
                for token in &tokens {
                    let _ = element.class_list().remove_1(token);
                }
            }
        };

        Effect::new(move |_| {
            let tokens = class_tokens(&class_name.get());
            revert();
            if let Some(element) = element() {
                for token in &tokens {
                    let _ = element.class_list().add_1(token);
                }
            }
            applied.set_value(tokens);
        });

        on_cleanup(revert);
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (target, class_name);
    }
}
