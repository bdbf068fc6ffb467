use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Font Awesome icon name (without the `fa-` prefix)
    name: &'static str,
    /// Extra CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let icon_class = if class.is_empty() {
        format!("fas fa-{}", name)
    } else {
        format!("fas fa-{} {}", name, class)
    };

    view! { <i class=icon_class aria-hidden="true"></i> }
}

/// Predefined icons
pub mod icons {
    pub const EXCLAMATION_CIRCLE: &str = "exclamation-circle";
    pub const EXCLAMATION_TRIANGLE: &str = "exclamation-triangle";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const INFO_CIRCLE: &str = "info-circle";
    pub const BELL: &str = "bell";
    pub const CARET_DOWN: &str = "caret-down";
}
