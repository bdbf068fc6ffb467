//! Trustify branding shown around the login form

/// Masthead logo for the light theme
pub const BRAND_IMAGE: &str = "/images/masthead-logo.svg";

/// Masthead logo for the dark theme
pub const BRAND_IMAGE_DARK: &str = "/images/masthead-logo-for-dark.svg";

pub const BRAND_IMAGE_ALT: &str = "App logo";

pub const BACKGROUND_IMAGE: &str = "/images/pf-background.svg";

pub const LOGIN_TITLE: &str = "Sign in to your account";

pub const TEXT_CONTENT: &str = "A community, vendor-neutral, thought-leadering, mostly informational collection of resources devoted to making Software Supply Chains easier to create, manage, consume and ultimately… to trust!";

pub const SOCIAL_LOGIN_ARIA_LABEL: &str = "Log in with social media";

pub const THEME_SWITCH_LABEL: &str = "Dark theme";

/// Link rendered in the page footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const FOOTER_LINKS: &[FooterLink] = &[
    FooterLink {
        label: "Documentation",
        href: "https://trustification.io/",
    },
    FooterLink {
        label: "Chat with us",
        href: "https://app.element.io/?updated=1.11.32#/room/#trustification:matrix.org",
    },
    FooterLink {
        label: "Blog",
        href: "https://www.trustification.io/blog",
    },
];

pub fn brand_image(is_dark: bool) -> &'static str {
    if is_dark { BRAND_IMAGE_DARK } else { BRAND_IMAGE }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_image_follows_theme() {
        assert_eq!(brand_image(false), BRAND_IMAGE);
        assert_eq!(brand_image(true), BRAND_IMAGE_DARK);
    }
}
