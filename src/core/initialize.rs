//! Readiness capability gating the first render of the template

use async_trait::async_trait;

use super::context::KcContext;

/// Decides when the page may render, e.g. once its stylesheets are in place
#[async_trait(?Send)]
pub trait Initializer: Send + Sync {
    async fn initialize(&self, ctx: &KcContext, do_use_default_css: bool) -> bool;
}

/// Always ready; used when the host page already carries its styles
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateInitializer;

#[async_trait(?Send)]
impl Initializer for ImmediateInitializer {
    async fn initialize(&self, _ctx: &KcContext, _do_use_default_css: bool) -> bool {
        true
    }
}

/// Stylesheets the default keycloak login theme depends on
pub fn default_stylesheets(ctx: &KcContext, do_use_default_css: bool) -> Vec<String> {
    if !do_use_default_css {
        return Vec::new();
    }

    let common = ctx.url.resources_common_path.trim_end_matches('/');
    let resources = ctx.url.resources_path.trim_end_matches('/');

    vec![
        format!("{common}/node_modules/@patternfly/patternfly/patternfly.min.css"),
        format!("{common}/node_modules/patternfly/dist/css/patternfly.min.css"),
        format!("{common}/node_modules/patternfly/dist/css/patternfly-additions.min.css"),
        format!("{resources}/css/login.css"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_immediate_initializer_is_ready() {
        let ctx = KcContext::mock();

        assert!(block_on(ImmediateInitializer.initialize(&ctx, true)));
        assert!(block_on(ImmediateInitializer.initialize(&ctx, false)));
    }

    #[test]
    fn test_no_stylesheets_without_default_css() {
        assert!(default_stylesheets(&KcContext::mock(), false).is_empty());
    }

    #[test]
    fn test_stylesheets_use_resource_paths() {
        let mut ctx = KcContext::mock();
        ctx.url.resources_common_path = "/common/".to_string();
        ctx.url.resources_path = "/login".to_string();

        let sheets = default_stylesheets(&ctx, true);

        assert_eq!(sheets.len(), 4);
        assert_eq!(
            sheets[0],
            "/common/node_modules/@patternfly/patternfly/patternfly.min.css"
        );
        assert_eq!(sheets[3], "/login/css/login.css");
    }
}
