//! Preview server routes

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list, render_app_to_stream_with_context};
use tower_http::compression::{CompressionLayer, CompressionLevel};
use tower_http::services::ServeDir;

use crate::app::{App, PageBootstrap, shell};

/// Build the preview router
///
/// Keycloak serves the login pages under many paths and posts the forms back
/// to them, so any request outside the asset directories renders the page.
pub fn router(leptos_options: LeptosOptions, bootstrap: PageBootstrap) -> Router {
    let routes = generate_route_list(App);
    let site_root = leptos_options.site_root.to_string();

    let provide_bootstrap = move || provide_context(bootstrap.clone());

    // Serve pre-compressed static assets from /pkg
    let pkg_service = ServeDir::new(format!("{site_root}/pkg"))
        .precompressed_br()
        .precompressed_gzip();
    let images_service = ServeDir::new(format!("{site_root}/images"));

    let render_page = render_app_to_stream_with_context(provide_bootstrap.clone(), {
        let leptos_options = leptos_options.clone();
        move || shell(leptos_options.clone())
    });

    Router::new()
        .nest_service("/pkg", pkg_service)
        .nest_service("/images", images_service)
        .leptos_routes_with_context(&leptos_options, routes, provide_bootstrap, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(render_page)
        .with_state(leptos_options)
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn create_test_app() -> Router {
        let options = LeptosOptions::builder()
            .output_name("trustify-login")
            .build();
        router(options, PageBootstrap::default())
    }

    #[tokio::test]
    async fn test_login_action_post_renders_page() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/realms/trustify/login-actions/authenticate")
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(Body::from("username=alice&password=secret"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_locale_link_renders_page() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/realms/trustify/login-actions/authenticate?kc_locale=de")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_root_renders_page() {
        let response = create_test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
