#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use leptos::prelude::*;
    use trustify_login_theme::app::PageBootstrap;
    use trustify_login_theme::core::config::Config;
    use trustify_login_theme::server::router;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load preview config from environment variables
    let config = Config::from_env();

    tracing::info!(
        "Config loaded: context_file={}, default_css={}",
        config.has_context_file(),
        config.use_default_css
    );

    let kc_context = config.load_context().inspect_err(|err| {
        tracing::error!("Cannot load login context: {}", err);
    })?;

    tracing::info!(
        "Serving page {} for realm {}",
        kc_context.page_id,
        kc_context.realm.name
    );

    let bootstrap = PageBootstrap {
        kc_context,
        do_use_default_css: config.use_default_css,
    };

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app = router(leptos_options, bootstrap);

    tracing::info!("listening on http://{}", &addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
