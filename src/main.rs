#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), portfolio_site::server::ServerError> {
    use leptos::prelude::*;
    use portfolio_site::{content, server::*};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match content::validate() {
        Ok(()) => log::info!("page content validated"),
        Err(err) => log::warn!("page content is inconsistent: {err}"),
    }

    let conf = get_configuration(None)?;
    let addr = conf.leptos_options.site_addr;
    let app = router(conf.leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    log::info!("listening on http://{addr}");
    axum::serve(listener, app.into_make_service())
        .await
        .map_err(ServerError::Serve)
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // the page is mounted by the exported `hydrate` function in lib.rs
}
