use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Router,
};
use leptos::{config::LeptosOptions, prelude::*};
use thiserror::Error;
use tower::util::ServiceExt;
use tower_http::services::ServeDir;

use crate::app::shell;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("couldn't load site configuration")]
    Config(#[from] leptos::config::errors::LeptosConfigError),
    #[error("couldn't bind to {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server stopped unexpectedly")]
    Serve(#[source] std::io::Error),
}

/// Static files from the site root, the HTML shell for any path that isn't one.
pub fn router(options: LeptosOptions) -> Router {
    Router::new()
        .fallback(file_or_shell_handler)
        .with_state(options)
}

pub async fn file_or_shell_handler(
    uri: Uri,
    State(options): State<LeptosOptions>,
) -> Response {
    let root = options.site_root.clone();
    match get_static_file(uri.clone(), &root).await {
        Ok(res) if res.status() != StatusCode::NOT_FOUND => res,
        Ok(_) => {
            log::debug!("serving shell for {uri}");
            Html(shell(options).to_html()).into_response()
        }
        Err((status, msg)) => {
            log::error!("{msg}");
            (status, msg).into_response()
        }
    }
}

async fn get_static_file(uri: Uri, root: &str) -> Result<Response, (StatusCode, String)> {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .map_err(|err| (StatusCode::BAD_REQUEST, format!("Bad request: {err}")))?;
    // `ServeDir` implements `tower::Service` so we can call it with `tower::ServiceExt::oneshot`
    match ServeDir::new(root).oneshot(req).await {
        Ok(res) => Ok(res.into_response()),
        Err(err) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong: {err}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_path_gets_shell() {
        let options = LeptosOptions::builder()
            .output_name("portfolio-site")
            .site_root("target/does-not-exist")
            .build();
        let res = file_or_shell_handler("/anything".parse().unwrap(), State(options)).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("<body"));
        assert!(html.contains("/pkg/portfolio-site.css"));
        // the page itself renders in the browser
        assert!(!html.contains("id=\"home\""));
    }
}
