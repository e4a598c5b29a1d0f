use std::sync::LazyLock;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use leptos::config::errors::LeptosConfigError;
use thiserror::Error;

use crate::icon::{render_png, IconError, ICON_CONTENT_TYPE};

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("couldn't load leptos configuration: {0}")]
    Config(#[from] LeptosConfigError),
    #[error("server i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

static ICON_PNG: LazyLock<Result<Vec<u8>, IconError>> = LazyLock::new(render_png);

/// Serves the generated favicon.
pub async fn icon() -> Response {
    match &*ICON_PNG {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, ICON_CONTENT_TYPE),
                (header::CACHE_CONTROL, "public, max-age=86400"),
            ],
            bytes.clone(),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("couldn't render icon: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ICON_PATH;
    use crate::icon::ICON_SIZE;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    async fn body_bytes(res: Response) -> Vec<u8> {
        axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .expect("should be able to read body")
            .to_vec()
    }

    #[tokio::test]
    async fn test_icon_handler() {
        let res = icon().await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers().get(header::CONTENT_TYPE).map(|v| v.as_bytes()),
            Some("image/png".as_bytes())
        );
        let bytes = body_bytes(res).await;
        let img = image::load_from_memory(&bytes).expect("body should be a valid image");
        assert_eq!((img.width(), img.height()), (ICON_SIZE, ICON_SIZE));
    }

    #[tokio::test]
    async fn test_icon_route() {
        let app = Router::new().route(ICON_PATH, get(icon));
        let res = app
            .oneshot(
                Request::builder()
                    .uri("/icon.png")
                    .body(Body::empty())
                    .expect("should be able to build request"),
            )
            .await
            .expect("router is infallible");
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers().get(header::CONTENT_TYPE).map(|v| v.as_bytes()),
            Some("image/png".as_bytes())
        );
        assert_eq!(&body_bytes(res).await[..8], b"\x89PNG\r\n\x1a\n");
    }
}
