//! Router assembly.
//!
//! One router, two jobs: a `/healthz` probe and the built single-page app.
//! Every path that does not match a real file under the site directory falls
//! back to `index.html` with a 200, so the client-side view store owns
//! navigation and deep links or reloads never 404.

use std::path::Path;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Build the app router over a directory of built web assets.
pub fn app(site_dir: &Path) -> Router {
    let spa = ServeDir::new(site_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(site_dir.join("index.html")));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;

    fn site_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata/site")
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn healthz_is_ok() {
        let response = app(&site_dir())
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn root_serves_index() {
        let response = app(&site_dir())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("unihub-fixture"));
    }

    #[tokio::test]
    async fn real_file_is_served_directly() {
        let response = app(&site_dir())
            .oneshot(Request::builder().uri("/app.css").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("fixture-stylesheet"));
    }

    #[tokio::test]
    async fn unknown_path_falls_back_to_index_with_200() {
        let response = app(&site_dir())
            .oneshot(
                Request::builder()
                    .uri("/dashboard/wellness")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Not a 404: the SPA handles routing client-side.
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("unihub-fixture"));
    }
}
