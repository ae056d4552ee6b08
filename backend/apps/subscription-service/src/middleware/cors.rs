//! # CORS ミドルウェア
//!
//! Telegram Mini App（任意のオリジン）から呼び出せるよう、
//! 全レスポンスに CORS ヘッダーを付与する。
//!
//! - `OPTIONS` はルーティングせずに 204（空ボディ）を返す
//! - 404 / 500 を含む全レスポンスに同じヘッダーを付与する
//!
//! 許可内容は固定で、設定による変更は行わない。

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

const ALLOW_ORIGIN: &str = "*";
const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type, X-Telegram-User-Id";

/// CORS プリフライトへの応答と CORS ヘッダーの付与を行う
pub async fn cors(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    apply_cors_headers(response.headers_mut());
    response
}

fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
}

#[cfg(test)]
mod tests {
    use axum::{Router, body::Body, middleware::from_fn, routing::get};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;

    fn create_test_app() -> Router {
        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .fallback(|| async { (StatusCode::NOT_FOUND, "Not Found") })
            .layer(from_fn(cors))
    }

    fn assert_cors_headers(headers: &HeaderMap) {
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_METHODS],
            "GET, POST, OPTIONS"
        );
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
            "Content-Type, X-Telegram-User-Id"
        );
    }

    #[tokio::test]
    async fn test_通常のレスポンスにcorsヘッダーが付与される() {
        let sut = create_test_app();

        let response = sut
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors_headers(response.headers());
    }

    #[tokio::test]
    async fn test_optionsは任意のパスで204と空ボディを返す() {
        let sut = create_test_app();

        let response = sut
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/anything/at/all")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_cors_headers(response.headers());
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_404にもcorsヘッダーが付与される() {
        let sut = create_test_app();

        let response = sut
            .oneshot(Request::builder().uri("/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_cors_headers(response.headers());
    }
}
