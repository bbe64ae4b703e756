//! CORS and security-header middleware.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::debug;

const DEFAULT_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "http://localhost:3001",
    "https://shop.example.com",
];

/// CORS layer for browser clients.
///
/// A configured frontend URL replaces the default origin allow-list entirely.
/// Origin strings that do not form a valid header value are skipped.
pub fn cors_layer(frontend_url: Option<&str>) -> CorsLayer {
    let origins: Vec<HeaderValue> = match frontend_url {
        Some(origin) => origin.parse().ok().into_iter().collect(),
        None => DEFAULT_ORIGINS
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect(),
    };

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("x-csrf-token"),
        ])
        .allow_credentials(true)
        .expose_headers([header::CONTENT_LENGTH])
}

/// Sets baseline security headers on every response.
pub async fn security_headers(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    headers.insert("x-content-type-options", HeaderValue::from_static("nosniff"));
    headers.insert("x-frame-options", HeaderValue::from_static("DENY"));
    headers.insert("x-xss-protection", HeaderValue::from_static("1; mode=block"));
    headers.insert(
        "referrer-policy",
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    response
}

/// Reflects the request origin and answers preflights directly.
///
/// Diagnostic middleware for chasing CORS failures against local frontends;
/// not meant to be mounted in production.
pub async fn debug_cors(req: Request, next: Next) -> Response {
    let origin = req.headers().get(header::ORIGIN).cloned();
    debug!(
        origin = origin.as_ref().and_then(|v| v.to_str().ok()).unwrap_or("-"),
        method = %req.method(),
        path = req.uri().path(),
        "cors request"
    );

    let mut response = if req.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(req).await
    };

    let headers = response.headers_mut();
    if let Some(origin) = origin {
        headers.insert("access-control-allow-origin", origin);
    }
    headers.insert(
        "access-control-allow-credentials",
        HeaderValue::from_static("true"),
    );
    headers.insert(
        "access-control-allow-headers",
        HeaderValue::from_static(
            "Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token, Authorization, Accept, Origin, Cache-Control, X-Requested-With",
        ),
    );
    headers.insert(
        "access-control-allow-methods",
        HeaderValue::from_static("POST, OPTIONS, GET, PUT, DELETE"),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request as HttpRequest, routing::get};
    use tower::ServiceExt;

    async fn ok() -> &'static str {
        "ok"
    }

    fn preflight(origin: &str) -> HttpRequest<Body> {
        HttpRequest::builder()
            .method(Method::OPTIONS)
            .uri("/")
            .header("origin", origin)
            .header("access-control-request-method", "GET")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn preflight_allows_default_origin() {
        let app = Router::new().route("/", get(ok)).layer(cors_layer(None));

        let response = app.oneshot(preflight("http://localhost:3000")).await.unwrap();

        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "http://localhost:3000"
        );
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-credentials")
                .unwrap(),
            "true"
        );
    }

    #[tokio::test]
    async fn frontend_url_replaces_default_origins() {
        let app = Router::new()
            .route("/", get(ok))
            .layer(cors_layer(Some("https://app.example.net")));

        let allowed = app
            .clone()
            .oneshot(preflight("https://app.example.net"))
            .await
            .unwrap();
        assert_eq!(
            allowed
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "https://app.example.net"
        );

        let rejected = app.oneshot(preflight("http://localhost:3000")).await.unwrap();
        assert!(
            rejected
                .headers()
                .get("access-control-allow-origin")
                .is_none()
        );
    }

    #[tokio::test]
    async fn security_headers_are_set_on_responses() {
        let app = Router::new()
            .route("/", get(ok))
            .layer(axum::middleware::from_fn(security_headers));

        let response = app
            .oneshot(HttpRequest::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
        assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
        assert_eq!(
            headers.get("referrer-policy").unwrap(),
            "strict-origin-when-cross-origin"
        );
    }

    #[tokio::test]
    async fn debug_cors_short_circuits_preflight() {
        let app = Router::new()
            .route("/", get(ok))
            .layer(axum::middleware::from_fn(debug_cors));

        let response = app
            .oneshot(preflight("http://localhost:5173"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "http://localhost:5173"
        );
    }

    #[tokio::test]
    async fn debug_cors_mirrors_origin_on_plain_requests() {
        let app = Router::new()
            .route("/", get(ok))
            .layer(axum::middleware::from_fn(debug_cors));

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/")
                    .header("origin", "http://localhost:4000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "http://localhost:4000"
        );
    }
}
