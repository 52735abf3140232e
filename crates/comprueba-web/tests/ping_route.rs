//! The ping endpoint answers with an opaque 200 body.

#[cfg(feature = "ssr")]
#[tokio::test]
async fn index_php_returns_ok_text() {
    use axum::Router;
    use axum::routing::get;
    use http::{Request, StatusCode};
    use tower::ServiceExt;

    let app = Router::new().route("/index.php", get(comprueba_web::server::ping));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/index.php")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    assert_eq!(&body[..], comprueba_web::server::PING_BODY.as_bytes());
}
