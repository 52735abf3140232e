//! Axum assembly for the SSR binary: the rendered page, static assets, and
//! the ping endpoint the page's click handler calls.

use axum::Router;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;

use crate::app::{App, shell};

/// Body returned by the ping endpoint. The client reads it as text and
/// discards it; only the completed round trip matters.
pub const PING_BODY: &str = "ok";

/// `GET /index.php` — the path the original site pinged. Kept for the
/// client contract; the body is opaque.
pub async fn ping() -> &'static str {
    PING_BODY
}

pub fn router(leptos_options: LeptosOptions) -> Router {
    let site_root = leptos_options.site_root.clone();
    let routes = generate_route_list(App);

    Router::new()
        .route("/index.php", get(ping))
        .leptos_routes(&leptos_options, routes, {
            let options = leptos_options.clone();
            move || shell(options.clone())
        })
        .fallback_service(ServeDir::new(&*site_root))
        .with_state(leptos_options)
}
