use anyhow::Result;
use axum::{Router, response::Html, routing::get};
use tower_http::cors::{Any, CorsLayer};

use crate::{api, config::GreenRouteConfig};

const FORM_PAGE: &str = include_str!("web/form.html");

pub async fn run(config: GreenRouteConfig, port: u16) -> Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(form_page))
        .nest("/api", api::router(config))
        .layer(cors);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Web form available at http://localhost:{}", port);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn form_page() -> Html<&'static str> {
    Html(FORM_PAGE)
}
