//! HTTP API for the web-form driver
//!
//! Exposes the same pipeline as the CLI behind a single `POST /plan`
//! endpoint. A per-request API key may override the configured credential,
//! for deployments where the key is supplied through the form instead of a
//! config file.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::post,
};
use serde::{Deserialize, Serialize};

use crate::advisor::CompletionError;
use crate::config::GreenRouteConfig;
use crate::error::GreenRouteError;
use crate::geocoding::GeocodeError;
use crate::pipeline::TripPlanner;

#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub start: String,
    pub destination: String,
    /// Optional override for the configured Groq API key
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub advisory: String,
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn router(config: GreenRouteConfig) -> Router {
    Router::new()
        .route("/plan", post(plan))
        .with_state(Arc::new(config))
}

async fn plan(
    State(config): State<Arc<GreenRouteConfig>>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, (StatusCode, Json<ErrorResponse>)> {
    let start = request.start.trim();
    let destination = request.destination.trim();
    if start.is_empty() {
        return Err(error_response(&GreenRouteError::validation(
            "starting city must not be empty",
        )));
    }
    if destination.is_empty() {
        return Err(error_response(&GreenRouteError::validation(
            "destination must not be empty",
        )));
    }

    let mut config = (*config).clone();
    if let Some(key) = request.api_key.filter(|key| !key.trim().is_empty()) {
        config.groq.api_key = Some(key);
    }

    let planner = TripPlanner::from_config(&config).map_err(|err| error_response(&err))?;
    let trip_plan = planner
        .plan(start, destination)
        .await
        .map_err(|err| error_response(&err))?;

    Ok(Json(PlanResponse {
        advisory: trip_plan.advisory,
        prompt: trip_plan.prompt,
    }))
}

fn error_response(err: &GreenRouteError) -> (StatusCode, Json<ErrorResponse>) {
    (
        status_for(err),
        Json(ErrorResponse {
            error: err.user_message(),
        }),
    )
}

fn status_for(err: &GreenRouteError) -> StatusCode {
    match err {
        GreenRouteError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        GreenRouteError::Geocoding(GeocodeError::NoMatch { .. }) => StatusCode::NOT_FOUND,
        GreenRouteError::Completion(CompletionError::MissingApiKey)
        | GreenRouteError::Config { .. } => StatusCode::UNAUTHORIZED,
        GreenRouteError::Geocoding(_)
        | GreenRouteError::Weather(_)
        | GreenRouteError::Completion(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
