use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::context::AppContext;
use crate::workflow::run_onboarding;

pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .route("/webhook", post(webhook))
        .route("/health", get(health_check))
        .with_state(ctx)
}

#[derive(Serialize)]
struct SuccessEnvelope {
    status: &'static str,
    workflow_triggered: String,
    uac_response: Value,
}

#[derive(Serialize)]
struct ErrorEnvelope {
    error: String,
}

/// The pipeline's single failure boundary: any error from the steps below
/// becomes a 500 with a flat error message.
async fn webhook(State(ctx): State<AppContext>, Json(payload): Json<Value>) -> Response {
    match run_onboarding(&ctx, &payload).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(SuccessEnvelope {
                status: "success",
                workflow_triggered: outcome.workflow.into_string(),
                uac_response: outcome.trigger_response,
            }),
        )
            .into_response(),
        Err(err) => {
            error!("onboarding pipeline failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorEnvelope {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
