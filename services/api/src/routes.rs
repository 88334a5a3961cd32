use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use rice_backlog::backlog::{
    assemble_response, fallback_notes, provider_payload, rank_items, validate_output,
    validate_request, RationaleProvider, ScoreRequest, ScoreResponse,
};
use rice_backlog::error::AppError;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, warn};

pub(crate) fn with_score_routes<P>(provider: Arc<P>) -> axum::Router
where
    P: RationaleProvider + Send + Sync + 'static,
{
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/backlog/score",
            axum::routing::post(score_endpoint::<P>),
        )
        .with_state(provider)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn score_endpoint<P>(
    axum::extract::State(provider): axum::extract::State<Arc<P>>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError>
where
    P: RationaleProvider + Send + Sync + 'static,
{
    validate_request(&request)?;
    let ScoreRequest {
        timeframe,
        effort_unit,
        items,
    } = request;

    let ranked = rank_items(items, timeframe);

    // The provider is best-effort: an outage degrades rationale text, never
    // the deterministic scoring.
    let payload = provider_payload(&ranked);
    let notes = match provider.annotate(timeframe, effort_unit, &payload) {
        Ok(notes) => notes,
        Err(err) => {
            warn!(%err, "rationale provider failed, using deterministic fallback");
            fallback_notes(&ranked)
        }
    };

    let response = assemble_response(timeframe, effort_unit, ranked, &notes);

    if let Err(err) = validate_output(&response) {
        error!(%err, "assembled response violated output invariants");
        return Err(AppError::Output(err));
    }

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{FailingRationaleProvider, TemplateRationaleProvider};
    use axum::body::Body;
    use axum::http::Request;
    use rice_backlog::backlog::{
        BacklogItem, EffortUnit, ItemInputs, ReachEstimate, ReachUnit, Timeframe,
    };
    use tower::ServiceExt;

    fn sample_request(items: Vec<BacklogItem>) -> ScoreRequest {
        ScoreRequest {
            timeframe: Timeframe::Month,
            effort_unit: EffortUnit::Days,
            items,
        }
    }

    fn sample_item(item_id: &str) -> BacklogItem {
        BacklogItem {
            item_id: item_id.to_string(),
            title: format!("Item {item_id}"),
            description: String::new(),
            evidence: "survey data".to_string(),
            inputs: ItemInputs {
                reach: ReachEstimate {
                    value: 500.0,
                    unit: ReachUnit::Users,
                    timeframe: Timeframe::Month,
                },
                impact: 3.0,
                confidence: 80.0,
                effort: 8.0,
            },
        }
    }

    #[tokio::test]
    async fn score_endpoint_returns_a_full_response() {
        let provider = Arc::new(TemplateRationaleProvider);
        let request = sample_request(vec![sample_item("a"), sample_item("b")]);

        let Json(body) = score_endpoint(axum::extract::State(provider), Json(request))
            .await
            .expect("scores");

        assert_eq!(body.items.len(), 2);
        assert_eq!(body.items[0].ranked.computed.rank, 1);
        assert!(!body.items[0].ranked.rationale.why_this_rank.is_empty());
        assert_eq!(body.exports.csv_rows.len(), 2);
    }

    #[tokio::test]
    async fn provider_outage_degrades_to_deterministic_notes() {
        let provider = Arc::new(FailingRationaleProvider);
        let request = sample_request(vec![sample_item("a")]);

        let Json(body) = score_endpoint(axum::extract::State(provider), Json(request))
            .await
            .expect("still scores");

        assert_eq!(
            body.meta.confidence_note,
            "AI rationale unavailable. Using deterministic scoring only."
        );
        assert_eq!(body.items[0].ranked.computed.rice_score, 150.0);
    }

    #[tokio::test]
    async fn oversized_backlog_is_rejected_with_violations() {
        let items: Vec<_> = (0..11).map(|index| sample_item(&format!("i{index}"))).collect();
        let payload = serde_json::to_string(&sample_request(items)).expect("serializes");

        let app = with_score_routes(Arc::new(TemplateRationaleProvider));
        let response = app
            .oneshot(
                Request::post("/api/v1/backlog/score")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert!(body["violations"].is_array());
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }
}
