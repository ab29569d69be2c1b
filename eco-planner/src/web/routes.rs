//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::batch::{BatchOptions, RouteCandidate, process_routes};
use crate::carbon::{ComparisonData, factor_table};
use crate::domain::DomainError;
use crate::scoring::RankBy;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/emission-factors", get(emission_factors))
        .route("/api/routes/score", post(score_routes))
        .route("/api/routes/compare", post(compare_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List the emission factor table.
async fn emission_factors() -> Json<EmissionFactorsResponse> {
    let factors = factor_table().iter().map(FactorResult::from).collect();
    Json(EmissionFactorsResponse { factors })
}

/// Score, rank and compare a batch of candidate routes.
async fn score_routes(
    State(state): State<AppState>,
    Json(req): Json<ScoreRoutesRequest>,
) -> Result<Json<ScoreRoutesResponse>, AppError> {
    let limit = state.config.max_batch_routes;
    if req.routes.len() > limit {
        return Err(AppError::PayloadTooLarge {
            message: format!(
                "batch of {} routes exceeds the limit of {limit}",
                req.routes.len()
            ),
        });
    }

    let rank_by = req
        .rank_by
        .as_deref()
        .map(str::parse::<RankBy>)
        .transpose()
        .map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?
        .unwrap_or_default();

    let options = BatchOptions {
        rank_by,
        prune_dominated: req.prune_dominated,
        max_results: req.max_results,
    };

    let candidates: Vec<RouteCandidate> = req.routes.into_iter().map(Into::into).collect();
    let outcome = process_routes(&candidates, &state.config.scoring, &options);

    Ok(Json(ScoreRoutesResponse {
        routes: outcome.routes.iter().map(RouteResult::from_route).collect(),
        comparison: outcome.comparison.as_ref().map(ComparisonResult::from),
        rejected: outcome.rejected.iter().map(RejectedResult::from).collect(),
    }))
}

/// Score a single route and compare it with driving.
async fn compare_route(
    State(state): State<AppState>,
    Json(req): Json<RouteCandidateDto>,
) -> Result<Json<CompareRouteResponse>, AppError> {
    let route = RouteCandidate::from(req).score(&state.config.scoring)?;
    let comparison = ComparisonData::for_route(&route);

    Ok(Json(CompareRouteResponse {
        route: RouteResult::from_route(&route),
        comparison: ComparisonResult::from(&comparison),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    PayloadTooLarge { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::PayloadTooLarge { message } => (StatusCode::PAYLOAD_TOO_LARGE, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use serde_json::{Value, json};

    fn state() -> AppState {
        AppState::new(ServerConfig::default())
    }

    fn score_request(body: Value) -> Json<ScoreRoutesRequest> {
        Json(serde_json::from_value(body).unwrap())
    }

    fn to_json<T: serde::Serialize>(value: &T) -> Value {
        serde_json::to_value(value).unwrap()
    }

    #[tokio::test]
    async fn health_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn lists_factors() {
        let Json(resp) = emission_factors().await;

        assert!(
            resp.factors
                .iter()
                .any(|f| f.mode == "car" && f.variant == "base" && f.kg_co2e_per_km == 0.21)
        );
        assert!(resp.factors.iter().any(|f| f.variant == "domestic"));
    }

    #[tokio::test]
    async fn scores_and_ranks_batch() {
        let req = score_request(json!({
            "routes": [
                { "id": "drive", "transportModes": [{ "mode": "car", "distance": 100, "duration": 70 }] },
                { "id": "rail", "transportModes": [{ "mode": "train", "distance": 100, "duration": 60, "carbonEmission": 50 }] },
                { "id": "broken", "transportModes": [{ "mode": "rocket", "distance": 100, "duration": 5 }] }
            ]
        }));

        let Json(resp) = score_routes(State(state()), req).await.unwrap();
        let value = to_json(&resp);

        assert_eq!(value["routes"][0]["id"], "rail");
        assert_eq!(value["routes"][1]["id"], "drive");
        assert_eq!(value["comparison"]["savingsPercentage"], 80);
        assert_eq!(value["rejected"][0]["index"], 2);
        assert_eq!(value["rejected"][0]["error"], "unknown transport mode: \"rocket\"");
    }

    #[tokio::test]
    async fn empty_batch_is_not_an_error() {
        let Json(resp) = score_routes(State(state()), score_request(json!({ "routes": [] })))
            .await
            .unwrap();

        assert!(resp.routes.is_empty());
        assert!(resp.comparison.is_none());
        assert!(resp.rejected.is_empty());
    }

    #[tokio::test]
    async fn rank_by_option() {
        let req = score_request(json!({
            "rankBy": "duration",
            "routes": [
                { "id": "rail", "transportModes": [{ "mode": "train", "distance": 100, "duration": 60 }] },
                { "id": "fly", "transportModes": [{ "mode": "plane", "distance": 100, "duration": 40 }] }
            ]
        }));

        let Json(resp) = score_routes(State(state()), req).await.unwrap();

        assert_eq!(resp.routes[0].id.as_deref(), Some("fly"));
    }

    #[tokio::test]
    async fn unknown_rank_by_rejected() {
        let req = score_request(json!({ "rankBy": "vibes", "routes": [] }));

        let err = score_routes(State(state()), req).await.unwrap_err();

        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn oversized_batch_rejected() {
        let config = ServerConfig {
            max_batch_routes: 1,
            ..Default::default()
        };
        let route = json!({ "transportModes": [{ "mode": "bus", "distance": 5, "duration": 10 }] });
        let req = score_request(json!({ "routes": [route.clone(), route] }));

        let err = score_routes(State(AppState::new(config)), req)
            .await
            .unwrap_err();

        assert_eq!(err.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn compare_single_route() {
        let req: RouteCandidateDto = serde_json::from_value(json!({
            "transportModes": [{ "mode": "car", "distance": 100, "duration": 80 }]
        }))
        .unwrap();

        let Json(resp) = compare_route(State(state()), Json(req)).await.unwrap();

        assert_eq!(resp.comparison.savings_percentage, 0);
        assert_eq!(resp.comparison.savings, "No difference in emissions");
        assert_eq!(resp.route.sustainability_score, 5);
    }

    #[tokio::test]
    async fn compare_empty_route_is_bad_request() {
        let req: RouteCandidateDto =
            serde_json::from_value(json!({ "transportModes": [] })).unwrap();

        let err = compare_route(State(state()), Json(req)).await.unwrap_err();

        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
