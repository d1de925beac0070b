// HTTP API - rosters, layouts and SVG charts over axum

use crate::chamber::Chamber;
use crate::error::ChartError;
use crate::layout::{layout_roster, ChartLayout, LayoutStrategy};
use crate::loader::{Roster, RosterLoader};
use crate::render::{render_notice_svg, render_svg, SvgOptions};
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::error;

/// Shared application state. A loader that failed to build keeps its
/// configuration error so every request can report it.
#[derive(Clone)]
pub struct AppState {
    loader: Arc<std::result::Result<Arc<RosterLoader>, ChartError>>,
}

impl AppState {
    pub fn new(loader: std::result::Result<RosterLoader, ChartError>) -> Self {
        AppState {
            loader: Arc::new(loader.map(Arc::new)),
        }
    }

    fn loader(&self) -> std::result::Result<Arc<RosterLoader>, ApiError> {
        match self.loader.as_ref() {
            Ok(loader) => Ok(Arc::clone(loader)),
            Err(err) => Err(ApiError::Chart(err.clone())),
        }
    }
}

/// API Response wrapper
#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    fn err(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct ChartQuery {
    pub strategy: Option<String>,
    #[serde(default)]
    pub refresh: bool,
}

#[derive(Serialize)]
struct LayoutResponse {
    roster: Roster,
    layout: ChartLayout,
}

enum ApiError {
    BadRequest(String),
    Chart(ChartError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Chart(ChartError::Configuration(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Chart(ChartError::Fetch { .. }) => StatusCode::BAD_GATEWAY,
            ApiError::Chart(ChartError::EmptyData(_)) => StatusCode::NOT_FOUND,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::Chart(err) => err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), "{}", self.message());
        }
        (status, Json(ApiResponse::<()>::err(self.message()))).into_response()
    }
}

fn parse_chamber(raw: &str) -> std::result::Result<Chamber, ApiError> {
    raw.parse::<Chamber>().map_err(ApiError::BadRequest)
}

fn parse_strategy(query: &ChartQuery, chamber: Chamber) -> std::result::Result<LayoutStrategy, ApiError> {
    match query.strategy.as_deref() {
        None => Ok(LayoutStrategy::default_for(chamber)),
        Some(name) => LayoutStrategy::named(name, chamber).ok_or_else(|| {
            ApiError::BadRequest(format!(
                "unknown strategy '{}': expected one of {}",
                name,
                LayoutStrategy::NAMES.join(", ")
            ))
        }),
    }
}

async fn load(state: &AppState, chamber: Chamber, refresh: bool) -> std::result::Result<Arc<Roster>, ApiError> {
    state
        .loader()?
        .load(chamber, refresh)
        .await
        .map_err(ApiError::Chart)
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/chambers/:chamber/members - Normalized roster
async fn get_members(
    State(state): State<AppState>,
    Path(chamber): Path<String>,
    Query(query): Query<ChartQuery>,
) -> std::result::Result<Json<ApiResponse<Roster>>, ApiError> {
    let chamber = parse_chamber(&chamber)?;
    let roster = load(&state, chamber, query.refresh).await?;
    Ok(Json(ApiResponse::ok(roster.as_ref().clone())))
}

/// GET /api/chambers/:chamber/layout?strategy= - Seat positions
async fn get_layout(
    State(state): State<AppState>,
    Path(chamber): Path<String>,
    Query(query): Query<ChartQuery>,
) -> std::result::Result<Json<ApiResponse<LayoutResponse>>, ApiError> {
    let chamber = parse_chamber(&chamber)?;
    let strategy = parse_strategy(&query, chamber)?;
    let roster = load(&state, chamber, query.refresh).await?;
    let layout = layout_roster(&roster, &strategy);

    Ok(Json(ApiResponse::ok(LayoutResponse {
        roster: roster.as_ref().clone(),
        layout,
    })))
}

/// GET /api/chambers/:chamber/chart.svg?strategy= - Rendered chart, or a notice on failure
async fn get_chart_svg(
    State(state): State<AppState>,
    Path(chamber): Path<String>,
    Query(query): Query<ChartQuery>,
) -> Response {
    let svg = |status: StatusCode, body: String| {
        (status, [(header::CONTENT_TYPE, "image/svg+xml")], body).into_response()
    };

    let chamber = match parse_chamber(&chamber) {
        Ok(c) => c,
        Err(e) => return e.into_response(),
    };
    let strategy = match parse_strategy(&query, chamber) {
        Ok(s) => s,
        Err(e) => return e.into_response(),
    };

    match load(&state, chamber, query.refresh).await {
        Ok(roster) => {
            let layout = layout_roster(&roster, &strategy);
            svg(StatusCode::OK, render_svg(&roster, &layout, &SvgOptions::default()))
        }
        Err(ApiError::Chart(err)) => {
            let status = ApiError::Chart(err.clone()).status();
            svg(status, render_notice_svg(&err))
        }
        Err(other) => other.into_response(),
    }
}

/// GET / - Both chambers side by side
async fn serve_index() -> impl IntoResponse {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Congress Seats</title>
<style>body{font-family:sans-serif;margin:2rem;background:#fff}h2{margin-top:2rem}p{color:#4b5563;font-size:.9rem}</style>
</head>
<body>
<h1>Congress Seats</h1>
<h2>Current US House of Representatives</h2>
<img src="/api/chambers/house/chart.svg" alt="House seating chart">
<h2>Current US Senate</h2>
<img src="/api/chambers/senate/chart.svg" alt="Senate seating chart">
<p>Each dot represents a member, colored by party (blue Democratic, red Republican, yellow Independent, gray other).
Open a chart on its own to see member details on hover.</p>
</body>
</html>
"#;

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/chambers/:chamber/members", get(get_members))
        .route("/chambers/:chamber/layout", get(get_layout))
        .route("/chambers/:chamber/chart.svg", get(get_chart_svg))
        .with_state(state);

    Router::new()
        .route("/", get(serve_index))
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::source::{FixtureFile, FixtureSource};
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn fixture_state() -> AppState {
        let source = FixtureSource::new(FixtureFile {
            house: vec![
                json!({"name": "Speaker Person", "partyName": "Republican", "state": "LA", "district": 4, "leadership": "Speaker"}),
                json!({"name": "Rep One", "partyName": "Democratic", "state": "NY", "district": 1}),
            ],
            senate: vec![],
            vice_president: None,
        });
        AppState::new(Ok(RosterLoader::with_source(
            Arc::new(source),
            chrono::Duration::minutes(5),
        )))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get(router(fixture_state()), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("OK"));
    }

    #[tokio::test]
    async fn test_layout_lifts_out_speaker() {
        let (status, body) = get(router(fixture_state()), "/api/chambers/house/layout?strategy=grid").await;
        assert_eq!(status, StatusCode::OK);

        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["data"]["layout"]["seats"].as_array().unwrap().len(), 1);
        assert_eq!(value["data"]["layout"]["officer"]["officer"]["role"], "Speaker");
        assert_eq!(value["data"]["layout"]["strategy"]["kind"], "grid");
    }

    #[tokio::test]
    async fn test_empty_chamber_is_not_found() {
        let (status, body) = get(router(fixture_state()), "/api/chambers/senate/members").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("No senate data available."));
    }

    #[tokio::test]
    async fn test_bad_inputs_are_bad_request() {
        let (status, _) = get(router(fixture_state()), "/api/chambers/assembly/members").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = get(router(fixture_state()), "/api/chambers/house/layout?strategy=spiral").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("spiral"));
    }

    #[tokio::test]
    async fn test_configuration_error_reported() {
        let state = AppState::new(RosterLoader::from_config(&ApiConfig::new(None)));
        let (status, body) = get(router(state), "/api/chambers/senate/chart.svg").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("Congress API key not found"));
        assert!(!body.contains("<circle"));
    }

    #[tokio::test]
    async fn test_svg_chart() {
        let (status, body) = get(router(fixture_state()), "/api/chambers/house/chart.svg").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("<svg"));
        assert!(body.contains("Speaker of the House"));
    }
}
