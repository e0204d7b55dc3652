// Handlers for dashboard statistics, chart series and search endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::{ApiResponse, SearchQuery};
use crate::services::dashboard_service::{self, ChartData, DashboardStats, SearchResults};

/// Handler for GET /api/dashboard/stats
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<DashboardStats>>> {
    let stats = dashboard_service::get_stats(&state).await?;
    Ok(Json(ApiResponse::data(stats)))
}

/// Handler for GET /api/dashboard/charts
pub async fn get_dashboard_charts(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<ChartData>>> {
    let charts = dashboard_service::get_charts(&state).await?;
    Ok(Json(ApiResponse::data(charts)))
}

/// Handler for GET /api/dashboard/search?q=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<Json<ApiResponse<SearchResults>>> {
    let results = dashboard_service::search(&state, params.q.as_deref()).await?;
    Ok(Json(ApiResponse::data(results)))
}
