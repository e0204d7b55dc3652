// Handlers for platform-related API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::db::repositories::client_repository::ClientWithPlatform;
use crate::db::repositories::platform_repository::PlatformStats;
use crate::entity::platforms;
use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::{ApiResponse, PlatformPayload};
use crate::services::platform_service;

/// Handler for GET /api/platform
pub async fn get_platforms(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<platforms::Model>>>> {
    let rows = platform_service::list_platforms(&state).await?;
    Ok(Json(ApiResponse::list(rows)))
}

/// Handler for GET /api/platform/{id}
pub async fn get_platform(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<platforms::Model>>> {
    let platform = platform_service::get_platform(&state, &id).await?;
    Ok(Json(ApiResponse::data(platform)))
}

/// Handler for GET /api/platform/{id}/clientes
pub async fn get_platform_clients(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Vec<ClientWithPlatform>>>> {
    let rows = platform_service::platform_clients(&state, &id).await?;
    Ok(Json(ApiResponse::list(rows)))
}

/// Handler for GET /api/platform/{id}/stats
pub async fn get_platform_stats(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<PlatformStats>>> {
    let stats = platform_service::platform_stats(&state, &id).await?;
    Ok(Json(ApiResponse::data(stats)))
}

/// Handler for POST /api/platform
pub async fn create_platform(
    State(state): State<AppState>,
    Json(payload): Json<PlatformPayload>,
) -> ApiResult<(StatusCode, Json<ApiResponse<platforms::Model>>)> {
    let created = platform_service::create_platform(&state, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            created,
            "Platform created successfully",
        )),
    ))
}

/// Handler for PUT /api/platform/{id}
pub async fn update_platform(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<PlatformPayload>,
) -> ApiResult<Json<ApiResponse<platforms::Model>>> {
    let updated = platform_service::update_platform(&state, &id, payload).await?;
    Ok(Json(ApiResponse::with_message(
        updated,
        "Platform updated successfully",
    )))
}

/// Handler for DELETE /api/platform/{id}
pub async fn delete_platform(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<()>>> {
    platform_service::delete_platform(&state, &id).await?;
    Ok(Json(ApiResponse::message("Platform deleted successfully")))
}
