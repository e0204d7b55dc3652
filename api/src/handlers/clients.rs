// Handlers for client-related API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::db::repositories::client_repository::ClientWithPlatform;
use crate::entity::{clients, invoices, transactions};
use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::{ApiResponse, ClientPayload};
use crate::services::client_service;

/// Handler for GET /api/clientes
pub async fn get_clients(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<ClientWithPlatform>>>> {
    let clients = client_service::list_clients(&state).await?;
    Ok(Json(ApiResponse::list(clients)))
}

/// Handler for GET /api/clientes/{id}
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<ClientWithPlatform>>> {
    let client = client_service::get_client(&state, &id).await?;
    Ok(Json(ApiResponse::data(client)))
}

/// Handler for POST /api/clientes
pub async fn create_client(
    State(state): State<AppState>,
    Json(payload): Json<ClientPayload>,
) -> ApiResult<(StatusCode, Json<ApiResponse<clients::Model>>)> {
    let created = client_service::create_client(&state, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            created,
            "Client created successfully",
        )),
    ))
}

/// Handler for PUT /api/clientes/{id}
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ClientPayload>,
) -> ApiResult<Json<ApiResponse<clients::Model>>> {
    let updated = client_service::update_client(&state, &id, payload).await?;
    Ok(Json(ApiResponse::with_message(
        updated,
        "Client updated successfully",
    )))
}

/// Handler for DELETE /api/clientes/{id}
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<()>>> {
    client_service::delete_client(&state, &id).await?;
    Ok(Json(ApiResponse::message("Client deleted successfully")))
}

/// Handler for GET /api/clientes/{id}/invoices
pub async fn get_client_invoices(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Vec<invoices::Model>>>> {
    let rows = client_service::client_invoices(&state, &id).await?;
    Ok(Json(ApiResponse::list(rows)))
}

/// Handler for GET /api/clientes/{id}/transactions
pub async fn get_client_transactions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Vec<transactions::Model>>>> {
    let rows = client_service::client_transactions(&state, &id).await?;
    Ok(Json(ApiResponse::list(rows)))
}
