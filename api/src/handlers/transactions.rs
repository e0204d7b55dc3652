// Handlers for transaction-related API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::db::repositories::transaction_repository::{TransactionStats, TransactionWithClient};
use crate::entity::transactions;
use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::{ApiResponse, TransactionPayload};
use crate::services::transaction_service;

/// Handler for GET /api/transactions
pub async fn get_transactions(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<TransactionWithClient>>>> {
    let rows = transaction_service::list_transactions(&state).await?;
    Ok(Json(ApiResponse::list(rows)))
}

/// Handler for GET /api/transactions/{id}
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<TransactionWithClient>>> {
    let transaction = transaction_service::get_transaction(&state, &id).await?;
    Ok(Json(ApiResponse::data(transaction)))
}

/// Handler for POST /api/transactions
pub async fn create_transaction(
    State(state): State<AppState>,
    Json(payload): Json<TransactionPayload>,
) -> ApiResult<(StatusCode, Json<ApiResponse<transactions::Model>>)> {
    let created = transaction_service::create_transaction(&state, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            created,
            "Transaction created successfully",
        )),
    ))
}

/// Handler for PUT /api/transactions/{id}
pub async fn update_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<TransactionPayload>,
) -> ApiResult<Json<ApiResponse<transactions::Model>>> {
    let updated = transaction_service::update_transaction(&state, &id, payload).await?;
    Ok(Json(ApiResponse::with_message(
        updated,
        "Transaction updated successfully",
    )))
}

/// Handler for DELETE /api/transactions/{id}
pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<()>>> {
    transaction_service::delete_transaction(&state, &id).await?;
    Ok(Json(ApiResponse::message("Transaction deleted successfully")))
}

/// Handler for GET /api/transactions/stats/summary
pub async fn get_transaction_stats(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<TransactionStats>>> {
    let stats = transaction_service::stats_summary(&state).await?;
    Ok(Json(ApiResponse::data(stats)))
}

/// Handler for GET /api/transactions/by-status/{status}
pub async fn get_transactions_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> ApiResult<Json<ApiResponse<Vec<TransactionWithClient>>>> {
    let rows = transaction_service::transactions_by_status(&state, &status).await?;
    Ok(Json(ApiResponse::list(rows)))
}

/// Handler for GET /api/transactions/by-type/{type}
pub async fn get_transactions_by_type(
    State(state): State<AppState>,
    Path(type_transaction): Path<String>,
) -> ApiResult<Json<ApiResponse<Vec<TransactionWithClient>>>> {
    let rows = transaction_service::transactions_by_type(&state, &type_transaction).await?;
    Ok(Json(ApiResponse::list(rows)))
}
