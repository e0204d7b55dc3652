// Handlers for the cross-entity analytical query endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::db::repositories::queries_repository::{
    ClientBalanceRow, PendingInvoiceRow, PlatformTransactionRow,
};
use crate::entity::platforms;
use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::ApiResponse;
use crate::services::queries_service;

/// Handler for GET /api/queries/total-paid-by-client
pub async fn get_total_paid_by_client(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<ClientBalanceRow>>>> {
    let rows = queries_service::total_paid_by_client(&state).await?;
    Ok(Json(ApiResponse::with_message(
        rows,
        "Total paid by each client retrieved successfully",
    )))
}

/// Handler for GET /api/queries/pending-invoices
pub async fn get_pending_invoices(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<PendingInvoiceRow>>>> {
    let rows = queries_service::pending_invoices(&state).await?;
    Ok(Json(ApiResponse::with_message(
        rows,
        "Pending invoices with client and transaction information retrieved successfully",
    )))
}

/// Handler for GET /api/queries/transactions-by-platform/{platformId}
pub async fn get_transactions_by_platform(
    State(state): State<AppState>,
    Path(platform_id): Path<String>,
) -> ApiResult<Json<ApiResponse<Vec<PlatformTransactionRow>>>> {
    let rows = queries_service::transactions_by_platform(&state, &platform_id).await?;
    Ok(Json(ApiResponse::with_message(
        rows,
        format!(
            "Transactions for platform {} retrieved successfully",
            platform_id
        ),
    )))
}

/// Handler for GET /api/queries/platforms
pub async fn get_platforms_list(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<platforms::Model>>>> {
    let rows = queries_service::platforms_list(&state).await?;
    Ok(Json(ApiResponse::with_message(
        rows,
        "Platforms retrieved successfully",
    )))
}
