// Handlers for invoice-related API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::db::repositories::invoice_repository::{InvoiceStats, InvoiceWithClient};
use crate::entity::invoices;
use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::{ApiResponse, InvoicePayload};
use crate::services::invoice_service;

/// Handler for GET /api/invoices
pub async fn get_invoices(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<InvoiceWithClient>>>> {
    let rows = invoice_service::list_invoices(&state).await?;
    Ok(Json(ApiResponse::list(rows)))
}

/// Handler for GET /api/invoices/{invoiceNumber}
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(invoice_number): Path<String>,
) -> ApiResult<Json<ApiResponse<InvoiceWithClient>>> {
    let invoice = invoice_service::get_invoice(&state, &invoice_number).await?;
    Ok(Json(ApiResponse::data(invoice)))
}

/// Handler for POST /api/invoices
pub async fn create_invoice(
    State(state): State<AppState>,
    Json(payload): Json<InvoicePayload>,
) -> ApiResult<(StatusCode, Json<ApiResponse<invoices::Model>>)> {
    let created = invoice_service::create_invoice(&state, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            created,
            "Invoice created successfully",
        )),
    ))
}

/// Handler for PUT /api/invoices/{invoiceNumber}
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(invoice_number): Path<String>,
    Json(payload): Json<InvoicePayload>,
) -> ApiResult<Json<ApiResponse<invoices::Model>>> {
    let updated = invoice_service::update_invoice(&state, &invoice_number, payload).await?;
    Ok(Json(ApiResponse::with_message(
        updated,
        "Invoice updated successfully",
    )))
}

/// Handler for DELETE /api/invoices/{invoiceNumber}
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(invoice_number): Path<String>,
) -> ApiResult<Json<ApiResponse<()>>> {
    invoice_service::delete_invoice(&state, &invoice_number).await?;
    Ok(Json(ApiResponse::message("Invoice deleted successfully")))
}

/// Handler for GET /api/invoices/stats/summary
pub async fn get_invoice_stats(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<InvoiceStats>>> {
    let stats = invoice_service::stats_summary(&state).await?;
    Ok(Json(ApiResponse::data(stats)))
}

/// Handler for GET /api/invoices/by-period/{period}
pub async fn get_invoices_by_period(
    State(state): State<AppState>,
    Path(period): Path<String>,
) -> ApiResult<Json<ApiResponse<Vec<InvoiceWithClient>>>> {
    let rows = invoice_service::invoices_by_period(&state, &period).await?;
    Ok(Json(ApiResponse::list(rows)))
}
