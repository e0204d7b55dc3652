// Cross-entity analytical query service

use crate::db::repositories::queries_repository::{
    ClientBalanceRow, PendingInvoiceRow, PlatformTransactionRow,
};
use crate::entity::platforms;
use crate::error::ApiResult;
use crate::handlers::AppState;

pub async fn total_paid_by_client(state: &AppState) -> ApiResult<Vec<ClientBalanceRow>> {
    state
        .queries
        .total_paid_by_client()
        .await
        .map_err(Into::into)
}

pub async fn pending_invoices(state: &AppState) -> ApiResult<Vec<PendingInvoiceRow>> {
    state.queries.pending_invoices().await.map_err(Into::into)
}

pub async fn transactions_by_platform(
    state: &AppState,
    platform_id: &str,
) -> ApiResult<Vec<PlatformTransactionRow>> {
    state
        .queries
        .transactions_by_platform(platform_id)
        .await
        .map_err(Into::into)
}

/// Platform id/name pairs for selection dropdowns
pub async fn platforms_list(state: &AppState) -> ApiResult<Vec<platforms::Model>> {
    state.platforms.find_all().await.map_err(Into::into)
}
