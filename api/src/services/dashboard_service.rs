// Dashboard service — aggregation bundles and free-text search

use serde::Serialize;

use crate::db::repositories::dashboard_repository::{
    ClientSearchRow, ClientsByPlatformRow, DashboardInvoiceStats, DashboardTransactionStats,
    GeneralStats, InvoiceSearchRow, InvoicesByPeriodRow, PlatformBreakdownRow, RecentInvoiceRow,
    RecentTransactionRow, TopClientRow, TransactionSearchRow, TransactionsByMonthRow,
    TransactionsByStatusRow,
};
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;

const TOP_CLIENTS_LIMIT: u64 = 5;
const RECENT_ITEMS_LIMIT: u64 = 10;
const CHART_PERIODS_LIMIT: u64 = 12;
const MIN_SEARCH_CHARS: usize = 2;

/// Full statistics bundle for GET /api/dashboard/stats. Sub-statistics are
/// fetched one after another; there is no cross-statistic snapshot.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub general: GeneralStats,
    pub invoices: DashboardInvoiceStats,
    pub transactions: DashboardTransactionStats,
    pub platforms: Vec<PlatformBreakdownRow>,
    #[serde(rename = "topClients")]
    pub top_clients: Vec<TopClientRow>,
    #[serde(rename = "recentInvoices")]
    pub recent_invoices: Vec<RecentInvoiceRow>,
    #[serde(rename = "recentTransactions")]
    pub recent_transactions: Vec<RecentTransactionRow>,
}

/// Series bundle for GET /api/dashboard/charts
#[derive(Debug, Serialize)]
pub struct ChartData {
    #[serde(rename = "invoicesByPeriod")]
    pub invoices_by_period: Vec<InvoicesByPeriodRow>,
    #[serde(rename = "transactionsByStatus")]
    pub transactions_by_status: Vec<TransactionsByStatusRow>,
    #[serde(rename = "clientsByPlatform")]
    pub clients_by_platform: Vec<ClientsByPlatformRow>,
    #[serde(rename = "transactionsByMonth")]
    pub transactions_by_month: Vec<TransactionsByMonthRow>,
}

/// Search hits, one independent list per entity class
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub clientes: Vec<ClientSearchRow>,
    pub facturas: Vec<InvoiceSearchRow>,
    pub transacciones: Vec<TransactionSearchRow>,
}

pub async fn get_stats(state: &AppState) -> ApiResult<DashboardStats> {
    let general = state.dashboard.general_stats().await?;
    let invoices = state.dashboard.invoice_stats().await?;
    let transactions = state.dashboard.transaction_stats().await?;
    let platforms = state.dashboard.platform_breakdown().await?;
    let top_clients = state.dashboard.top_clients(TOP_CLIENTS_LIMIT).await?;
    let recent_invoices = state.dashboard.recent_invoices(RECENT_ITEMS_LIMIT).await?;
    let recent_transactions = state
        .dashboard
        .recent_transactions(RECENT_ITEMS_LIMIT)
        .await?;

    Ok(DashboardStats {
        general,
        invoices,
        transactions,
        platforms,
        top_clients,
        recent_invoices,
        recent_transactions,
    })
}

pub async fn get_charts(state: &AppState) -> ApiResult<ChartData> {
    let invoices_by_period = state
        .dashboard
        .invoices_by_period(CHART_PERIODS_LIMIT)
        .await?;
    let transactions_by_status = state.dashboard.transactions_by_status().await?;
    let clients_by_platform = state.dashboard.clients_by_platform().await?;
    let transactions_by_month = state.dashboard.transactions_by_month().await?;

    Ok(ChartData {
        invoices_by_period,
        transactions_by_status,
        clients_by_platform,
        transactions_by_month,
    })
}

/// Validates the raw search input and turns it into an ILIKE pattern.
/// Terms shorter than two characters after trimming are rejected before
/// any query is issued.
pub fn build_search_pattern(raw: Option<&str>) -> ApiResult<String> {
    let trimmed = raw.unwrap_or("").trim();
    if trimmed.chars().count() < MIN_SEARCH_CHARS {
        return Err(ApiError::Validation(
            "Search term must be at least 2 characters long".to_string(),
        ));
    }
    Ok(format!("%{}%", trimmed))
}

pub async fn search(state: &AppState, raw: Option<&str>) -> ApiResult<SearchResults> {
    let pattern = build_search_pattern(raw)?;

    let clientes = state.dashboard.search_clients(&pattern).await?;
    let facturas = state.dashboard.search_invoices(&pattern).await?;
    let transacciones = state.dashboard.search_transactions(&pattern).await?;

    Ok(SearchResults {
        clientes,
        facturas,
        transacciones,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_terms_are_rejected() {
        assert!(build_search_pattern(None).is_err());
        assert!(build_search_pattern(Some("")).is_err());
        assert!(build_search_pattern(Some("a")).is_err());
        assert!(build_search_pattern(Some("  a  ")).is_err());
    }

    #[test]
    fn two_characters_after_trimming_are_enough() {
        assert_eq!(build_search_pattern(Some("ab")).unwrap(), "%ab%");
        assert_eq!(build_search_pattern(Some("  ab  ")).unwrap(), "%ab%");
        // Character count, not byte count
        assert_eq!(build_search_pattern(Some("ñu")).unwrap(), "%ñu%");
    }

    #[test]
    fn rejection_is_a_validation_error() {
        match build_search_pattern(Some("x")) {
            Err(ApiError::Validation(msg)) => {
                assert!(msg.contains("at least 2 characters"))
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }
}
