// Repository for the dashboard aggregation queries.
//
// Everything here is read-only. Sub-statistics are computed by independent
// statements; there is no cross-statement snapshot guarantee. Every join to
// a child table is an outer join so parents with zero children keep a row,
// and every sum over a possibly-empty set is coalesced to zero.

use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, DbBackend, FromQueryResult, Statement};
use serde::Serialize;

use crate::db::DbError;

/// Row counts of the four base tables
#[derive(Debug, FromQueryResult, Serialize)]
pub struct GeneralStats {
    pub total_clientes: i64,
    pub total_facturas: i64,
    pub total_transacciones: i64,
    pub total_plataformas: i64,
}

/// Invoice totals for the dashboard header
#[derive(Debug, FromQueryResult, Serialize)]
pub struct DashboardInvoiceStats {
    pub total_facturado: Decimal,
    pub total_pagado: Decimal,
    pub promedio_factura: Decimal,
    pub facturas_pendientes: i64,
    pub facturas_pagadas: i64,
    pub total_pendiente: Decimal,
}

/// Transaction totals for the dashboard header
#[derive(Debug, FromQueryResult, Serialize)]
pub struct DashboardTransactionStats {
    pub total_transaccionado: Decimal,
    pub promedio_transaccion: Decimal,
    pub transacciones_completadas: i64,
    pub transacciones_pendientes: i64,
    pub transacciones_fallidas: i64,
    pub monto_completado: Decimal,
    pub monto_pendiente: Decimal,
}

/// Per-platform aggregate. Zero-client platforms appear with all figures
/// at zero.
#[derive(Debug, FromQueryResult, Serialize)]
pub struct PlatformBreakdownRow {
    pub platform_name: String,
    pub clientes: i64,
    pub facturas: i64,
    pub transacciones: i64,
    pub total_facturado: Decimal,
    pub total_pagado: Decimal,
    pub total_transaccionado: Decimal,
}

/// Leaderboard entry for the top clients by invoiced amount
#[derive(Debug, FromQueryResult, Serialize)]
pub struct TopClientRow {
    pub nombre: String,
    pub correo: Option<String>,
    pub platform_name: Option<String>,
    pub total_facturado: Decimal,
    pub total_pagado: Decimal,
    pub total_facturas: i64,
}

#[derive(Debug, FromQueryResult, Serialize)]
pub struct RecentInvoiceRow {
    pub invoice_number: String,
    pub billing_period: String,
    pub invoiced_amount: Decimal,
    pub amount_paid: Decimal,
    pub cliente_nombre: Option<String>,
    pub platform_name: Option<String>,
}

#[derive(Debug, FromQueryResult, Serialize)]
pub struct RecentTransactionRow {
    pub id_transaction: String,
    pub date_time_transaction: chrono::DateTime<chrono::Utc>,
    pub amount_transaction: Decimal,
    pub status_transaction: String,
    pub type_transaction: String,
    pub cliente_nombre: Option<String>,
    pub platform_name: Option<String>,
}

#[derive(Debug, FromQueryResult, Serialize)]
pub struct InvoicesByPeriodRow {
    pub billing_period: String,
    pub cantidad: i64,
    pub total_facturado: Decimal,
    pub total_pagado: Decimal,
}

#[derive(Debug, FromQueryResult, Serialize)]
pub struct TransactionsByStatusRow {
    pub status_transaction: String,
    pub cantidad: i64,
    pub total_monto: Decimal,
}

#[derive(Debug, FromQueryResult, Serialize)]
pub struct ClientsByPlatformRow {
    pub platform_name: String,
    pub cantidad: i64,
}

#[derive(Debug, FromQueryResult, Serialize)]
pub struct TransactionsByMonthRow {
    pub mes: chrono::DateTime<chrono::Utc>,
    pub cantidad: i64,
    pub total_monto: Decimal,
}

#[derive(Debug, FromQueryResult, Serialize)]
pub struct ClientSearchRow {
    pub id: String,
    pub nombre: String,
    pub correo: Option<String>,
    pub telefono: Option<String>,
    pub platform_name: Option<String>,
    pub tipo: String,
}

#[derive(Debug, FromQueryResult, Serialize)]
pub struct InvoiceSearchRow {
    pub invoice_number: String,
    pub billing_period: String,
    pub invoiced_amount: Decimal,
    pub cliente_nombre: Option<String>,
    pub tipo: String,
}

#[derive(Debug, FromQueryResult, Serialize)]
pub struct TransactionSearchRow {
    pub id_transaction: String,
    pub amount_transaction: Decimal,
    pub status_transaction: String,
    pub cliente_nombre: Option<String>,
    pub tipo: String,
}

pub struct DashboardRepository {
    conn: DatabaseConnection,
}

impl DashboardRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        DashboardRepository { conn }
    }

    pub async fn general_stats(&self) -> Result<GeneralStats, DbError> {
        let stmt = Statement::from_string(
            DbBackend::Postgres,
            r#"
            SELECT
                (SELECT COUNT(*) FROM clientes) AS total_clientes,
                (SELECT COUNT(*) FROM invoices) AS total_facturas,
                (SELECT COUNT(*) FROM transactions) AS total_transacciones,
                (SELECT COUNT(*) FROM platform) AS total_plataformas
            "#
            .to_owned(),
        );
        GeneralStats::find_by_statement(stmt)
            .one(&self.conn)
            .await?
            .ok_or_else(|| DbError::QueryError("general stats returned no row".to_string()))
    }

    pub async fn invoice_stats(&self) -> Result<DashboardInvoiceStats, DbError> {
        let stmt = Statement::from_string(
            DbBackend::Postgres,
            r#"
            SELECT
                COALESCE(SUM(invoiced_amount), 0) AS total_facturado,
                COALESCE(SUM(amount_paid), 0) AS total_pagado,
                COALESCE(AVG(invoiced_amount), 0) AS promedio_factura,
                COUNT(CASE WHEN amount_paid = 0 THEN 1 END) AS facturas_pendientes,
                COUNT(CASE WHEN amount_paid >= invoiced_amount THEN 1 END) AS facturas_pagadas,
                COALESCE(SUM(invoiced_amount) - SUM(amount_paid), 0) AS total_pendiente
            FROM invoices
            "#
            .to_owned(),
        );
        DashboardInvoiceStats::find_by_statement(stmt)
            .one(&self.conn)
            .await?
            .ok_or_else(|| DbError::QueryError("invoice stats returned no row".to_string()))
    }

    pub async fn transaction_stats(&self) -> Result<DashboardTransactionStats, DbError> {
        let stmt = Statement::from_string(
            DbBackend::Postgres,
            r#"
            SELECT
                COALESCE(SUM(amount_transaction), 0) AS total_transaccionado,
                COALESCE(AVG(amount_transaction), 0) AS promedio_transaccion,
                COUNT(CASE WHEN status_transaction = 'Completed' THEN 1 END)
                    AS transacciones_completadas,
                COUNT(CASE WHEN status_transaction = 'Pending' THEN 1 END)
                    AS transacciones_pendientes,
                COUNT(CASE WHEN status_transaction = 'Failed' THEN 1 END)
                    AS transacciones_fallidas,
                COALESCE(SUM(CASE WHEN status_transaction = 'Completed'
                    THEN amount_transaction ELSE 0 END), 0) AS monto_completado,
                COALESCE(SUM(CASE WHEN status_transaction = 'Pending'
                    THEN amount_transaction ELSE 0 END), 0) AS monto_pendiente
            FROM transactions
            "#
            .to_owned(),
        );
        DashboardTransactionStats::find_by_statement(stmt)
            .one(&self.conn)
            .await?
            .ok_or_else(|| DbError::QueryError("transaction stats returned no row".to_string()))
    }

    /// Per-platform breakdown. Invoices and transactions are pre-aggregated
    /// per client before the platform join: joining both child tables to
    /// clients directly would produce N*M rows per client and inflate the
    /// sums. Counts come out of SUM() as numeric, hence the bigint casts.
    pub async fn platform_breakdown(&self) -> Result<Vec<PlatformBreakdownRow>, DbError> {
        let stmt = Statement::from_string(
            DbBackend::Postgres,
            r#"
            SELECT
                p.platform_name,
                COUNT(c.id) AS clientes,
                COALESCE(SUM(inv.facturas), 0)::bigint AS facturas,
                COALESCE(SUM(tx.transacciones), 0)::bigint AS transacciones,
                COALESCE(SUM(inv.total_facturado), 0) AS total_facturado,
                COALESCE(SUM(inv.total_pagado), 0) AS total_pagado,
                COALESCE(SUM(tx.total_transaccionado), 0) AS total_transaccionado
            FROM platform p
            LEFT JOIN clientes c ON c.id_platform = p.id
            LEFT JOIN (
                SELECT id_client,
                       COUNT(*) AS facturas,
                       SUM(invoiced_amount) AS total_facturado,
                       SUM(amount_paid) AS total_pagado
                FROM invoices
                GROUP BY id_client
            ) inv ON inv.id_client = c.id
            LEFT JOIN (
                SELECT id_client,
                       COUNT(*) AS transacciones,
                       SUM(amount_transaction) AS total_transaccionado
                FROM transactions
                GROUP BY id_client
            ) tx ON tx.id_client = c.id
            GROUP BY p.id, p.platform_name
            ORDER BY p.platform_name
            "#
            .to_owned(),
        );
        PlatformBreakdownRow::find_by_statement(stmt)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Top clients by total invoiced amount. Ties are broken by client id
    /// so repeat calls against unchanged data return the same order.
    pub async fn top_clients(&self, limit: u64) -> Result<Vec<TopClientRow>, DbError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"
            SELECT
                c.nombre,
                c.correo,
                p.platform_name,
                COALESCE(SUM(i.invoiced_amount), 0) AS total_facturado,
                COALESCE(SUM(i.amount_paid), 0) AS total_pagado,
                COUNT(i.invoice_number) AS total_facturas
            FROM clientes c
            LEFT JOIN platform p ON c.id_platform = p.id
            LEFT JOIN invoices i ON i.id_client = c.id
            GROUP BY c.id, c.nombre, c.correo, p.platform_name
            ORDER BY total_facturado DESC, c.id ASC
            LIMIT $1
            "#,
            [(limit as i64).into()],
        );
        TopClientRow::find_by_statement(stmt)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn recent_invoices(&self, limit: u64) -> Result<Vec<RecentInvoiceRow>, DbError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"
            SELECT
                i.invoice_number,
                i.billing_period,
                i.invoiced_amount,
                i.amount_paid,
                c.nombre AS cliente_nombre,
                p.platform_name
            FROM invoices i
            LEFT JOIN clientes c ON i.id_client = c.id
            LEFT JOIN platform p ON c.id_platform = p.id
            ORDER BY i.created_at DESC
            LIMIT $1
            "#,
            [(limit as i64).into()],
        );
        RecentInvoiceRow::find_by_statement(stmt)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn recent_transactions(
        &self,
        limit: u64,
    ) -> Result<Vec<RecentTransactionRow>, DbError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"
            SELECT
                t.id_transaction,
                t.date_time_transaction,
                t.amount_transaction,
                t.status_transaction,
                t.type_transaction,
                c.nombre AS cliente_nombre,
                p.platform_name
            FROM transactions t
            LEFT JOIN clientes c ON t.id_client = c.id
            LEFT JOIN platform p ON c.id_platform = p.id
            ORDER BY t.date_time_transaction DESC
            LIMIT $1
            "#,
            [(limit as i64).into()],
        );
        RecentTransactionRow::find_by_statement(stmt)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Most recent billing periods with count and totals per bucket
    pub async fn invoices_by_period(&self, limit: u64) -> Result<Vec<InvoicesByPeriodRow>, DbError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"
            SELECT
                billing_period,
                COUNT(*) AS cantidad,
                COALESCE(SUM(invoiced_amount), 0) AS total_facturado,
                COALESCE(SUM(amount_paid), 0) AS total_pagado
            FROM invoices
            GROUP BY billing_period
            ORDER BY billing_period DESC
            LIMIT $1
            "#,
            [(limit as i64).into()],
        );
        InvoicesByPeriodRow::find_by_statement(stmt)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn transactions_by_status(&self) -> Result<Vec<TransactionsByStatusRow>, DbError> {
        let stmt = Statement::from_string(
            DbBackend::Postgres,
            r#"
            SELECT
                status_transaction,
                COUNT(*) AS cantidad,
                COALESCE(SUM(amount_transaction), 0) AS total_monto
            FROM transactions
            GROUP BY status_transaction
            "#
            .to_owned(),
        );
        TransactionsByStatusRow::find_by_statement(stmt)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Client count per platform; platforms without clients appear with
    /// a zero count
    pub async fn clients_by_platform(&self) -> Result<Vec<ClientsByPlatformRow>, DbError> {
        let stmt = Statement::from_string(
            DbBackend::Postgres,
            r#"
            SELECT
                p.platform_name,
                COUNT(c.id) AS cantidad
            FROM platform p
            LEFT JOIN clientes c ON c.id_platform = p.id
            GROUP BY p.id, p.platform_name
            "#
            .to_owned(),
        );
        ClientsByPlatformRow::find_by_statement(stmt)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Transactions bucketed by calendar month for the trailing 12 months.
    /// Months with no transactions are omitted, not zero-filled.
    pub async fn transactions_by_month(&self) -> Result<Vec<TransactionsByMonthRow>, DbError> {
        let stmt = Statement::from_string(
            DbBackend::Postgres,
            r#"
            SELECT
                DATE_TRUNC('month', date_time_transaction) AS mes,
                COUNT(*) AS cantidad,
                COALESCE(SUM(amount_transaction), 0) AS total_monto
            FROM transactions
            WHERE date_time_transaction >= NOW() - INTERVAL '12 months'
            GROUP BY DATE_TRUNC('month', date_time_transaction)
            ORDER BY mes DESC
            "#
            .to_owned(),
        );
        TransactionsByMonthRow::find_by_statement(stmt)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Clients whose name, email or identification number contains the term
    pub async fn search_clients(&self, term: &str) -> Result<Vec<ClientSearchRow>, DbError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"
            SELECT
                c.id,
                c.nombre,
                c.correo,
                c.telefono,
                p.platform_name,
                'cliente' AS tipo
            FROM clientes c
            LEFT JOIN platform p ON c.id_platform = p.id
            WHERE c.nombre ILIKE $1
               OR c.correo ILIKE $1
               OR c.numero_identificacion ILIKE $1
            LIMIT 10
            "#,
            [term.into()],
        );
        ClientSearchRow::find_by_statement(stmt)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Invoices whose number or owning client name contains the term
    pub async fn search_invoices(&self, term: &str) -> Result<Vec<InvoiceSearchRow>, DbError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"
            SELECT
                i.invoice_number,
                i.billing_period,
                i.invoiced_amount,
                c.nombre AS cliente_nombre,
                'factura' AS tipo
            FROM invoices i
            LEFT JOIN clientes c ON i.id_client = c.id
            WHERE i.invoice_number ILIKE $1 OR c.nombre ILIKE $1
            LIMIT 10
            "#,
            [term.into()],
        );
        InvoiceSearchRow::find_by_statement(stmt)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Transactions whose id or owning client name contains the term
    pub async fn search_transactions(
        &self,
        term: &str,
    ) -> Result<Vec<TransactionSearchRow>, DbError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"
            SELECT
                t.id_transaction,
                t.amount_transaction,
                t.status_transaction,
                c.nombre AS cliente_nombre,
                'transaccion' AS tipo
            FROM transactions t
            LEFT JOIN clientes c ON t.id_client = c.id
            WHERE t.id_transaction ILIKE $1 OR c.nombre ILIKE $1
            LIMIT 10
            "#,
            [term.into()],
        );
        TransactionSearchRow::find_by_statement(stmt)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }
}
