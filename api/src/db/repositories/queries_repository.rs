// Repository for the cross-entity analytical queries

use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, DbBackend, FromQueryResult, Statement};
use serde::Serialize;

use crate::db::DbError;

/// Per-client paid/invoiced/pending summary
#[derive(Debug, FromQueryResult, Serialize)]
pub struct ClientBalanceRow {
    pub id: String,
    pub client_name: String,
    pub client_email: Option<String>,
    pub platform_name: Option<String>,
    pub total_paid: Decimal,
    pub total_invoiced: Decimal,
    pub pending_balance: Decimal,
}

/// Outstanding invoice with client contact data and candidate payment
/// transactions. Transaction fields are null when the client has no
/// "Invoice Payment" transactions.
#[derive(Debug, FromQueryResult, Serialize)]
pub struct PendingInvoiceRow {
    pub invoice_number: String,
    pub billing_period: String,
    pub invoiced_amount: Decimal,
    pub amount_paid: Decimal,
    pub pending_amount: Decimal,
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub platform_name: Option<String>,
    pub id_transaction: Option<String>,
    pub amount_transaction: Option<Decimal>,
    pub status_transaction: Option<String>,
    pub date_time_transaction: Option<chrono::DateTime<chrono::Utc>>,
}

/// Transaction scoped to a platform, with the owning client's invoices
/// joined alongside
#[derive(Debug, FromQueryResult, Serialize)]
pub struct PlatformTransactionRow {
    pub id_transaction: String,
    pub amount_transaction: Decimal,
    pub status_transaction: String,
    pub type_transaction: String,
    pub date_time_transaction: chrono::DateTime<chrono::Utc>,
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub invoice_number: Option<String>,
    pub invoiced_amount: Option<Decimal>,
    pub amount_paid: Option<Decimal>,
    pub platform_name: String,
}

pub struct QueriesRepository {
    conn: DatabaseConnection,
}

impl QueriesRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        QueriesRepository { conn }
    }

    /// Paid/invoiced/pending totals per client, highest paid first.
    /// Clients without invoices report zeros, not nulls.
    pub async fn total_paid_by_client(&self) -> Result<Vec<ClientBalanceRow>, DbError> {
        let stmt = Statement::from_string(
            DbBackend::Postgres,
            r#"
            SELECT
                c.id,
                c.nombre AS client_name,
                c.correo AS client_email,
                p.platform_name,
                COALESCE(SUM(i.amount_paid), 0) AS total_paid,
                COALESCE(SUM(i.invoiced_amount), 0) AS total_invoiced,
                COALESCE(SUM(i.invoiced_amount) - SUM(i.amount_paid), 0) AS pending_balance
            FROM clientes c
            LEFT JOIN platform p ON c.id_platform = p.id
            LEFT JOIN invoices i ON i.id_client = c.id
            GROUP BY c.id, c.nombre, c.correo, p.platform_name
            ORDER BY total_paid DESC, c.id ASC
            "#
            .to_owned(),
        );
        ClientBalanceRow::find_by_statement(stmt)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Invoices with amount_paid below invoiced_amount, joined to the
    /// client's "Invoice Payment" transactions. A client with several such
    /// transactions repeats the invoice row once per transaction; the
    /// fan-out is intentional and kept as-is.
    pub async fn pending_invoices(&self) -> Result<Vec<PendingInvoiceRow>, DbError> {
        let stmt = Statement::from_string(
            DbBackend::Postgres,
            r#"
            SELECT
                i.invoice_number,
                i.billing_period,
                i.invoiced_amount,
                i.amount_paid,
                (i.invoiced_amount - i.amount_paid) AS pending_amount,
                c.nombre AS client_name,
                c.correo AS client_email,
                c.telefono AS client_phone,
                p.platform_name,
                t.id_transaction,
                t.amount_transaction,
                t.status_transaction,
                t.date_time_transaction
            FROM invoices i
            LEFT JOIN clientes c ON i.id_client = c.id
            LEFT JOIN platform p ON c.id_platform = p.id
            LEFT JOIN transactions t ON t.id_client = i.id_client
                AND t.type_transaction = 'Invoice Payment'
            WHERE i.amount_paid < i.invoiced_amount
            ORDER BY (i.invoiced_amount - i.amount_paid) DESC
            "#
            .to_owned(),
        );
        PendingInvoiceRow::find_by_statement(stmt)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Transactions of clients on one platform, with the client's invoices
    /// joined alongside (one row per transaction-invoice pair)
    pub async fn transactions_by_platform(
        &self,
        platform_id: &str,
    ) -> Result<Vec<PlatformTransactionRow>, DbError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"
            SELECT
                t.id_transaction,
                t.amount_transaction,
                t.status_transaction,
                t.type_transaction,
                t.date_time_transaction,
                c.nombre AS client_name,
                c.correo AS client_email,
                i.invoice_number,
                i.invoiced_amount,
                i.amount_paid,
                p.platform_name
            FROM transactions t
            LEFT JOIN clientes c ON t.id_client = c.id
            LEFT JOIN platform p ON c.id_platform = p.id
            LEFT JOIN invoices i ON i.id_client = t.id_client
            WHERE p.id = $1
            ORDER BY t.date_time_transaction DESC
            "#,
            [platform_id.into()],
        );
        PlatformTransactionRow::find_by_statement(stmt)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }
}
