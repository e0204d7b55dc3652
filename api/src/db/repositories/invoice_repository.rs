// Repository for invoice table operations

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbBackend, EntityTrait, FromQueryResult, Statement,
};
use serde::Serialize;

use crate::db::DbError;
use crate::entity::invoices;

/// Invoice row enriched with the owning client's contact fields.
/// Client fields are null when the referenced client is gone.
#[derive(Debug, FromQueryResult, Serialize)]
pub struct InvoiceWithClient {
    pub invoice_number: String,
    pub id_client: String,
    pub billing_period: String,
    pub invoiced_amount: Decimal,
    pub amount_paid: Decimal,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub cliente_nombre: Option<String>,
    pub cliente_email: Option<String>,
    pub cliente_telefono: Option<String>,
}

/// Totals over the whole invoices table; sums and averages coalesce to
/// zero on an empty table.
#[derive(Debug, FromQueryResult, Serialize)]
pub struct InvoiceStats {
    pub total_facturas: i64,
    pub total_facturado: Decimal,
    pub total_pagado: Decimal,
    pub promedio_factura: Decimal,
    pub facturas_pendientes: i64,
    pub facturas_pagadas: i64,
}

const INVOICE_WITH_CLIENT: &str = r#"
    SELECT i.invoice_number, i.id_client, i.billing_period, i.invoiced_amount,
           i.amount_paid, i.created_at,
           c.nombre AS cliente_nombre, c.correo AS cliente_email,
           c.telefono AS cliente_telefono
    FROM invoices i
    LEFT JOIN clientes c ON i.id_client = c.id
"#;

pub struct InvoiceRepository {
    conn: DatabaseConnection,
}

impl InvoiceRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        InvoiceRepository { conn }
    }

    /// All invoices with client contact data, newest billing period first
    pub async fn find_all(&self) -> Result<Vec<InvoiceWithClient>, DbError> {
        let stmt = Statement::from_string(
            DbBackend::Postgres,
            format!("{INVOICE_WITH_CLIENT} ORDER BY i.billing_period DESC, i.invoice_number"),
        );
        InvoiceWithClient::find_by_statement(stmt)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_number_with_client(
        &self,
        invoice_number: &str,
    ) -> Result<Option<InvoiceWithClient>, DbError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            &format!("{INVOICE_WITH_CLIENT} WHERE i.invoice_number = $1"),
            [invoice_number.into()],
        );
        InvoiceWithClient::find_by_statement(stmt)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_number(
        &self,
        invoice_number: &str,
    ) -> Result<Option<invoices::Model>, DbError> {
        invoices::Entity::find_by_id(invoice_number)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Invoices of one billing period, ordered by invoice number
    pub async fn find_by_period(&self, period: &str) -> Result<Vec<InvoiceWithClient>, DbError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            &format!("{INVOICE_WITH_CLIENT} WHERE i.billing_period = $1 ORDER BY i.invoice_number"),
            [period.into()],
        );
        InvoiceWithClient::find_by_statement(stmt)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn stats_summary(&self) -> Result<InvoiceStats, DbError> {
        let stmt = Statement::from_string(
            DbBackend::Postgres,
            r#"
            SELECT
                COUNT(*) AS total_facturas,
                COALESCE(SUM(invoiced_amount), 0) AS total_facturado,
                COALESCE(SUM(amount_paid), 0) AS total_pagado,
                COALESCE(AVG(invoiced_amount), 0) AS promedio_factura,
                COUNT(CASE WHEN amount_paid = 0 THEN 1 END) AS facturas_pendientes,
                COUNT(CASE WHEN amount_paid >= invoiced_amount THEN 1 END) AS facturas_pagadas
            FROM invoices
            "#
            .to_owned(),
        );
        InvoiceStats::find_by_statement(stmt)
            .one(&self.conn)
            .await?
            .ok_or_else(|| DbError::QueryError("invoice summary returned no row".to_string()))
    }

    pub async fn insert(&self, model: invoices::ActiveModel) -> Result<invoices::Model, DbError> {
        model.insert(&self.conn).await.map_err(Into::into)
    }

    pub async fn update(&self, model: invoices::ActiveModel) -> Result<invoices::Model, DbError> {
        model.update(&self.conn).await.map_err(Into::into)
    }

    /// Plain delete; returns false when no row matched
    pub async fn delete(&self, invoice_number: &str) -> Result<bool, DbError> {
        let result = invoices::Entity::delete_by_id(invoice_number)
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn stats_row_maps_onto_struct() {
        // Client with invoices of 100 and 200, paid 100 and 50: the paid-up
        // one counts as paid, the partial one as neither paid nor pending.
        let row = BTreeMap::from([
            ("total_facturas", Value::BigInt(Some(2))),
            ("total_facturado", Value::from(Decimal::new(300, 0))),
            ("total_pagado", Value::from(Decimal::new(150, 0))),
            ("promedio_factura", Value::from(Decimal::new(150, 0))),
            ("facturas_pendientes", Value::BigInt(Some(0))),
            ("facturas_pagadas", Value::BigInt(Some(1))),
        ]);
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row]])
            .into_connection();
        let repo = InvoiceRepository::new(conn);

        let stats = repo.stats_summary().await.unwrap();
        assert_eq!(stats.total_facturas, 2);
        assert_eq!(stats.total_facturado, Decimal::new(300, 0));
        assert_eq!(stats.total_pagado, Decimal::new(150, 0));
        assert_eq!(stats.facturas_pagadas, 1);
    }
}
