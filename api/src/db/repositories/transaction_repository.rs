// Repository for transaction table operations

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbBackend, EntityTrait, FromQueryResult, Statement,
};
use serde::Serialize;

use crate::db::DbError;
use crate::entity::transactions;

/// Transaction row enriched with the owning client's contact fields
#[derive(Debug, FromQueryResult, Serialize)]
pub struct TransactionWithClient {
    pub id_transaction: String,
    pub id_client: String,
    pub date_time_transaction: chrono::DateTime<chrono::Utc>,
    pub amount_transaction: Decimal,
    pub status_transaction: String,
    pub type_transaction: String,
    pub cliente_nombre: Option<String>,
    pub cliente_email: Option<String>,
    pub cliente_telefono: Option<String>,
}

/// Totals over the whole transactions table, partitioned by status
#[derive(Debug, FromQueryResult, Serialize)]
pub struct TransactionStats {
    pub total_transacciones: i64,
    pub total_monto: Decimal,
    pub promedio_monto: Decimal,
    pub transacciones_completadas: i64,
    pub transacciones_pendientes: i64,
    pub transacciones_fallidas: i64,
    pub monto_completado: Decimal,
    pub monto_pendiente: Decimal,
}

const TRANSACTION_WITH_CLIENT: &str = r#"
    SELECT t.id_transaction, t.id_client, t.date_time_transaction,
           t.amount_transaction, t.status_transaction, t.type_transaction,
           c.nombre AS cliente_nombre, c.correo AS cliente_email,
           c.telefono AS cliente_telefono
    FROM transactions t
    LEFT JOIN clientes c ON t.id_client = c.id
"#;

pub struct TransactionRepository {
    conn: DatabaseConnection,
}

impl TransactionRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        TransactionRepository { conn }
    }

    /// All transactions with client contact data, newest first
    pub async fn find_all(&self) -> Result<Vec<TransactionWithClient>, DbError> {
        let stmt = Statement::from_string(
            DbBackend::Postgres,
            format!("{TRANSACTION_WITH_CLIENT} ORDER BY t.date_time_transaction DESC"),
        );
        TransactionWithClient::find_by_statement(stmt)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_id_with_client(
        &self,
        id: &str,
    ) -> Result<Option<TransactionWithClient>, DbError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            &format!("{TRANSACTION_WITH_CLIENT} WHERE t.id_transaction = $1"),
            [id.into()],
        );
        TransactionWithClient::find_by_statement(stmt)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<transactions::Model>, DbError> {
        transactions::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Transactions in one status, newest first
    pub async fn find_by_status(
        &self,
        status: &str,
    ) -> Result<Vec<TransactionWithClient>, DbError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            &format!(
                "{TRANSACTION_WITH_CLIENT} WHERE t.status_transaction = $1 \
                 ORDER BY t.date_time_transaction DESC"
            ),
            [status.into()],
        );
        TransactionWithClient::find_by_statement(stmt)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Transactions of one free-text category, newest first
    pub async fn find_by_type(
        &self,
        type_transaction: &str,
    ) -> Result<Vec<TransactionWithClient>, DbError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            &format!(
                "{TRANSACTION_WITH_CLIENT} WHERE t.type_transaction = $1 \
                 ORDER BY t.date_time_transaction DESC"
            ),
            [type_transaction.into()],
        );
        TransactionWithClient::find_by_statement(stmt)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn stats_summary(&self) -> Result<TransactionStats, DbError> {
        let stmt = Statement::from_string(
            DbBackend::Postgres,
            r#"
            SELECT
                COUNT(*) AS total_transacciones,
                COALESCE(SUM(amount_transaction), 0) AS total_monto,
                COALESCE(AVG(amount_transaction), 0) AS promedio_monto,
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
        TransactionStats::find_by_statement(stmt)
            .one(&self.conn)
            .await?
            .ok_or_else(|| DbError::QueryError("transaction summary returned no row".to_string()))
    }

    pub async fn insert(
        &self,
        model: transactions::ActiveModel,
    ) -> Result<transactions::Model, DbError> {
        model.insert(&self.conn).await.map_err(Into::into)
    }

    pub async fn update(
        &self,
        model: transactions::ActiveModel,
    ) -> Result<transactions::Model, DbError> {
        model.update(&self.conn).await.map_err(Into::into)
    }

    /// Plain delete; returns false when no row matched
    pub async fn delete(&self, id: &str) -> Result<bool, DbError> {
        let result = transactions::Entity::delete_by_id(id).exec(&self.conn).await?;
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
        // One Completed transaction of 500 plus one Pending of 300
        let row = BTreeMap::from([
            ("total_transacciones", Value::BigInt(Some(2))),
            ("total_monto", Value::from(Decimal::new(800, 0))),
            ("promedio_monto", Value::from(Decimal::new(400, 0))),
            ("transacciones_completadas", Value::BigInt(Some(1))),
            ("transacciones_pendientes", Value::BigInt(Some(1))),
            ("transacciones_fallidas", Value::BigInt(Some(0))),
            ("monto_completado", Value::from(Decimal::new(500, 0))),
            ("monto_pendiente", Value::from(Decimal::new(300, 0))),
        ]);
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row]])
            .into_connection();
        let repo = TransactionRepository::new(conn);

        let stats = repo.stats_summary().await.unwrap();
        assert_eq!(stats.total_monto, Decimal::new(800, 0));
        assert_eq!(stats.transacciones_completadas, 1);
        assert_eq!(stats.monto_completado, Decimal::new(500, 0));
        assert_eq!(stats.transacciones_pendientes, 1);
        assert_eq!(stats.monto_pendiente, Decimal::new(300, 0));
    }
}
