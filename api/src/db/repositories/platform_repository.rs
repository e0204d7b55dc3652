// Repository for platform table operations

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbBackend, EntityTrait, FromQueryResult,
    PaginatorTrait, QueryFilter, QueryOrder, Statement, TransactionTrait,
};
use serde::Serialize;

use crate::db::repositories::client_repository::ClientWithPlatform;
use crate::db::repositories::GuardedDelete;
use crate::db::DbError;
use crate::entity::{clients, platforms};

/// Aggregated figures for a single platform. Invoice and transaction
/// aggregates are computed in independent scalar subqueries, so a client
/// holding both invoices and transactions cannot inflate any sum.
#[derive(Debug, FromQueryResult, Serialize)]
pub struct PlatformStats {
    pub platform_name: String,
    pub total_clientes: i64,
    pub total_facturas: i64,
    pub total_transacciones: i64,
    pub total_facturado: Decimal,
    pub total_pagado: Decimal,
    pub total_transaccionado: Decimal,
    pub promedio_factura: Decimal,
    pub promedio_transaccion: Decimal,
}

pub struct PlatformRepository {
    conn: DatabaseConnection,
}

impl PlatformRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        PlatformRepository { conn }
    }

    /// All platforms ordered by name
    pub async fn find_all(&self) -> Result<Vec<platforms::Model>, DbError> {
        platforms::Entity::find()
            .order_by_asc(platforms::Column::PlatformName)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<platforms::Model>, DbError> {
        platforms::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Clients registered on one platform, ordered by name
    pub async fn clients_for_platform(
        &self,
        id: &str,
    ) -> Result<Vec<ClientWithPlatform>, DbError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"
            SELECT c.id, c.nombre, c.direccion, c.correo, c.numero_identificacion,
                   c.telefono, c.id_platform, p.platform_name
            FROM clientes c
            LEFT JOIN platform p ON c.id_platform = p.id
            WHERE c.id_platform = $1
            ORDER BY c.nombre
            "#,
            [id.into()],
        );
        ClientWithPlatform::find_by_statement(stmt)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Aggregated statistics for one platform; None when the platform
    /// does not exist
    pub async fn stats(&self, id: &str) -> Result<Option<PlatformStats>, DbError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"
            SELECT
                p.platform_name,
                (SELECT COUNT(*) FROM clientes c
                    WHERE c.id_platform = p.id) AS total_clientes,
                (SELECT COUNT(*) FROM invoices i
                    JOIN clientes c ON i.id_client = c.id
                    WHERE c.id_platform = p.id) AS total_facturas,
                (SELECT COUNT(*) FROM transactions t
                    JOIN clientes c ON t.id_client = c.id
                    WHERE c.id_platform = p.id) AS total_transacciones,
                COALESCE((SELECT SUM(i.invoiced_amount) FROM invoices i
                    JOIN clientes c ON i.id_client = c.id
                    WHERE c.id_platform = p.id), 0) AS total_facturado,
                COALESCE((SELECT SUM(i.amount_paid) FROM invoices i
                    JOIN clientes c ON i.id_client = c.id
                    WHERE c.id_platform = p.id), 0) AS total_pagado,
                COALESCE((SELECT SUM(t.amount_transaction) FROM transactions t
                    JOIN clientes c ON t.id_client = c.id
                    WHERE c.id_platform = p.id), 0) AS total_transaccionado,
                COALESCE((SELECT AVG(i.invoiced_amount) FROM invoices i
                    JOIN clientes c ON i.id_client = c.id
                    WHERE c.id_platform = p.id), 0) AS promedio_factura,
                COALESCE((SELECT AVG(t.amount_transaction) FROM transactions t
                    JOIN clientes c ON t.id_client = c.id
                    WHERE c.id_platform = p.id), 0) AS promedio_transaccion
            FROM platform p
            WHERE p.id = $1
            "#,
            [id.into()],
        );
        PlatformStats::find_by_statement(stmt)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn insert(&self, model: platforms::ActiveModel) -> Result<platforms::Model, DbError> {
        model.insert(&self.conn).await.map_err(Into::into)
    }

    pub async fn update(&self, model: platforms::ActiveModel) -> Result<platforms::Model, DbError> {
        model.update(&self.conn).await.map_err(Into::into)
    }

    /// Deletes a platform unless clients still reference it. Guard check
    /// and delete share one transaction.
    pub async fn delete_guarded(&self, id: &str) -> Result<GuardedDelete, DbError> {
        let txn = self.conn.begin().await?;

        let client_count = clients::Entity::find()
            .filter(clients::Column::IdPlatform.eq(id))
            .count(&txn)
            .await?;
        if client_count > 0 {
            txn.rollback().await?;
            return Ok(GuardedDelete::Blocked);
        }

        let result = platforms::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(if result.rows_affected == 0 {
            GuardedDelete::Missing
        } else {
            GuardedDelete::Deleted
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
    use std::collections::BTreeMap;

    fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
    }

    #[tokio::test]
    async fn delete_is_blocked_while_clients_exist() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(1)]])
            .into_connection();
        let repo = PlatformRepository::new(conn);

        let outcome = repo.delete_guarded("platform-1").await.unwrap();
        assert_eq!(outcome, GuardedDelete::Blocked);
    }

    #[tokio::test]
    async fn delete_succeeds_without_clients() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(0)]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let repo = PlatformRepository::new(conn);

        let outcome = repo.delete_guarded("platform-1").await.unwrap();
        assert_eq!(outcome, GuardedDelete::Deleted);
    }
}
