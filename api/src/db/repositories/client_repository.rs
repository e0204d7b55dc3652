// Repository for client table operations

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbBackend, EntityTrait, FromQueryResult,
    PaginatorTrait, QueryFilter, QueryOrder, Statement, TransactionTrait,
};
use serde::Serialize;

use crate::db::repositories::GuardedDelete;
use crate::db::DbError;
use crate::entity::{clients, invoices, transactions};

/// Client row enriched with its platform name via left join.
/// `platform_name` is null for clients without a platform.
#[derive(Debug, FromQueryResult, Serialize)]
pub struct ClientWithPlatform {
    pub id: String,
    pub nombre: String,
    pub direccion: Option<String>,
    pub correo: Option<String>,
    pub numero_identificacion: Option<String>,
    pub telefono: Option<String>,
    pub id_platform: Option<String>,
    pub platform_name: Option<String>,
}

const CLIENT_WITH_PLATFORM: &str = r#"
    SELECT c.id, c.nombre, c.direccion, c.correo, c.numero_identificacion,
           c.telefono, c.id_platform, p.platform_name
    FROM clientes c
    LEFT JOIN platform p ON c.id_platform = p.id
"#;

pub struct ClientRepository {
    conn: DatabaseConnection,
}

impl ClientRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        ClientRepository { conn }
    }

    /// All clients with their platform name, ordered by name
    pub async fn find_all(&self) -> Result<Vec<ClientWithPlatform>, DbError> {
        let stmt = Statement::from_string(
            DbBackend::Postgres,
            format!("{CLIENT_WITH_PLATFORM} ORDER BY c.nombre"),
        );
        ClientWithPlatform::find_by_statement(stmt)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// One client with its platform name
    pub async fn find_by_id_with_platform(
        &self,
        id: &str,
    ) -> Result<Option<ClientWithPlatform>, DbError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            &format!("{CLIENT_WITH_PLATFORM} WHERE c.id = $1"),
            [id.into()],
        );
        ClientWithPlatform::find_by_statement(stmt)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<clients::Model>, DbError> {
        clients::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn insert(&self, model: clients::ActiveModel) -> Result<clients::Model, DbError> {
        model.insert(&self.conn).await.map_err(Into::into)
    }

    pub async fn update(&self, model: clients::ActiveModel) -> Result<clients::Model, DbError> {
        model.update(&self.conn).await.map_err(Into::into)
    }

    /// Deletes a client unless invoices or transactions still reference it.
    /// The existence checks and the delete run in one transaction so a row
    /// created between them cannot be orphaned.
    pub async fn delete_guarded(&self, id: &str) -> Result<GuardedDelete, DbError> {
        let txn = self.conn.begin().await?;

        let invoice_count = invoices::Entity::find()
            .filter(invoices::Column::IdClient.eq(id))
            .count(&txn)
            .await?;
        if invoice_count > 0 {
            txn.rollback().await?;
            return Ok(GuardedDelete::Blocked);
        }

        let transaction_count = transactions::Entity::find()
            .filter(transactions::Column::IdClient.eq(id))
            .count(&txn)
            .await?;
        if transaction_count > 0 {
            txn.rollback().await?;
            return Ok(GuardedDelete::Blocked);
        }

        let result = clients::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(if result.rows_affected == 0 {
            GuardedDelete::Missing
        } else {
            GuardedDelete::Deleted
        })
    }

    /// Invoices belonging to one client, newest billing period first
    pub async fn invoices_for_client(&self, id: &str) -> Result<Vec<invoices::Model>, DbError> {
        invoices::Entity::find()
            .filter(invoices::Column::IdClient.eq(id))
            .order_by_desc(invoices::Column::BillingPeriod)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Transactions belonging to one client, newest first
    pub async fn transactions_for_client(
        &self,
        id: &str,
    ) -> Result<Vec<transactions::Model>, DbError> {
        transactions::Entity::find()
            .filter(transactions::Column::IdClient.eq(id))
            .order_by_desc(transactions::Column::DateTimeTransaction)
            .all(&self.conn)
            .await
            .map_err(Into::into)
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
    async fn delete_is_blocked_while_invoices_exist() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(2)]])
            .into_connection();
        let repo = ClientRepository::new(conn);

        let outcome = repo.delete_guarded("client-1").await.unwrap();
        assert_eq!(outcome, GuardedDelete::Blocked);
    }

    #[tokio::test]
    async fn delete_is_blocked_while_transactions_exist() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(0)], vec![count_row(3)]])
            .into_connection();
        let repo = ClientRepository::new(conn);

        let outcome = repo.delete_guarded("client-1").await.unwrap();
        assert_eq!(outcome, GuardedDelete::Blocked);
    }

    #[tokio::test]
    async fn delete_succeeds_without_dependents() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(0)], vec![count_row(0)]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let repo = ClientRepository::new(conn);

        let outcome = repo.delete_guarded("client-1").await.unwrap();
        assert_eq!(outcome, GuardedDelete::Deleted);
    }

    #[tokio::test]
    async fn delete_reports_missing_rows() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(0)], vec![count_row(0)]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = ClientRepository::new(conn);

        let outcome = repo.delete_guarded("no-such-client").await.unwrap();
        assert_eq!(outcome, GuardedDelete::Missing);
    }
}
