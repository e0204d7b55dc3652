use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A payment movement for a client. `status_transaction` holds one of
/// `Completed`, `Pending` or `Failed`; `type_transaction` is a free-text
/// category ("Invoice Payment" ties a transaction to invoice settlement).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id_transaction: String,
    pub id_client: String,
    pub date_time_transaction: chrono::DateTime<chrono::Utc>,
    pub amount_transaction: Decimal,
    pub status_transaction: String,
    pub type_transaction: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
