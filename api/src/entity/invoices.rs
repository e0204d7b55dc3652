use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// An invoice issued to a client. `amount_paid` is not constrained to stay
/// below `invoiced_amount`; overpayment yields a negative pending balance.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub invoice_number: String,
    pub id_client: String,
    pub billing_period: String,
    pub invoiced_amount: Decimal,
    pub amount_paid: Decimal,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
