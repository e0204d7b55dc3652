use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A billable client. `id_platform` is nullable; clients without a
/// platform still participate in every aggregate via outer joins.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "clientes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub nombre: String,
    pub direccion: Option<String>,
    pub correo: Option<String>,
    pub numero_identificacion: Option<String>,
    pub telefono: Option<String>,
    pub id_platform: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
