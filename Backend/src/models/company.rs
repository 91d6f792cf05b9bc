use serde::{Deserialize, Serialize};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "companies")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    // Toujours en majuscules, sans espaces (voir utils::symbol)
    #[sea_orm(primary_key, auto_increment = false)]
    pub symbol: String,
    // Nom complet, jamais rempli par les routes actuelles
    pub name: Option<String>,
    pub likes: i64,
    pub dislikes: i64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
