//! Person database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{PersonRecord, PersonRole};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "people")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain record.
///
/// The schema constrains `role`, so a failure here means the table was
/// written around the application.
impl TryFrom<Model> for PersonRecord {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let role = PersonRole::try_from(model.role.as_str()).map_err(|_| {
            AppError::internal(format!(
                "Stored role '{}' for person {} is not recognised",
                model.role, model.id
            ))
        })?;

        Ok(PersonRecord {
            id: model.id,
            username: model.username,
            password_hash: model.password_hash,
            role,
        })
    }
}
