//! `record` table: the single collection of incubating items.

use sea_orm::{entity::prelude::*, sea_query::Expr, ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "record")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub stage: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a record. The id is generated here and never taken from the caller.
pub async fn create(db: &DatabaseConnection, name: &str, stage: &str) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        stage: Set(stage.to_string()),
    };
    Ok(am.insert(db).await?)
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().all(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Overwrite only the given columns. Returns the number of rows matched,
/// which is zero for an unknown id.
pub async fn update_fields(
    db: &DatabaseConnection,
    id: Uuid,
    name: Option<&str>,
    stage: Option<&str>,
) -> Result<u64, ModelError> {
    if name.is_none() && stage.is_none() {
        return Err(ModelError::Validation("no fields to update".into()));
    }
    let mut q = Entity::update_many().filter(Column::Id.eq(id));
    if let Some(name) = name {
        q = q.col_expr(Column::Name, Expr::value(name.to_string()));
    }
    if let Some(stage) = stage {
        q = q.col_expr(Column::Stage, Expr::value(stage.to_string()));
    }
    let res = q.exec(db).await?;
    Ok(res.rows_affected)
}

/// Returns the number of rows removed; zero is not an error.
pub async fn delete_by_id(db: &DatabaseConnection, id: Uuid) -> Result<u64, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_serializes_id_as_string() {
        let id = Uuid::new_v4();
        let m = Model { id, name: "Agumon".into(), stage: "Baby".into() };
        let v = serde_json::to_value(&m).expect("serialize");
        assert_eq!(v["id"], id.to_string());
        assert_eq!(v["name"], "Agumon");
        assert_eq!(v["stage"], "Baby");
    }
}
