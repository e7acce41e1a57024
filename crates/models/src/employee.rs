use sea_orm::{entity::prelude::*, ActiveValue::NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub salary: Decimal,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// All rows in insertion order, as recorded by `created_at`.
///
/// Rows stamped with the same instant (Postgres keeps microseconds) come back
/// ordered by `id`, so the listing is stable but not insertion order for them.
pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find()
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Insert a fully formed row; the caller owns id and timestamp generation.
pub async fn insert<C: ConnectionTrait>(db: &C, row: Model) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: Set(row.id),
        name: Set(row.name),
        email: Set(row.email),
        phone: Set(row.phone),
        salary: Set(row.salary),
        created_at: Set(row.created_at),
    };
    Ok(am.insert(db).await?)
}

/// Overwrite the mutable columns of an existing row. `id` and `created_at` are never written.
///
/// `None` when no row has this id, including one deleted after the caller looked it up.
pub async fn replace_fields<C: ConnectionTrait>(db: &C, row: Model) -> Result<Option<Model>, errors::ModelError> {
    let am = ActiveModel {
        id: Set(row.id),
        name: Set(row.name),
        email: Set(row.email),
        phone: Set(row.phone),
        salary: Set(row.salary),
        created_at: NotSet,
    };
    match am.update(db).await {
        Ok(updated) => Ok(Some(updated)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Returns true when a row was removed.
pub async fn delete<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64, errors::ModelError> {
    Ok(Entity::find().count(db).await?)
}
