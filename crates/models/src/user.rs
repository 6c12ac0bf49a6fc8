use sea_orm::{entity::prelude::*, sea_query::Expr, ActiveValue::{NotSet, Set, Unchanged}, DatabaseConnection, QueryOrder};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Date,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub is_deleted: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Column values of a row about to be inserted.
#[derive(Clone, Debug)]
pub struct NewRow {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Date,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

/// Every standard read starts here: soft-deleted rows never leave the table.
pub fn active() -> Select<Entity> {
    Entity::find().filter(Column::IsDeleted.eq(false))
}

pub async fn create(db: &DatabaseConnection, row: NewRow) -> Result<Model, errors::ModelError> {
    if row.email.trim().is_empty() { return Err(errors::ModelError::Validation("email required".into())); }
    let now = Utc::now().into();
    let am = ActiveModel {
        id: NotSet,
        email: Set(row.email),
        first_name: Set(row.first_name),
        last_name: Set(row.last_name),
        birth_date: Set(row.birth_date),
        address: Set(row.address),
        phone_number: Set(row.phone_number),
        is_deleted: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

pub async fn find_active(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, errors::ModelError> {
    Ok(active().filter(Column::Id.eq(id)).one(db).await?)
}

pub async fn list_active(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Ok(active().order_by_asc(Column::Id).all(db).await?)
}

/// Users whose birth date lies in `[from, to]`, both ends inclusive.
pub async fn list_active_born_between(db: &DatabaseConnection, from: Date, to: Date) -> Result<Vec<Model>, errors::ModelError> {
    Ok(active()
        .filter(Column::BirthDate.between(from, to))
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

/// Write back every mutable column of `model`; id, flag and creation time stay as stored.
/// `None` when no live row has that id.
pub async fn update(db: &DatabaseConnection, model: Model) -> Result<Option<Model>, errors::ModelError> {
    let am = ActiveModel {
        id: Unchanged(model.id),
        email: Set(model.email),
        first_name: Set(model.first_name),
        last_name: Set(model.last_name),
        birth_date: Set(model.birth_date),
        address: Set(model.address),
        phone_number: Set(model.phone_number),
        is_deleted: NotSet,
        created_at: NotSet,
        updated_at: Set(Utc::now().into()),
    };
    // the live-row filter turns a concurrent soft delete into "nothing updated"
    match Entity::update(am).filter(Column::IsDeleted.eq(false)).exec(db).await {
        Ok(updated) => Ok(Some(updated)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Flip `is_deleted` on a live row. Returns whether a row changed.
pub async fn soft_delete(db: &DatabaseConnection, id: i64) -> Result<bool, errors::ModelError> {
    let res = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(DateTimeWithTimeZone::from(Utc::now())))
        .filter(Column::Id.eq(id))
        .filter(Column::IsDeleted.eq(false))
        .exec(db)
        .await?;
    Ok(res.rows_affected > 0)
}
