use sea_orm::{entity::prelude::*, sea_query::Expr, ActiveValue::{NotSet, Set, Unchanged}, DatabaseConnection, QueryOrder};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub is_deleted: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn active() -> Select<Entity> {
    Entity::find().filter(Column::IsDeleted.eq(false))
}

pub async fn create(db: &DatabaseConnection, email: &str, full_name: &str, phone: Option<&str>) -> Result<Model, errors::ModelError> {
    if email.trim().is_empty() { return Err(errors::ModelError::Validation("email required".into())); }
    if full_name.trim().is_empty() { return Err(errors::ModelError::Validation("full name required".into())); }
    let now = Utc::now().into();
    let am = ActiveModel {
        id: NotSet,
        email: Set(email.to_string()),
        full_name: Set(full_name.to_string()),
        phone: Set(phone.map(str::to_string)),
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

pub async fn update(db: &DatabaseConnection, model: Model) -> Result<Option<Model>, errors::ModelError> {
    let am = ActiveModel {
        id: Unchanged(model.id),
        email: Set(model.email),
        full_name: Set(model.full_name),
        phone: Set(model.phone),
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
