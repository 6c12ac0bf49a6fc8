use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::user::domain::{NewUser, User};
use crate::user::mapper::{from_model, to_row};
use crate::user::repository::UserRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User, ServiceError> {
        let created = models::user::create(&self.db, to_row(user)).await?;
        Ok(from_model(created))
    }

    async fn find_active(&self, id: i64) -> Result<Option<User>, ServiceError> {
        Ok(models::user::find_active(&self.db, id).await?.map(from_model))
    }

    async fn list_active(&self) -> Result<Vec<User>, ServiceError> {
        let rows = models::user::list_active(&self.db).await?;
        Ok(rows.into_iter().map(from_model).collect())
    }

    async fn list_active_born_between(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<User>, ServiceError> {
        let rows = models::user::list_active_born_between(&self.db, from, to).await?;
        Ok(rows.into_iter().map(from_model).collect())
    }

    async fn save(&self, user: User) -> Result<User, ServiceError> {
        let user_id = user.id;
        let current = models::user::find_active(&self.db, user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("user", user_id))?;
        let updated = models::user::update(
            &self.db,
            models::user::Model {
                email: user.email,
                first_name: user.first_name,
                last_name: user.last_name,
                birth_date: user.birth_date,
                address: user.address,
                phone_number: user.phone_number,
                ..current
            },
        )
        .await?
        .ok_or_else(|| ServiceError::not_found("user", user_id))?;
        Ok(from_model(updated))
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(models::user::soft_delete(&self.db, id).await?)
    }
}
