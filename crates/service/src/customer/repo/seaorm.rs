use sea_orm::DatabaseConnection;

use crate::customer::domain::{Customer, NewCustomer};
use crate::customer::mapper::from_model;
use crate::customer::repository::CustomerRepository;
use crate::errors::ServiceError;

pub struct SeaOrmCustomerRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn insert(&self, c: NewCustomer) -> Result<Customer, ServiceError> {
        let created = models::customer::create(&self.db, &c.email, &c.full_name, c.phone.as_deref()).await?;
        Ok(from_model(created))
    }

    async fn find_active(&self, id: i64) -> Result<Option<Customer>, ServiceError> {
        Ok(models::customer::find_active(&self.db, id).await?.map(from_model))
    }

    async fn list_active(&self) -> Result<Vec<Customer>, ServiceError> {
        let rows = models::customer::list_active(&self.db).await?;
        Ok(rows.into_iter().map(from_model).collect())
    }

    async fn save(&self, c: Customer) -> Result<Customer, ServiceError> {
        let id = c.id;
        let current = models::customer::find_active(&self.db, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("customer", id))?;
        let updated = models::customer::update(
            &self.db,
            models::customer::Model { full_name: c.full_name, phone: c.phone, ..current },
        )
        .await?
        .ok_or_else(|| ServiceError::not_found("customer", id))?;
        Ok(from_model(updated))
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(models::customer::soft_delete(&self.db, id).await?)
    }
}
