use std::sync::Arc;

use tracing::{info, instrument};

use super::dto::{CustomerCreateDto, CustomerDto, CustomerUpdateDto};
use super::mapper;
use super::repository::CustomerRepository;
use crate::errors::ServiceError;

/// Customer business service
pub struct CustomerService<R: CustomerRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CustomerRepository + ?Sized> CustomerService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, dto), fields(email = %dto.email))]
    pub async fn create(&self, dto: CustomerCreateDto) -> Result<CustomerDto, ServiceError> {
        let created = self.repo.insert(mapper::to_new_customer(dto)).await?;
        info!(customer_id = created.id, "customer_created");
        Ok(mapper::to_dto(created))
    }

    pub async fn list(&self) -> Result<Vec<CustomerDto>, ServiceError> {
        let rows = self.repo.list_active().await?;
        Ok(rows.into_iter().map(mapper::to_dto).collect())
    }

    pub async fn get(&self, id: i64) -> Result<CustomerDto, ServiceError> {
        self.repo
            .find_active(id)
            .await?
            .map(mapper::to_dto)
            .ok_or_else(|| ServiceError::not_found("customer", id))
    }

    #[instrument(skip(self, dto))]
    pub async fn update(&self, id: i64, dto: CustomerUpdateDto) -> Result<CustomerDto, ServiceError> {
        let mut customer = self
            .repo
            .find_active(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("customer", id))?;
        customer.apply(mapper::to_patch(dto));
        let saved = self.repo.save(customer).await?;
        info!(customer_id = saved.id, "customer_updated");
        Ok(mapper::to_dto(saved))
    }

    /// Soft delete; a missing id is not an error.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if self.repo.soft_delete(id).await? {
            info!(customer_id = id, "customer_deleted");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::repository::mock::MockCustomerRepository;

    fn svc() -> CustomerService<MockCustomerRepository> {
        CustomerService::new(Arc::new(MockCustomerRepository::default()))
    }

    fn create_dto(email: &str) -> CustomerCreateDto {
        CustomerCreateDto { email: email.into(), full_name: "Alan Turing".into(), phone: Some("+441234567".into()) }
    }

    #[tokio::test]
    async fn create_get_list() {
        let svc = svc();
        let a = svc.create(create_dto("alan@bletchley.uk")).await.unwrap();
        let b = svc.create(create_dto("joan@bletchley.uk")).await.unwrap();
        assert_eq!(svc.get(a.id).await.unwrap(), a);
        let ids: Vec<i64> = svc.list().await.unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }

    #[tokio::test]
    async fn missing_customer_message() {
        let err = svc().get(42).await.unwrap_err();
        assert_eq!(err.to_string(), "Can't find customer with id 42");
    }

    #[tokio::test]
    async fn update_keeps_email_and_absent_fields() {
        let svc = svc();
        let a = svc.create(create_dto("alan@bletchley.uk")).await.unwrap();
        let updated = svc
            .update(a.id, CustomerUpdateDto { full_name: Some("A. M. Turing".into()), phone: None })
            .await
            .unwrap();
        assert_eq!(updated.full_name, "A. M. Turing");
        assert_eq!(updated.phone, a.phone);
        assert_eq!(updated.email, a.email);
    }

    #[tokio::test]
    async fn delete_hides_and_is_idempotent() {
        let svc = svc();
        let a = svc.create(create_dto("alan@bletchley.uk")).await.unwrap();
        svc.delete(a.id).await.unwrap();
        svc.delete(a.id).await.unwrap();
        svc.delete(999).await.unwrap();
        assert!(svc.list().await.unwrap().is_empty());
        assert!(matches!(svc.get(a.id).await.unwrap_err(), ServiceError::NotFound(_)));
        let err = svc.update(a.id, CustomerUpdateDto::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let svc = svc();
        svc.create(create_dto("alan@bletchley.uk")).await.unwrap();
        let err = svc.create(create_dto("alan@bletchley.uk")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn deleted_email_can_be_reused() {
        let svc = svc();
        let a = svc.create(create_dto("alan@bletchley.uk")).await.unwrap();
        svc.delete(a.id).await.unwrap();
        let b = svc.create(create_dto("alan@bletchley.uk")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(svc.list().await.unwrap(), vec![b]);
    }
}
