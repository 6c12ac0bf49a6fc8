use async_trait::async_trait;

use super::domain::{Customer, NewCustomer};
use crate::errors::ServiceError;

/// Store interface for customers. Reads skip soft-deleted rows.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn insert(&self, customer: NewCustomer) -> Result<Customer, ServiceError>;
    async fn find_active(&self, id: i64) -> Result<Option<Customer>, ServiceError>;
    async fn list_active(&self) -> Result<Vec<Customer>, ServiceError>;
    async fn save(&self, customer: Customer) -> Result<Customer, ServiceError>;
    async fn soft_delete(&self, id: i64) -> Result<bool, ServiceError>;
}

pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockCustomerRepository {
        rows: Mutex<Vec<(Customer, bool)>>,
    }

    #[async_trait]
    impl CustomerRepository for MockCustomerRepository {
        async fn insert(&self, customer: NewCustomer) -> Result<Customer, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|(c, deleted)| !deleted && c.email == customer.email) {
                return Err(ServiceError::Conflict(format!("email {} already taken", customer.email)));
            }
            let created = Customer {
                id: rows.len() as i64 + 1,
                email: customer.email,
                full_name: customer.full_name,
                phone: customer.phone,
            };
            rows.push((created.clone(), false));
            Ok(created)
        }

        async fn find_active(&self, id: i64) -> Result<Option<Customer>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().find(|(c, deleted)| !deleted && c.id == id).map(|(c, _)| c.clone()))
        }

        async fn list_active(&self) -> Result<Vec<Customer>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().filter(|(_, deleted)| !deleted).map(|(c, _)| c.clone()).collect())
        }

        async fn save(&self, customer: Customer) -> Result<Customer, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let slot = rows
                .iter_mut()
                .find(|(c, deleted)| !*deleted && c.id == customer.id)
                .ok_or_else(|| ServiceError::not_found("customer", customer.id))?;
            slot.0 = customer.clone();
            Ok(customer)
        }

        async fn soft_delete(&self, id: i64) -> Result<bool, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            Ok(match rows.iter_mut().find(|(c, deleted)| !*deleted && c.id == id) {
                Some(slot) => {
                    slot.1 = true;
                    true
                }
                None => false,
            })
        }
    }
}
