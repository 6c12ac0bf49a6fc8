use async_trait::async_trait;
use chrono::NaiveDate;

use super::domain::{NewUser, User};
use crate::errors::ServiceError;

/// Store interface for users. Every read excludes soft-deleted rows.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: NewUser) -> Result<User, ServiceError>;
    async fn find_active(&self, id: i64) -> Result<Option<User>, ServiceError>;
    async fn list_active(&self) -> Result<Vec<User>, ServiceError>;
    /// Live users born within `[from, to]`.
    async fn list_active_born_between(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<User>, ServiceError>;
    async fn save(&self, user: User) -> Result<User, ServiceError>;
    /// Returns `false` when nothing was live under `id`.
    async fn soft_delete(&self, id: i64) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct Row {
        user: User,
        deleted: bool,
    }

    /// Email is unique among live rows only, like the SQL schema.
    #[derive(Default)]
    pub struct MockUserRepository {
        rows: Mutex<Vec<Row>>, // insertion order; id = index + 1
        range_queries: AtomicUsize,
    }

    impl MockUserRepository {
        /// Number of birth date range queries served so far.
        pub fn range_queries(&self) -> usize {
            self.range_queries.load(Ordering::SeqCst)
        }

        /// Total stored rows, deleted ones included.
        pub fn stored(&self) -> usize {
            self.rows.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn insert(&self, user: NewUser) -> Result<User, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|r| !r.deleted && r.user.email == user.email) {
                return Err(ServiceError::Conflict(format!("email {} already taken", user.email)));
            }
            let created = User {
                id: rows.len() as i64 + 1,
                email: user.email,
                first_name: user.first_name,
                last_name: user.last_name,
                birth_date: user.birth_date,
                address: user.address,
                phone_number: user.phone_number,
            };
            rows.push(Row { user: created.clone(), deleted: false });
            Ok(created)
        }

        async fn find_active(&self, id: i64) -> Result<Option<User>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().find(|r| !r.deleted && r.user.id == id).map(|r| r.user.clone()))
        }

        async fn list_active(&self) -> Result<Vec<User>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().filter(|r| !r.deleted).map(|r| r.user.clone()).collect())
        }

        async fn list_active_born_between(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<User>, ServiceError> {
            self.range_queries.fetch_add(1, Ordering::SeqCst);
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .iter()
                .filter(|r| !r.deleted && r.user.birth_date >= from && r.user.birth_date <= to)
                .map(|r| r.user.clone())
                .collect())
        }

        async fn save(&self, user: User) -> Result<User, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|r| !r.deleted && r.user.id != user.id && r.user.email == user.email) {
                return Err(ServiceError::Conflict(format!("email {} already taken", user.email)));
            }
            let row = rows
                .iter_mut()
                .find(|r| !r.deleted && r.user.id == user.id)
                .ok_or_else(|| ServiceError::not_found("user", user.id))?;
            row.user = user.clone();
            Ok(user)
        }

        async fn soft_delete(&self, id: i64) -> Result<bool, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|r| r.user.id == id && !r.deleted) {
                Some(row) => {
                    row.deleted = true;
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }
}
