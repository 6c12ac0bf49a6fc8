use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::customer::repo::seaorm::SeaOrmCustomerRepository;
use service::customer::repository::CustomerRepository;
use service::customer::CustomerService;
use service::user::repo::seaorm::SeaOrmUserRepository;
use service::user::repository::UserRepository;
use service::user::{UserConfig, UserService};

/// Shared handler state; cloning only bumps the `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService<dyn UserRepository>>,
    pub customers: Arc<CustomerService<dyn CustomerRepository>>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        customers: Arc<dyn CustomerRepository>,
        user_cfg: UserConfig,
    ) -> Self {
        Self {
            users: Arc::new(UserService::new(users, user_cfg)),
            customers: Arc::new(CustomerService::new(customers)),
        }
    }

    /// Wire SeaORM repositories over one pool.
    pub fn from_db(db: DatabaseConnection, user_cfg: UserConfig) -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(SeaOrmUserRepository { db: db.clone() });
        let customers: Arc<dyn CustomerRepository> = Arc::new(SeaOrmCustomerRepository { db });
        Self::new(users, customers, user_cfg)
    }
}
