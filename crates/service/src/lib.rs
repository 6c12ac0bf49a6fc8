//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses entity definitions in the `models` crate behind repository traits.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod validation;
pub mod user;
pub mod customer;
#[cfg(test)]
pub mod test_support;
