//! User resource: full-profile records with a minimum-age rule and birth date search.
//!
//! Layered as domain → dto/mapper → repository → service.

pub mod domain;
pub mod dto;
pub mod mapper;
pub mod rules;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::{UserConfig, UserService};
