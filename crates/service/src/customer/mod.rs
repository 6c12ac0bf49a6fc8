//! Customer resource: lightweight contact records without age rules.

pub mod domain;
pub mod dto;
pub mod mapper;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::CustomerService;
