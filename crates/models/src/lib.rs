pub mod errors;
pub mod db;
pub mod user;
pub mod customer;

#[cfg(test)]
mod tests;
