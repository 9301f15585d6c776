pub mod account_repository;

pub use account_repository::{AccountRepository, PgAccountRepository};

#[cfg(test)]
pub use account_repository::MockAccountRepository;
