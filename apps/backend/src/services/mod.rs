//! Domain operations. HTTP-agnostic; every function returns `DomainError`.

pub mod service_records;
pub mod users;
