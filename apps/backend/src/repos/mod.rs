//! Derived record operations applied to a loaded collection before it is
//! written back with `replace_all`.

pub mod services;
pub mod users;
