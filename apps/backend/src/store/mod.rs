//! Record persistence: one JSON file per collection.

pub mod collection;

use std::path::{Path, PathBuf};

pub use collection::{JsonCollection, Mutation, StoreError};

use crate::entities::{Service, User};

pub const SERVICES_COLLECTION: &str = "services";
pub const USERS_COLLECTION: &str = "users";

/// Both collections the backend persists, rooted in one data directory.
#[derive(Debug, Clone)]
pub struct Stores {
    pub data_dir: PathBuf,
    pub services: JsonCollection<Service>,
    pub users: JsonCollection<User>,
}

impl Stores {
    pub fn open(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            data_dir: data_dir.to_path_buf(),
            services: JsonCollection::in_dir(SERVICES_COLLECTION, data_dir),
            users: JsonCollection::in_dir(USERS_COLLECTION, data_dir),
        }
    }
}
