//! Whole-file JSON collections.
//!
//! A collection is one file holding a JSON array. Reads re-parse the file
//! every time and treat anything unreadable as empty; writes serialize the
//! full sequence and overwrite the file.

use std::fmt;
use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Outcome of an [`JsonCollection::update`] closure.
#[derive(Debug)]
pub enum Mutation<R> {
    /// Persist the mutated sequence, then return the value.
    Write(R),
    /// Leave the file untouched and return the value.
    Skip(R),
}

/// A named collection of `T` records persisted as one JSON file.
pub struct JsonCollection<T> {
    name: &'static str,
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(name: &'static str, path: impl Into<PathBuf>) -> Self {
        Self {
            name,
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
            _records: PhantomData,
        }
    }

    /// `<dir>/<name>.json`
    pub fn in_dir(name: &'static str, dir: &Path) -> Self {
        Self::new(name, dir.join(format!("{name}.json")))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record. Missing, unreadable, or malformed files read as empty.
    pub fn load(&self) -> Vec<T> {
        fs::read(&self.path)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .unwrap_or_default()
    }

    /// Overwrite the file with `records`, pretty-printed, in order.
    pub fn replace_all(&self, records: &[T]) -> Result<(), StoreError> {
        let body = serde_json::to_vec_pretty(records)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&self.path, body).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Load, mutate, and write back while holding this collection's write lock.
    ///
    /// Concurrent `update` calls on clones of the same collection run one at a
    /// time, so a mutation never starts from a snapshot another one is about
    /// to overwrite.
    pub fn update<R, F>(&self, mutate: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut Vec<T>) -> Mutation<R>,
    {
        let _guard = self.write_lock.lock();
        let mut records = self.load();
        match mutate(&mut records) {
            Mutation::Write(value) => {
                self.replace_all(&records)?;
                Ok(value)
            }
            Mutation::Skip(value) => Ok(value),
        }
    }
}

impl<T> Clone for JsonCollection<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            path: self.path.clone(),
            write_lock: Arc::clone(&self.write_lock),
            _records: PhantomData,
        }
    }
}

impl<T> fmt::Debug for JsonCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonCollection")
            .field("name", &self.name)
            .field("path", &self.path)
            .finish()
    }
}
