//! Service record CRUD on top of the `services` collection.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::{Map, Value};
use tracing::info;

use crate::entities::Service;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::services::{find_by_id, next_id, remove, upsert};
use crate::store::{Mutation, Stores};

fn unix_millis(now: SystemTime) -> i64 {
    now.duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

fn into_fields(body: Value) -> Result<Map<String, Value>, DomainError> {
    match body {
        Value::Object(fields) => Ok(fields),
        _ => Err(DomainError::validation("service body must be a JSON object")),
    }
}

fn not_found(id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Service, format!("service {id} not found"))
}

pub fn list(stores: &Stores) -> Vec<Service> {
    stores.services.load()
}

pub fn get(stores: &Stores, id: i64) -> Result<Service, DomainError> {
    let services = stores.services.load();
    find_by_id(&services, id).cloned().ok_or_else(|| not_found(id))
}

/// Append a new record with a fresh server-assigned id.
pub fn create(stores: &Stores, body: Value, now: SystemTime) -> Result<Service, DomainError> {
    let fields = into_fields(body)?;
    let created = stores.services.update(|services| {
        let service = Service::new(next_id(services, unix_millis(now)), fields);
        services.push(service.clone());
        Mutation::Write(service)
    })?;

    info!(service_id = created.id, "service created");
    Ok(created)
}

/// Replace the fields of record `id`. The stored id is kept whatever the
/// body says.
pub fn update(stores: &Stores, id: i64, body: Value) -> Result<Service, DomainError> {
    let fields = into_fields(body)?;
    let updated = stores.services.update(|services| {
        if find_by_id(services, id).is_none() {
            return Mutation::Skip(Err(not_found(id)));
        }
        let service = Service::new(id, fields);
        upsert(services, service.clone());
        Mutation::Write(Ok(service))
    })??;

    info!(service_id = id, "service updated");
    Ok(updated)
}

pub fn delete(stores: &Stores, id: i64) -> Result<Service, DomainError> {
    let removed = stores.services.update(|services| match remove(services, id) {
        Some(service) => Mutation::Write(Ok(service)),
        None => Mutation::Skip(Err(not_found(id))),
    })??;

    info!(service_id = id, "service deleted");
    Ok(removed)
}
