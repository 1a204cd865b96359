//! Service record lookups and edits over an in-memory collection.

use crate::entities::Service;

pub fn find_by_id(services: &[Service], id: i64) -> Option<&Service> {
    services.iter().find(|s| s.id == id)
}

/// Replace the record with the same `id` in place, or append it.
pub fn upsert(services: &mut Vec<Service>, service: Service) {
    match services.iter_mut().find(|s| s.id == service.id) {
        Some(existing) => *existing = service,
        None => services.push(service),
    }
}

/// Remove and return the record with `id`, keeping the others in order.
pub fn remove(services: &mut Vec<Service>, id: i64) -> Option<Service> {
    let index = services.iter().position(|s| s.id == id)?;
    Some(services.remove(index))
}

/// Pick an id for a new record: the wall clock in milliseconds, bumped past
/// the largest existing id when the clock would repeat or go backwards.
pub fn next_id(services: &[Service], now_ms: i64) -> i64 {
    match services.iter().map(|s| s.id).max() {
        Some(max) if max >= now_ms => max.saturating_add(1),
        _ => now_ms,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map, Value};

    use super::*;

    fn svc(id: i64, name: &str) -> Service {
        let mut fields = Map::new();
        fields.insert("service".into(), Value::from(name));
        Service::new(id, fields)
    }

    #[test]
    fn finds_by_id() {
        let all = vec![svc(1, "a"), svc(2, "b")];
        assert_eq!(find_by_id(&all, 2).unwrap().fields["service"], json!("b"));
        assert!(find_by_id(&all, 3).is_none());
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut all = vec![svc(1, "a"), svc(2, "b"), svc(3, "c")];
        upsert(&mut all, svc(2, "B"));
        let names: Vec<_> = all.iter().map(|s| s.fields["service"].clone()).collect();
        assert_eq!(names, vec![json!("a"), json!("B"), json!("c")]);

        upsert(&mut all, svc(4, "d"));
        assert_eq!(all.len(), 4);
        assert_eq!(all[3].id, 4);
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut all = vec![svc(1, "a"), svc(2, "b")];
        assert!(remove(&mut all, 9).is_none());
        assert_eq!(all, vec![svc(1, "a"), svc(2, "b")]);

        assert_eq!(remove(&mut all, 1).unwrap().id, 1);
        assert_eq!(all, vec![svc(2, "b")]);
    }

    #[test]
    fn next_id_uses_clock_unless_it_collides() {
        assert_eq!(next_id(&[], 1_000), 1_000);
        assert_eq!(next_id(&[svc(500, "a")], 1_000), 1_000);
        assert_eq!(next_id(&[svc(1_000, "a")], 1_000), 1_001);
        assert_eq!(next_id(&[svc(5_000, "a")], 1_000), 5_001);
    }
}
