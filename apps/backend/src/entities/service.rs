use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key under which the server-assigned id is stored.
pub const ID_FIELD: &str = "id";

/// A booked service: a server-assigned `id` plus whatever fields the client
/// sent. Serialized flat, so `{"id": 1, "service": "Clean"}` on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Service {
    /// Build a record from client fields. Any client-supplied `id` is dropped.
    pub fn new(id: i64, mut fields: Map<String, Value>) -> Self {
        fields.remove(ID_FIELD);
        Self { id, fields }
    }
}
