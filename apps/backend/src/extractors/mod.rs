pub mod current_user;
pub mod service_id;
pub mod validated_json;

pub use current_user::CurrentUser;
pub use service_id::ServiceId;
pub use validated_json::ValidatedJson;
