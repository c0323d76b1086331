mod record;
mod record_id;

pub use record::{UserFields, UserRecord};
pub use record_id::RecordId;
