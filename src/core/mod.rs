pub mod entity;
pub mod envelope;
pub mod error;
pub mod traits;

pub use entity::{entity_id, is_valid_uuid, EntityKind};
pub use envelope::Envelope;
pub use error::{FixtureError, Result};
