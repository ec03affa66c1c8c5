pub mod cache;
pub mod context;

pub use cache::{CachedFixture, FixtureCache, FIXTURE_KEY_PREFIX};
pub use context::FixtureContext;
