//! Persona domain
//!
//! Static catalogs of philosophical personas and discussion topics.
//! Both are pure lookup tables: no mutable state, no failure modes beyond
//! an unknown key, which callers map to their own fallback policy.

mod registry;
mod topic;

pub use registry::{DEFAULT_PERSONA, Persona};
pub use topic::{CUSTOM_TOPIC_KEY, TopicCatalog, TopicEntry};
