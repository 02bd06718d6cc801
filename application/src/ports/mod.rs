//! Port definitions (interfaces for external systems)
//!
//! Adapters implementing these live in the infrastructure and presentation
//! layers.

pub mod conversation_logger;
pub mod oracle;
pub mod progress;
pub mod session_store;
