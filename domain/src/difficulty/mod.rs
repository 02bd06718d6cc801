//! Adaptive difficulty domain
//!
//! The philosopher's register follows the human's measured sophistication.
//! This module holds the pure parts of that loop:
//!
//! - [`DifficultyLevel`]: the three labels, all mutually reachable
//! - [`DifficultyState`]: level, score and the turn count of the last assessment
//! - [`DifficultyAssessment`]: one scored rubric, parsed from an oracle reply
//! - [`should_reassess`] / [`augment`]: the sampling policy and the
//!   instruction augmentation, both pure functions

mod assessment;
mod level;
mod state;

pub use assessment::DifficultyAssessment;
pub use level::{DifficultyLevel, ParseLevelError};
pub use state::{DifficultyState, augment, should_reassess};
