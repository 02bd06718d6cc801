//! Prompt domain
//!
//! Templates for every system instruction and user prompt the engine sends
//! to the language oracle.

mod analysis;
mod debate;
mod template;

pub use analysis::AnalysisPromptTemplate;
pub use debate::DebatePromptTemplate;
pub use template::PromptTemplate;
