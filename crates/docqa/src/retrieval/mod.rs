//! Query orchestration over stored documents

mod chat;
mod orchestrator;

pub use chat::ChatSession;
pub use orchestrator::QueryOrchestrator;
