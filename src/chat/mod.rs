pub mod orchestrator;
pub mod prompts;

pub use orchestrator::ConversationOrchestrator;
