// Chat widget backend: local topic responder, optional remote completion,
// and the turn orchestration between them.
// All remote calls go through llm_client — never directly from here.

pub mod format;
pub mod handlers;
pub mod history;
pub mod prompts;
pub mod responder;
pub mod service;
pub mod topics;
