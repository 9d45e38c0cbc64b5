//! Prompt templates for the deliberation flow.

pub mod template;

pub use template::PromptTemplate;
