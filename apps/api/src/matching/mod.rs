// Job matching: resume vs job description comparison (with learning path) and cover letters.
// All LLM calls go through llm_client.

pub mod comparison;
pub mod cover_letter;
pub mod handlers;
pub mod prompts;
