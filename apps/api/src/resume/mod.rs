// Resume and transcript intake: PDF text extraction + LLM skill/coursework extraction.
// All LLM calls go through llm_client.

pub mod extract;
pub mod handlers;
pub mod prompts;
