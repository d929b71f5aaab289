// Career coach chat: a multi-turn conversation seeded with recent history.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod prompts;
