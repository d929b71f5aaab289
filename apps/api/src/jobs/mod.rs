// Job search: a pluggable job board (Adzuna or demo listings) plus LLM match scoring.
// All LLM calls go through llm_client.

pub mod adzuna;
pub mod board;
pub mod handlers;
pub mod prompts;
pub mod ranking;

pub use adzuna::{AdzunaClient, JobSearchError};
pub use board::{JobBoard, JobPosting, MockJobBoard};
