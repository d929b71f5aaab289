// In-memory resume/transcript store plus the flat-file history log.

pub mod history;
pub mod memory;

pub use history::{HistoryStore, NewAnalysis, StoreError};
pub use memory::ResumeStore;
