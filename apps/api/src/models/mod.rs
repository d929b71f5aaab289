pub mod history;
pub mod lenient;
pub mod resume;
