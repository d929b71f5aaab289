// Learning path: course catalog + deterministic week-by-week plan builder.
// No I/O here; handlers call `LearningPathGenerator::generate` directly.

pub mod catalog;
pub mod generator;

pub use catalog::{CatalogEntry, CatalogError, CourseRecord, SkillCatalog};
pub use generator::{LearningPathGenerator, LearningPlanEntry, WeekRange};
