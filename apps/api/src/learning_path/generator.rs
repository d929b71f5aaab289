//! Learning Path Generator: turns an ordered list of missing skills into a
//! week-by-week study plan.
//!
//! Pure and deterministic: the catalog is injected at construction and never
//! mutated, so one generator can be shared across requests behind an `Arc`.

use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::learning_path::catalog::{CourseRecord, SkillCatalog};

/// Skills beyond this many are dropped from the plan.
pub const MAX_PLAN_SKILLS: usize = 5;
/// Study hours budgeted per course week.
pub const HOURS_PER_WEEK: u32 = 5;
/// Duration assigned to skills with no catalog course.
pub const PLACEHOLDER_WEEKS: u32 = 2;

const PLACEHOLDER_PROVIDER: &str = "Multiple platforms";
const PLACEHOLDER_COST: &str = "Varies";
const SEARCH_URL_PREFIX: &str = "https://www.google.com/search?q=learn+";

/// Inclusive, 1-indexed span of study weeks. Serialized as `"start-end"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    pub start: u32,
    pub end: u32,
}

impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl Serialize for WeekRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One scheduled unit of the learning path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningPlanEntry {
    /// The missing skill exactly as supplied by the caller.
    pub skill: String,
    pub weeks: WeekRange,
    /// Course title.
    pub course: String,
    pub provider: String,
    pub url: String,
    pub cost: String,
    pub project: String,
    #[serde(rename = "time_commitment", serialize_with = "serialize_hours")]
    pub time_commitment_hours: u32,
}

fn serialize_hours<S: Serializer>(hours: &u32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{hours} hours"))
}

pub struct LearningPathGenerator {
    catalog: SkillCatalog,
}

impl LearningPathGenerator {
    pub fn new(catalog: SkillCatalog) -> Self {
        Self { catalog }
    }

    /// Builds the plan for up to `MAX_PLAN_SKILLS` skills, in input order.
    ///
    /// Never fails: skills without a catalog match get a generic placeholder
    /// course of `PLACEHOLDER_WEEKS` weeks.
    pub fn generate<S: AsRef<str>>(&self, missing_skills: &[S]) -> Vec<LearningPlanEntry> {
        let mut cumulative_week = 0;

        missing_skills
            .iter()
            .take(MAX_PLAN_SKILLS)
            .map(|skill| {
                let skill = skill.as_ref();
                let course = self
                    .catalog
                    .lookup(skill)
                    .map(Cow::Borrowed)
                    .unwrap_or_else(|| Cow::Owned(placeholder_course(skill)));

                let weeks = WeekRange {
                    start: cumulative_week + 1,
                    end: cumulative_week + course.duration_weeks,
                };
                cumulative_week = weeks.end;

                LearningPlanEntry {
                    skill: skill.to_string(),
                    weeks,
                    course: course.title.clone(),
                    provider: course.provider.clone(),
                    url: course.url.clone(),
                    cost: course.cost.clone(),
                    project: course.project.clone(),
                    time_commitment_hours: course.duration_weeks * HOURS_PER_WEEK,
                }
            })
            .collect()
    }
}

fn placeholder_course(skill: &str) -> CourseRecord {
    CourseRecord {
        title: format!("Learn {skill}"),
        provider: PLACEHOLDER_PROVIDER.to_string(),
        url: search_url(skill),
        duration_weeks: PLACEHOLDER_WEEKS,
        cost: PLACEHOLDER_COST.to_string(),
        project: format!("Build a portfolio project demonstrating {skill}"),
    }
}

/// Search link for a skill: spaces become `+`, everything else reserved is
/// percent-encoded.
fn search_url(skill: &str) -> String {
    let query = skill
        .split(' ')
        .map(|word| urlencoding::encode(word).into_owned())
        .collect::<Vec<_>>()
        .join("+");
    format!("{SEARCH_URL_PREFIX}{query}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learning_path::catalog::{CatalogEntry, MAX_COURSE_WEEKS};

    fn generator() -> LearningPathGenerator {
        LearningPathGenerator::new(SkillCatalog::builtin())
    }

    #[test]
    fn test_empty_input_gives_empty_plan() {
        let empty: [&str; 0] = [];
        assert!(generator().generate(&empty).is_empty());
    }

    #[test]
    fn test_single_catalog_skill() {
        let plan = generator().generate(&["SQL"]);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].skill, "SQL");
        assert_eq!(plan[0].course, "SQL for Data Analysis");
        assert_eq!(plan[0].weeks, WeekRange { start: 1, end: 2 });
        assert_eq!(plan[0].time_commitment_hours, 10);
    }

    #[test]
    fn test_week_ranges_accumulate() {
        let plan = generator().generate(&["SQL", "Tableau"]);
        assert_eq!(plan[0].weeks, WeekRange { start: 1, end: 2 });
        assert_eq!(plan[1].weeks, WeekRange { start: 3, end: 4 });
    }

    #[test]
    fn test_unknown_skill_gets_placeholder() {
        let plan = generator().generate(&["Quantum Computing"]);
        assert_eq!(plan.len(), 1);
        let entry = &plan[0];
        assert_eq!(entry.course, "Learn Quantum Computing");
        assert_eq!(entry.provider, "Multiple platforms");
        assert_eq!(entry.cost, "Varies");
        assert_eq!(entry.weeks, WeekRange { start: 1, end: 2 });
        assert_eq!(
            entry.url,
            "https://www.google.com/search?q=learn+Quantum+Computing"
        );
        assert_eq!(
            entry.project,
            "Build a portfolio project demonstrating Quantum Computing"
        );
    }

    #[test]
    fn test_plan_truncates_to_five_in_order() {
        let skills = [
            "SQL",
            "Tableau",
            "Python",
            "Statistics",
            "Excel",
            "Power BI",
            "Kubernetes",
        ];
        let plan = generator().generate(&skills);
        assert_eq!(plan.len(), MAX_PLAN_SKILLS);
        let names: Vec<&str> = plan.iter().map(|e| e.skill.as_str()).collect();
        assert_eq!(names, &skills[..5]);
    }

    #[test]
    fn test_weeks_contiguous_and_hours_match_duration() {
        let plan = generator().generate(&[
            "Python",
            "Machine Learning",
            "Rust",
            "excel",
            "Statistics",
        ]);
        assert_eq!(plan[0].weeks.start, 1);
        for pair in plan.windows(2) {
            assert_eq!(pair[0].weeks.end + 1, pair[1].weeks.start);
        }
        for entry in &plan {
            let weeks = entry.weeks.end - entry.weeks.start + 1;
            assert_eq!(entry.time_commitment_hours, weeks * HOURS_PER_WEEK);
            assert!(!entry.course.is_empty());
        }
        // "Rust" contains "r" and lands on the 4-week R course: 3 + 8 + 4 + 1 + 3
        assert_eq!(plan[2].course, "R Programming");
        assert_eq!(plan.last().unwrap().weeks.end, 19);
    }

    #[test]
    fn test_skill_casing_is_preserved() {
        let plan = generator().generate(&["sql server"]);
        assert_eq!(plan[0].skill, "sql server");
        assert_eq!(plan[0].course, "SQL for Data Analysis");
    }

    #[test]
    fn test_generate_is_idempotent() {
        let generator = generator();
        let skills = vec!["SQL".to_string(), "Go".to_string(), "Tableau".to_string()];
        assert_eq!(generator.generate(&skills), generator.generate(&skills));
    }

    #[test]
    fn test_duplicate_skills_are_scheduled_twice() {
        let plan = generator().generate(&["SQL", "SQL"]);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[1].weeks, WeekRange { start: 3, end: 4 });
    }

    #[test]
    fn test_placeholder_url_escapes_reserved_characters() {
        assert_eq!(
            search_url("C++ & C#"),
            "https://www.google.com/search?q=learn+C%2B%2B+%26+C%23"
        );
        assert_eq!(
            search_url("node.js/express"),
            "https://www.google.com/search?q=learn+node.js%2Fexpress"
        );
    }

    #[test]
    fn test_substitute_catalog() {
        let catalog = SkillCatalog::new(vec![CatalogEntry {
            skill: "Rust".to_string(),
            courses: vec![CourseRecord {
                title: "The Book".to_string(),
                provider: "rust-lang".to_string(),
                url: "https://doc.rust-lang.org/book/".to_string(),
                duration_weeks: 6,
                cost: "Free".to_string(),
                project: "Write a CLI".to_string(),
            }],
        }])
        .unwrap();
        let plan = LearningPathGenerator::new(catalog).generate(&["rust", "SQL"]);
        assert_eq!(plan[0].course, "The Book");
        assert_eq!(plan[0].weeks, WeekRange { start: 1, end: 6 });
        assert_eq!(plan[0].time_commitment_hours, 30);
        assert_eq!(plan[1].course, "Learn SQL");
        assert_eq!(plan[1].weeks, WeekRange { start: 7, end: 8 });
    }

    #[test]
    fn test_longest_allowed_courses_fill_plan() {
        let entries = ["Go", "Elixir", "Haskell", "OCaml", "Zig"]
            .iter()
            .map(|skill| CatalogEntry {
                skill: skill.to_string(),
                courses: vec![CourseRecord {
                    title: format!("{skill} in a Year"),
                    provider: "x".to_string(),
                    url: "https://example.com".to_string(),
                    duration_weeks: MAX_COURSE_WEEKS,
                    cost: "Free".to_string(),
                    project: "p".to_string(),
                }],
            })
            .collect();
        let catalog = SkillCatalog::new(entries).unwrap();
        let plan = LearningPathGenerator::new(catalog)
            .generate(&["Go", "Elixir", "Haskell", "OCaml", "Zig"]);
        let last = plan.last().unwrap();
        assert_eq!(last.weeks, WeekRange { start: 209, end: 260 });
        assert_eq!(last.time_commitment_hours, MAX_COURSE_WEEKS * HOURS_PER_WEEK);
    }

    #[test]
    fn test_entry_wire_format() {
        let plan = generator().generate(&["Excel"]);
        let value = serde_json::to_value(&plan[0]).unwrap();
        assert_eq!(value["skill"], "Excel");
        assert_eq!(value["weeks"], "1-1");
        assert_eq!(value["course"], "Excel for Data Analysis");
        assert_eq!(value["provider"], "Microsoft Learn");
        assert_eq!(value["cost"], "Free");
        assert_eq!(value["time_commitment"], "5 hours");
    }
}
