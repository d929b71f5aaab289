//! Course Catalog: maps skill keys to recommended courses.
//!
//! Matching is case-insensitive substring containment in either direction:
//! query "SQL Server" hits key "SQL", query "learning" hits "Machine Learning".
//! Keys are scanned in insertion order and the first hit wins.
//!
//! Short queries match broadly: "R" hits the first key containing an "r", which
//! is "Machine Learning", not "R". Keep the rule as is; token or edit-distance
//! matching would change which skills map to which courses.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest course a catalog may list.
pub const MAX_COURSE_WEEKS: u32 = 52;

/// A single recommended learning resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub title: String,
    pub provider: String,
    pub url: String,
    pub duration_weeks: u32,
    pub cost: String,
    /// Suggested hands-on exercise to go with the course.
    pub project: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog entry #{index} has an empty skill key")]
    EmptyKey { index: usize },

    #[error("catalog skill '{skill}' has no courses")]
    NoCourses { skill: String },

    #[error("course for skill '{skill}' has an empty title")]
    EmptyTitle { skill: String },

    #[error("course '{title}' for skill '{skill}' must last at least one week")]
    ZeroDuration { skill: String, title: String },

    #[error("course '{title}' for skill '{skill}' lasts {weeks} weeks, more than {MAX_COURSE_WEEKS}")]
    TooLong {
        skill: String,
        title: String,
        weeks: u32,
    },

    #[error("invalid catalog JSON: {0}")]
    Json(String),
}

/// One row of a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub skill: String,
    pub courses: Vec<CourseRecord>,
}

#[derive(Debug, Clone)]
struct KeyedCourses {
    key_lower: String,
    courses: Vec<CourseRecord>,
}

/// Read-only skill → courses table. Construct once at startup and hand it to
/// the `LearningPathGenerator`.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    entries: Vec<KeyedCourses>,
}

impl SkillCatalog {
    /// Builds a catalog from entries, preserving their order.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        for (index, entry) in entries.iter().enumerate() {
            validate_entry(index, entry)?;
        }
        Ok(Self::from_validated(entries))
    }

    /// Parses a JSON array of `{ "skill": ..., "courses": [...] }` objects.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(text).map_err(|e| CatalogError::Json(e.to_string()))?;
        Self::new(entries)
    }

    /// The reference course table.
    pub fn builtin() -> Self {
        let entries = BUILTIN_COURSES
            .iter()
            .map(|&(skill, title, provider, url, duration_weeks, cost, project)| CatalogEntry {
                skill: skill.to_string(),
                courses: vec![CourseRecord {
                    title: title.to_string(),
                    provider: provider.to_string(),
                    url: url.to_string(),
                    duration_weeks,
                    cost: cost.to_string(),
                    project: project.to_string(),
                }],
            })
            .collect();
        Self::from_validated(entries)
    }

    fn from_validated(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|e| KeyedCourses {
                    key_lower: e.skill.to_lowercase(),
                    courses: e.courses,
                })
                .collect(),
        }
    }

    /// Returns the first course of the first key that contains, or is
    /// contained in, `skill` (case-insensitive).
    pub fn lookup(&self, skill: &str) -> Option<&CourseRecord> {
        let query = skill.to_lowercase();
        self.entries
            .iter()
            .find(|e| query.contains(&e.key_lower) || e.key_lower.contains(&query))
            .and_then(|e| e.courses.first())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_entry(index: usize, entry: &CatalogEntry) -> Result<(), CatalogError> {
    if entry.skill.trim().is_empty() {
        return Err(CatalogError::EmptyKey { index });
    }
    if entry.courses.is_empty() {
        return Err(CatalogError::NoCourses {
            skill: entry.skill.clone(),
        });
    }
    for course in &entry.courses {
        if course.title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle {
                skill: entry.skill.clone(),
            });
        }
        if course.duration_weeks == 0 {
            return Err(CatalogError::ZeroDuration {
                skill: entry.skill.clone(),
                title: course.title.clone(),
            });
        }
        if course.duration_weeks > MAX_COURSE_WEEKS {
            return Err(CatalogError::TooLong {
                skill: entry.skill.clone(),
                title: course.title.clone(),
                weeks: course.duration_weeks,
            });
        }
    }
    Ok(())
}

// (skill, title, provider, url, weeks, cost, project)
type CourseRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    u32,
    &'static str,
    &'static str,
);

const BUILTIN_COURSES: &[CourseRow] = &[
    (
        "SQL",
        "SQL for Data Analysis",
        "freeCodeCamp",
        "https://www.freecodecamp.org/learn/data-analysis-with-python/",
        2,
        "Free",
        "Analyze a public database (Chinook, Sakila) and write 10 complex queries",
    ),
    (
        "Tableau",
        "Tableau Fundamentals",
        "Tableau",
        "https://www.tableau.com/learn/training",
        2,
        "Free",
        "Create an interactive sales dashboard with 5+ visualizations",
    ),
    (
        "Python",
        "Python Crash Course",
        "Google/Coursera",
        "https://www.coursera.org/learn/python-crash-course",
        3,
        "Free (audit)",
        "Build a data cleaning script for CSV files",
    ),
    (
        "Machine Learning",
        "ML Specialization",
        "Andrew Ng/Coursera",
        "https://www.coursera.org/specializations/machine-learning-introduction",
        8,
        "$49/month",
        "Train and deploy a classification model (95%+ accuracy)",
    ),
    (
        "Statistics",
        "Statistics Fundamentals",
        "Khan Academy",
        "https://www.khanacademy.org/math/statistics-probability",
        3,
        "Free",
        "Perform A/B test analysis with statistical significance",
    ),
    (
        "Excel",
        "Excel for Data Analysis",
        "Microsoft Learn",
        "https://learn.microsoft.com/en-us/training/excel/",
        1,
        "Free",
        "Build financial model with pivot tables and formulas",
    ),
    (
        "Power BI",
        "Power BI Essentials",
        "Microsoft Learn",
        "https://learn.microsoft.com/en-us/training/powerplatform/power-bi",
        2,
        "Free",
        "Create interactive business intelligence dashboard",
    ),
    (
        "R",
        "R Programming",
        "Johns Hopkins/Coursera",
        "https://www.coursera.org/learn/r-programming",
        4,
        "Free (audit)",
        "Statistical analysis and visualization of real dataset",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn course(title: &str, weeks: u32) -> CourseRecord {
        CourseRecord {
            title: title.to_string(),
            provider: "Test".to_string(),
            url: "https://example.com".to_string(),
            duration_weeks: weeks,
            cost: "Free".to_string(),
            project: "Do it".to_string(),
        }
    }

    #[test]
    fn test_builtin_has_eight_skills() {
        assert_eq!(SkillCatalog::builtin().len(), 8);
    }

    #[test]
    fn test_builtin_passes_validation() {
        for (index, row) in BUILTIN_COURSES.iter().enumerate() {
            let entry = CatalogEntry {
                skill: row.0.to_string(),
                courses: vec![course(row.1, row.4)],
            };
            assert_eq!(validate_entry(index, &entry), Ok(()));
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = SkillCatalog::builtin();
        let hit = catalog.lookup("tableau").unwrap();
        assert_eq!(hit.title, "Tableau Fundamentals");
    }

    #[test]
    fn test_lookup_query_contains_key() {
        let catalog = SkillCatalog::builtin();
        assert_eq!(
            catalog.lookup("SQL Server").unwrap().title,
            "SQL for Data Analysis"
        );
    }

    #[test]
    fn test_lookup_key_contains_query() {
        let catalog = SkillCatalog::builtin();
        assert_eq!(
            catalog.lookup("learning").unwrap().title,
            "ML Specialization"
        );
    }

    #[test]
    fn test_lookup_ml_abbreviation_does_not_match_machine_learning() {
        // "ml" is not a substring of "machine learning" and vice versa.
        let catalog = SkillCatalog::builtin();
        assert!(catalog.lookup("ML").is_none());
    }

    #[test]
    fn test_lookup_single_letter_matches_first_containing_key() {
        // "machine learning" contains an "r" and is scanned before "R".
        let catalog = SkillCatalog::builtin();
        assert_eq!(catalog.lookup("R").unwrap().title, "ML Specialization");
    }

    #[test]
    fn test_lookup_miss_returns_none() {
        assert!(SkillCatalog::builtin().lookup("Quantum Computing").is_none());
    }

    #[test]
    fn test_insertion_order_decides_overlapping_keys() {
        let catalog = SkillCatalog::new(vec![
            CatalogEntry {
                skill: "Data".to_string(),
                courses: vec![course("Data 101", 1)],
            },
            CatalogEntry {
                skill: "Data Engineering".to_string(),
                courses: vec![course("Pipelines", 4)],
            },
        ])
        .unwrap();
        assert_eq!(catalog.lookup("data engineering").unwrap().title, "Data 101");
    }

    #[test]
    fn test_new_rejects_zero_duration() {
        let err = SkillCatalog::new(vec![CatalogEntry {
            skill: "Go".to_string(),
            courses: vec![course("Go Tour", 0)],
        }])
        .unwrap_err();
        assert!(matches!(err, CatalogError::ZeroDuration { .. }));
    }

    #[test]
    fn test_from_json_rejects_oversized_duration() {
        let json = r#"[{"skill": "Go", "courses": [{
            "title": "Go Forever", "provider": "x", "url": "https://go.dev",
            "duration_weeks": 1000000000, "cost": "Free", "project": "p"
        }]}]"#;
        let err = SkillCatalog::from_json(json).unwrap_err();
        assert_eq!(
            err,
            CatalogError::TooLong {
                skill: "Go".to_string(),
                title: "Go Forever".to_string(),
                weeks: 1_000_000_000,
            }
        );
    }

    #[test]
    fn test_new_accepts_year_long_course() {
        let catalog = SkillCatalog::new(vec![CatalogEntry {
            skill: "Go".to_string(),
            courses: vec![course("Go Year", MAX_COURSE_WEEKS)],
        }]);
        assert!(catalog.is_ok());
    }

    #[test]
    fn test_new_rejects_empty_title() {
        let err = SkillCatalog::new(vec![CatalogEntry {
            skill: "Go".to_string(),
            courses: vec![course("  ", 2)],
        }])
        .unwrap_err();
        assert!(matches!(err, CatalogError::EmptyTitle { .. }));
    }

    #[test]
    fn test_new_rejects_missing_courses_and_keys() {
        let no_courses = SkillCatalog::new(vec![CatalogEntry {
            skill: "Go".to_string(),
            courses: vec![],
        }]);
        assert!(matches!(no_courses, Err(CatalogError::NoCourses { .. })));

        let no_key = SkillCatalog::new(vec![CatalogEntry {
            skill: String::new(),
            courses: vec![course("Go Tour", 1)],
        }]);
        assert_eq!(no_key.unwrap_err(), CatalogError::EmptyKey { index: 0 });
    }

    #[test]
    fn test_from_json_preserves_order() {
        let json = r#"[
            {"skill": "Rust", "courses": [{
                "title": "The Book", "provider": "rust-lang", "url": "https://doc.rust-lang.org/book/",
                "duration_weeks": 6, "cost": "Free", "project": "Write a CLI"
            }]},
            {"skill": "Rust Async", "courses": [{
                "title": "Async Book", "provider": "rust-lang", "url": "https://rust-lang.github.io/async-book/",
                "duration_weeks": 2, "cost": "Free", "project": "Write a server"
            }]}
        ]"#;
        let catalog = SkillCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup("rust async").unwrap().title, "The Book");
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = SkillCatalog::from_json("{\"skill\": 1}").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }
}
