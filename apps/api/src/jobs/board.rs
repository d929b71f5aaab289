//! Job board abstraction.
//!
//! `AppState` holds an `Arc<dyn JobBoard>`: `AdzunaClient` when credentials
//! are configured, `MockJobBoard` otherwise.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Data model
// ────────────────────────────────────────────────────────────────────────────

/// One job listing as returned to the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub url: Option<String>,
    /// 0 – 100, filled in by the ranking step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u32>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// A source of job listings. Implementations never fail outward: a board that
/// cannot reach its backend degrades to demo listings.
#[async_trait]
pub trait JobBoard: Send + Sync {
    async fn search(&self, keywords: &str) -> Vec<JobPosting>;
}

// ────────────────────────────────────────────────────────────────────────────
// MockJobBoard
// ────────────────────────────────────────────────────────────────────────────

/// Three fixed demo listings with the keywords worked into each description.
pub struct MockJobBoard;

#[async_trait]
impl JobBoard for MockJobBoard {
    async fn search(&self, keywords: &str) -> Vec<JobPosting> {
        mock_postings(keywords)
    }
}

pub fn mock_postings(keywords: &str) -> Vec<JobPosting> {
    let posting = |id: &str,
                   title: &str,
                   company: &str,
                   location: &str,
                   description: String,
                   salary: (f64, f64),
                   url: &str| JobPosting {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        description,
        salary_min: Some(salary.0),
        salary_max: Some(salary.1),
        url: Some(url.to_string()),
        match_score: None,
    };

    vec![
        posting(
            "1",
            "Data Analyst Intern",
            "Google",
            "Mountain View, CA",
            format!(
                "Looking for a data analyst with skills in {keywords}. \
                 Analyze user behavior data and create dashboards."
            ),
            (75_000.0, 90_000.0),
            "https://careers.google.com",
        ),
        posting(
            "2",
            "Junior Data Scientist",
            "Meta",
            "Remote",
            format!(
                "Join our data science team. Work on recommendation systems and A/B testing. \
                 Skills needed: {keywords}, ML, Statistics."
            ),
            (90_000.0, 120_000.0),
            "https://www.metacareers.com",
        ),
        posting(
            "3",
            "Business Analyst",
            "Amazon",
            "Seattle, WA",
            format!(
                "Support product teams with data insights. {keywords} experience preferred. \
                 Strong communication skills required."
            ),
            (70_000.0, 95_000.0),
            "https://www.amazon.jobs",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_board_interpolates_keywords() {
        let jobs = MockJobBoard.search("SQL Python").await;
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0].company, "Google");
        assert_eq!(jobs[1].company, "Meta");
        assert_eq!(jobs[2].company, "Amazon");
        assert!(jobs.iter().all(|j| j.description.contains("SQL Python")));
        assert!(jobs.iter().all(|j| j.match_score.is_none()));
    }

    #[test]
    fn test_unscored_posting_omits_match_score() {
        let job = &mock_postings("Excel")[2];
        let value = serde_json::to_value(job).unwrap();
        assert!(value.get("match_score").is_none());
        assert_eq!(value["salary_max"], 95_000.0);
        assert_eq!(value["url"], "https://www.amazon.jobs");
    }
}
