//! Adzuna job search client.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::AdzunaCredentials;
use crate::jobs::board::{mock_postings, JobBoard, JobPosting};
use crate::llm_client::prompts::truncate_chars;

const API_BASE_URL: &str = "https://api.adzuna.com/v1/api/jobs";
const RESULTS_PER_PAGE: u32 = 10;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const DESCRIPTION_CHARS: usize = 500;

#[derive(Debug, Error)]
pub enum JobSearchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Adzuna returned {status}")]
    Api { status: u16 },
}

// Wire shapes; every field is optional on Adzuna's side.

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<AdzunaJob>,
}

#[derive(Debug, Deserialize)]
struct AdzunaJob {
    #[serde(default)]
    id: Value,
    title: Option<String>,
    company: Option<DisplayName>,
    location: Option<DisplayName>,
    description: Option<String>,
    salary_min: Option<f64>,
    salary_max: Option<f64>,
    redirect_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DisplayName {
    display_name: Option<String>,
}

impl From<AdzunaJob> for JobPosting {
    fn from(job: AdzunaJob) -> Self {
        let id = match job.id {
            Value::String(s) => s,
            Value::Null => String::new(),
            other => other.to_string(),
        };
        let display = |name: Option<DisplayName>, fallback: &str| {
            name.and_then(|n| n.display_name)
                .unwrap_or_else(|| fallback.to_string())
        };
        let description = job.description.unwrap_or_default();

        JobPosting {
            id,
            title: job.title.unwrap_or_default(),
            company: display(job.company, "Unknown Company"),
            location: display(job.location, "Remote"),
            description: truncate_chars(&description, DESCRIPTION_CHARS).to_string(),
            salary_min: job.salary_min,
            salary_max: job.salary_max,
            url: job.redirect_url,
            match_score: None,
        }
    }
}

fn parse_search_response(body: SearchResponse) -> Vec<JobPosting> {
    body.results.into_iter().map(JobPosting::from).collect()
}

pub struct AdzunaClient {
    client: reqwest::Client,
    credentials: AdzunaCredentials,
    search_url: String,
}

impl AdzunaClient {
    pub fn new(credentials: AdzunaCredentials, country: &str) -> Result<Self, JobSearchError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            credentials,
            search_url: format!("{API_BASE_URL}/{country}/search/1"),
        })
    }

    async fn fetch(&self, keywords: &str) -> Result<Vec<JobPosting>, JobSearchError> {
        let results_per_page = RESULTS_PER_PAGE.to_string();
        let response = self
            .client
            .get(&self.search_url)
            .query(&[
                ("app_id", self.credentials.app_id.as_str()),
                ("app_key", self.credentials.app_key.as_str()),
                ("what", keywords),
                ("results_per_page", results_per_page.as_str()),
                ("content-type", "application/json"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(JobSearchError::Api {
                status: status.as_u16(),
            });
        }

        let body: SearchResponse = response.json().await?;
        Ok(parse_search_response(body))
    }
}

#[async_trait]
impl JobBoard for AdzunaClient {
    async fn search(&self, keywords: &str) -> Vec<JobPosting> {
        match self.fetch(keywords).await {
            Ok(jobs) => {
                info!("Adzuna returned {} jobs for '{keywords}'", jobs.len());
                jobs
            }
            Err(e) => {
                warn!("Adzuna search failed, serving demo listings: {e}");
                mock_postings(keywords)
            }
        }
    }
}
