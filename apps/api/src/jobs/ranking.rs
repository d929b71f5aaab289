//! LLM match scoring for job listings.

use tokio::task::JoinSet;
use tracing::warn;

use crate::jobs::board::JobPosting;
use crate::jobs::prompts::{JOB_SNIPPET_CHARS, MATCH_SCORE_PROMPT_TEMPLATE};
use crate::llm_client::prompts::{render, truncate_chars};
use crate::llm_client::LlmClient;

/// Score used when the LLM call fails or its reply holds no number.
pub const DEFAULT_MATCH_SCORE: u32 = 70;

/// First run of ASCII digits in the reply, capped at 100. Digits after the
/// first run are ignored, so "85/100" is 85 rather than every digit joined.
pub fn parse_match_score(reply: &str) -> Option<u32> {
    let digits: String = reply
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    // A run too long for u32 is still "more than 100".
    Some(digits.parse::<u32>().map_or(100, |n| n.min(100)))
}

pub fn build_match_prompt(resume_skills: &str, job: &JobPosting) -> String {
    render(
        MATCH_SCORE_PROMPT_TEMPLATE,
        &[
            ("resume_skills", resume_skills),
            ("job_title", job.title.as_str()),
            ("job_snippet", truncate_chars(&job.description, JOB_SNIPPET_CHARS)),
        ],
    )
}

/// Sorts by match score, highest first. Ties keep their board order.
pub fn sort_by_match_score(jobs: &mut [JobPosting]) {
    jobs.sort_by(|a, b| b.match_score.cmp(&a.match_score));
}

/// Scores every job concurrently and returns them ranked.
pub async fn rank_jobs(
    llm: &LlmClient,
    resume_skills: &[String],
    mut jobs: Vec<JobPosting>,
) -> Vec<JobPosting> {
    let skills = resume_skills.join(", ");
    let mut tasks = JoinSet::new();

    for (idx, job) in jobs.iter().enumerate() {
        let llm = llm.clone();
        let prompt = build_match_prompt(&skills, job);
        tasks.spawn(async move {
            let score = match llm.complete(&prompt).await {
                Ok(reply) => parse_match_score(&reply).unwrap_or(DEFAULT_MATCH_SCORE),
                Err(e) => {
                    warn!("Match scoring failed for job #{idx}: {e}");
                    DEFAULT_MATCH_SCORE
                }
            };
            (idx, score)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((idx, score)) => jobs[idx].match_score = Some(score),
            Err(e) => warn!("Match scoring task failed: {e}"),
        }
    }

    for job in jobs.iter_mut() {
        job.match_score.get_or_insert(DEFAULT_MATCH_SCORE);
    }
    sort_by_match_score(&mut jobs);
    jobs
}
