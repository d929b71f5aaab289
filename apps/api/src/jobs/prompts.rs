// Prompt templates for job match scoring.

/// Characters of the job description shown to the scorer.
pub const JOB_SNIPPET_CHARS: usize = 200;

/// Number of resume skills used as search keywords when none are given.
pub const DEFAULT_KEYWORD_SKILLS: usize = 3;

/// Variables: {resume_skills}, {job_title}, {job_snippet}
pub const MATCH_SCORE_PROMPT_TEMPLATE: &str = r#"Rate how well this resume matches this job (0-100).
Consider skills, experience, and job requirements.
Return ONLY a number between 0-100.

Resume skills: {resume_skills}
Job: {job_title} - {job_snippet}"#;
