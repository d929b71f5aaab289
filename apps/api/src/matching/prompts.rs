// LLM prompt templates for job comparison and cover letters.

/// Comparison prompt.
/// Vars: {resume_skills}, {transcript_context}, {resume_text}, {job_description}
pub const COMPARE_PROMPT_TEMPLATE: &str = r#"Compare this resume with the job description.

Return ONLY a JSON object with this EXACT format:
{
  "fit_score": 75,
  "missing_skills": ["Tableau", "Statistics"],
  "matching_skills": ["Python", "SQL"],
  "recommendation": "You're a good fit but should learn Tableau and brush up on Statistics."
}

List missing_skills from most to least important for this role.

Resume Skills: {resume_skills}{transcript_context}

Full Resume:
{resume_text}

Job Description:
{job_description}"#;

/// Cover letter prompt.
/// Vars: {company}, {transcript_context}, {resume_text}, {job_description}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a professional, one-page cover letter for this job.

Guidelines:
- Be specific and mention concrete achievements from the resume
- Show enthusiasm for {company}
- Keep it under 300 words
- Don't use placeholders{transcript_context}

Resume:
{resume_text}

Job Description:
{job_description}"#;

pub const COMPARE_RESUME_CHARS: usize = 1000;
pub const COVER_LETTER_RESUME_CHARS: usize = 1500;
pub const JOB_DESCRIPTION_CHARS: usize = 1000;
/// Transcript courses named in a cover letter prompt.
pub const COVER_LETTER_COURSES: usize = 3;
