// LLM prompt templates for resume and transcript intake.

/// Skill extraction prompt. Replace `{resume_text}` before sending.
pub const SKILLS_PROMPT_TEMPLATE: &str = r#"Extract the key technical and professional skills from this resume.
Return ONLY a JSON object with this exact format:
{
  "skills": ["Python", "SQL", "React", "Communication", ...]
}

Resume:
{resume_text}"#;

/// Transcript extraction prompt. Replace `{transcript_text}` before sending.
pub const TRANSCRIPT_PROMPT_TEMPLATE: &str = r#"Extract relevant academic information from this transcript.
Return ONLY a JSON object:
{
  "gpa": 3.75,
  "relevant_courses": ["Data Structures", "Machine Learning", "Databases"],
  "honors": ["Dean's List", "Magna Cum Laude"]
}
Use null for "gpa" if the transcript does not state one.

Transcript:
{transcript_text}"#;

/// Characters of resume text sent for skill extraction.
pub const RESUME_EXCERPT_CHARS: usize = 2000;
/// Characters of transcript text sent for extraction.
pub const TRANSCRIPT_EXCERPT_CHARS: usize = 1500;
