// Prompt fragments for the career coach.

pub const COACH_SYSTEM_PROMPT: &str =
    "You are an expert career coach helping with job applications, resume tips, and career advice.";

/// Resume skills appended to the system prompt.
pub const COACH_CONTEXT_SKILLS: usize = 10;

/// Past exchanges replayed before the new message.
pub const COACH_HISTORY_TURNS: usize = 5;
