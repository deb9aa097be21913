// Résumé review prompt templates.

/// Résumé text beyond this many characters is not sent to the model.
pub const MAX_RESUME_CHARS: usize = 3000;

pub const REVIEWER_SYSTEM: &str = "You are an expert resume reviewer and career counselor. \
    Provide helpful, constructive feedback to improve resumes.";

pub const FEEDBACK_PROMPT_TEMPLATE: &str = "Please analyze this resume and provide constructive feedback. Focus on:
1. Structure and formatting
2. Content quality and relevance
3. Missing sections or information
4. Strengths and areas for improvement
5. Specific actionable recommendations

Resume content:
{resume_text}

Provide feedback in a clear, helpful format with bullet points.";

pub fn build_feedback_prompt(resume_text: &str) -> String {
    FEEDBACK_PROMPT_TEMPLATE.replace("{resume_text}", truncate_chars(resume_text, MAX_RESUME_CHARS))
}

/// Cuts `text` to at most `max` characters without splitting a UTF-8 sequence.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
