// Prompt constants for the optimization pass.

/// System prompt — enforces truthfulness and same-shaped JSON output.
pub const OPTIMIZE_SYSTEM: &str =
    "You are a professional resume optimization expert. \
    Optimize the provided resume content to better match the job description \
    while maintaining truthfulness. \
    You MUST respond with valid JSON only — an object with the same structure \
    as the input resume data, with optimized content. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT fabricate experience or skills.";

/// Optimization prompt template. Replace `{job_description}` and
/// `{resume_json}` before sending.
pub const OPTIMIZE_PROMPT_TEMPLATE: &str = r#"Rewrite the resume below so it better targets the job description. Keep the JSON structure identical to the input and every claim truthful.

Focus on:
1. Tailoring keywords to match the job requirements
2. Emphasizing the most relevant experience
3. Improving impact statements with concrete metrics
4. Aligning the skills section with the role

Keep every `id` field unchanged so entries keep their identity.

JOB DESCRIPTION:
{job_description}

CURRENT RESUME DATA:
{resume_json}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_placeholders_substitute_cleanly() {
        let prompt = OPTIMIZE_PROMPT_TEMPLATE
            .replace("{job_description}", "Senior Rust Engineer")
            .replace("{resume_json}", r#"{"summary": ""}"#);
        assert!(prompt.contains("Senior Rust Engineer"));
        assert!(prompt.contains(r#"{"summary": ""}"#));
        assert!(!prompt.contains("{job_description}"));
        assert!(!prompt.contains("{resume_json}"));
    }

    #[test]
    fn test_system_prompt_pins_json_only_output() {
        assert!(OPTIMIZE_SYSTEM.contains("valid JSON only"));
        assert!(OPTIMIZE_SYSTEM.contains("Do NOT fabricate"));
    }
}
