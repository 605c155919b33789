//! Resume analysis prompt.

const PROMPT_PREAMBLE: &str = "You are an experienced technical recruiter reviewing a candidate's resume. \
Analyze the resume text below and respond in Markdown using exactly these sections:

## Strengths
Summarize the candidate's strongest skills, achievements and experience.

## Areas for Improvement
Point out gaps, weak spots or unclear parts of the resume and how to address them.

## Overall Suitability
Give a short overall assessment of the candidate and the kinds of roles they fit.

Resume Text:
\"\"\"
";

const PROMPT_CLOSING: &str = "
\"\"\"

Base your analysis only on the information present in the resume text above. \
Do not invent employers, dates, skills or qualifications.";

/// Embed `text` verbatim in the analysis template.
pub fn build_prompt(text: &str) -> String {
    let mut prompt =
        String::with_capacity(PROMPT_PREAMBLE.len() + text.len() + PROMPT_CLOSING.len());
    prompt.push_str(PROMPT_PREAMBLE);
    prompt.push_str(text);
    prompt.push_str(PROMPT_CLOSING);
    prompt
}
