//! Structured Output Contract — the exact field shape the LLM must return,
//! the instruction text that communicates that shape, and the parser that
//! turns raw completion text into validated data.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Schema description embedded into every system prompt so the model knows
/// what to return. Kept in lockstep with the structs below.
pub const FORMAT_INSTRUCTIONS: &str = r#"Return a JSON object with this EXACT schema (no extra fields):
{
  "questions": [
    {
      "question": "the follow-up question to ask next",
      "category": "one of: technical, experience, situational, collaboration, growth",
      "difficulty": "one of: easy, medium, hard",
      "reasoning": "why this question is worth asking"
    }
  ],
  "analysis": "a short analysis of the conversation so far"
}
Do NOT include any text outside the JSON object.
Do NOT use markdown code fences."#;

/// A single generated follow-up question.
///
/// Every field is required — a response missing any of them is rejected.
/// Empty strings are accepted; absence is not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    /// Recommended: technical, experience, situational, collaboration, growth.
    pub category: String,
    /// Recommended: easy, medium, hard.
    pub difficulty: String,
    pub reasoning: String,
}

/// The unit of output for one generation call. Created fresh per call,
/// never mutated after construction, discarded once the response is sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionGenerationResult {
    /// 3–5 questions by prompt instruction — not structurally enforced.
    pub questions: Vec<InterviewQuestion>,
    pub analysis: String,
}

/// The LLM's text was not valid JSON or did not match the contract.
#[derive(Debug, Error)]
#[error("LLM response does not match the question contract: {0}")]
pub struct ParseError(#[from] serde_json::Error);

/// Parses raw completion text against the contract.
pub fn parse_result(raw: &str) -> Result<QuestionGenerationResult, ParseError> {
    Ok(serde_json::from_str(strip_json_fences(raw))?)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_RESULT: &str = r#"{
        "questions": [
            {
                "question": "How did you shard the database?",
                "category": "technical",
                "difficulty": "hard",
                "reasoning": "Probes depth on the scaling story."
            }
        ],
        "analysis": "The candidate described a scaling project."
    }"#;

    #[test]
    fn test_parse_valid_result() {
        let result = parse_result(VALID_RESULT).unwrap();
        assert_eq!(result.questions.len(), 1);
        assert_eq!(result.questions[0].category, "technical");
        assert_eq!(result.analysis, "The candidate described a scaling project.");
    }

    #[test]
    fn test_parse_accepts_fenced_json() {
        let fenced = format!("```json\n{VALID_RESULT}\n```");
        let result = parse_result(&fenced).unwrap();
        assert_eq!(result.questions.len(), 1);
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let result = parse_result("I am sorry, I cannot help with that.");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_missing_reasoning() {
        let json = r#"{
            "questions": [
                {"question": "Why?", "category": "growth", "difficulty": "easy"}
            ],
            "analysis": "ok"
        }"#;
        assert!(
            parse_result(json).is_err(),
            "a question without reasoning must fail parsing"
        );
    }

    #[test]
    fn test_parse_rejects_missing_analysis() {
        let json = r#"{
            "questions": [
                {"question": "Why?", "category": "growth", "difficulty": "easy", "reasoning": "r"}
            ]
        }"#;
        assert!(
            parse_result(json).is_err(),
            "a result without analysis must fail parsing"
        );
    }

    #[test]
    fn test_parse_accepts_empty_narrative_strings() {
        let json = r#"{
            "questions": [
                {"question": "Why?", "category": "growth", "difficulty": "easy", "reasoning": ""}
            ],
            "analysis": ""
        }"#;
        let result = parse_result(json).unwrap();
        assert_eq!(result.questions[0].reasoning, "");
        assert_eq!(result.analysis, "");
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_format_instructions_name_all_contract_fields() {
        for field in ["questions", "question", "category", "difficulty", "reasoning", "analysis"] {
            assert!(
                FORMAT_INSTRUCTIONS.contains(field),
                "format instructions must mention `{field}`"
            );
        }
    }
}
