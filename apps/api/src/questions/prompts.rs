//! Prompt Catalog — instruction templates per interview style, the
//! human-turn template, and the fixed fallback result.
//!
//! Prompt text is pure data: keeping it here isolates wording changes from
//! orchestration logic, and the fallback is always available without any
//! network dependency.

use std::fmt;

use crate::questions::contract::{InterviewQuestion, QuestionGenerationResult};

/// Interview style used to pick a system prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InterviewType {
    #[default]
    General,
    Technical,
    Behavioral,
}

impl InterviewType {
    /// Maps a free-form label to an interview type. Unknown labels fall back
    /// to General — the permissive behavior is intentional, not an error.
    pub fn from_label(label: &str) -> Self {
        match label {
            "technical" => InterviewType::Technical,
            "behavioral" => InterviewType::Behavioral,
            "general" => InterviewType::General,
            _ => InterviewType::General,
        }
    }
}

impl fmt::Display for InterviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InterviewType::General => "general",
            InterviewType::Technical => "technical",
            InterviewType::Behavioral => "behavioral",
        };
        f.write_str(label)
    }
}

/// System prompt for general interviews.
/// Replace `{format_instructions}` before sending.
const GENERAL_SYSTEM_TEMPLATE: &str = r#"You are an expert interviewer. Your goal is to analyze the interview conversation you are given and generate follow-up questions.

Follow these guidelines:

1. CONVERSATION ANALYSIS:
   - Identify points in the candidate's answers that are worth probing deeper
   - Derive concrete questions about the technologies, experience, and projects mentioned
   - Spot vague answers and parts that need further explanation

2. QUESTION GENERATION PRINCIPLES:
   - Prefer concrete, behavior-based questions (use the STAR technique)
   - Include questions that verify technical depth
   - Include situational questions that probe problem-solving ability
   - Include questions that assess collaboration and communication

3. QUESTION CATEGORIES:
   - technical: technical knowledge and hands-on experience
   - experience: past projects and work history
   - situational: problem solving and decision making
   - collaboration: teamwork and communication
   - growth: learning ability and potential

4. OUTPUT FORMAT: you MUST respond with the JSON structure described below.

{format_instructions}

Generate 3 to 5 questions in total, covering a mix of categories."#;

/// System prompt for technical interviews.
/// Replace `{format_instructions}` before sending.
const TECHNICAL_SYSTEM_TEMPLATE: &str = r#"You are a technical interview specialist. Analyze the conversation and generate follow-up questions that verify technical depth.

Focus on these areas:
- Hands-on experience with the mentioned tech stack
- Architecture and system design ability
- Coding and algorithmic problem solving
- Performance optimization experience
- Debugging and troubleshooting experience

{format_instructions}"#;

/// System prompt for behavioral interviews.
/// Replace `{format_instructions}` before sending.
const BEHAVIORAL_SYSTEM_TEMPLATE: &str = r#"You are a behavioral interview specialist. Use the STAR technique to generate questions that assess the candidate's behavior patterns and competencies.

Focus areas:
- Leadership and influence
- Teamwork and collaboration
- Problem solving and decision making
- Conflict management and resolution
- Learning ability and growth mindset

{format_instructions}"#;

/// Human-turn template. Replace `{conversation}` with the serialized transcript.
pub const HUMAN_PROMPT_TEMPLATE: &str = "The following is the transcript of an interview conversation:\n\n```\n{conversation}\n```\n\nAnalyze the conversation above and generate follow-up questions.";

/// Resolves the system prompt for an interview type, with the output format
/// instructions interpolated verbatim.
pub fn system_prompt(interview_type: InterviewType, format_instructions: &str) -> String {
    let template = match interview_type {
        InterviewType::General => GENERAL_SYSTEM_TEMPLATE,
        InterviewType::Technical => TECHNICAL_SYSTEM_TEMPLATE,
        InterviewType::Behavioral => BEHAVIORAL_SYSTEM_TEMPLATE,
    };
    template.replace("{format_instructions}", format_instructions)
}

/// The fixed result served when the LLM path fails.
/// Identical on every call — no randomness, no state.
pub fn fallback_result() -> QuestionGenerationResult {
    QuestionGenerationResult {
        questions: vec![
            InterviewQuestion {
                question: "What was the most challenging part of the project you just mentioned?"
                    .to_string(),
                category: "experience".to_string(),
                difficulty: "medium".to_string(),
                reasoning: "Probes the depth of the candidate's project experience.".to_string(),
            },
            InterviewQuestion {
                question: "Walk me through how you solved that problem, step by step.".to_string(),
                category: "situational".to_string(),
                difficulty: "medium".to_string(),
                reasoning: "Evaluates problem-solving ability and thought process.".to_string(),
            },
            InterviewQuestion {
                question:
                    "Tell me about a time you disagreed with a teammate. How did you resolve it?"
                        .to_string(),
                category: "collaboration".to_string(),
                difficulty: "medium".to_string(),
                reasoning: "Checks collaboration and communication skills.".to_string(),
            },
        ],
        analysis: "The conversation could not be analyzed; default follow-up questions are provided."
            .to_string(),
    }
}
