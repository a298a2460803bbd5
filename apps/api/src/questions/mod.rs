// Follow-up question generation.
// Implements: prompt selection by interview type, transcript formatting,
// LLM invocation, contract parsing, and the deterministic fallback path.
// All LLM calls go through llm_client — no direct OpenAI calls here.

pub mod contract;
pub mod generator;
pub mod handlers;
pub mod prompts;
