//! Wire types for one interview conversation.

use serde::{Deserialize, Serialize};

/// Who said a line in the interview. Closed set — any other value is a
/// schema error at the HTTP boundary and never reaches the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Candidate,
    Interviewer,
}

impl Speaker {
    /// Fixed display label used when rendering a transcript for the LLM.
    pub fn display_label(self) -> &'static str {
        match self {
            Speaker::Interviewer => "Interviewer",
            Speaker::Candidate => "Candidate",
        }
    }
}

/// One line of the interview, in speaking order. Immutable once received;
/// lives only for the duration of the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub speaker: Speaker,
    pub content: String,
}
