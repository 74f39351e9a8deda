//! JSON envelopes for `generateContent`
//!
//! Request: `{"contents":[{"parts":[{"text":"..."}]}]}`
//! Response: `{"candidates":[{"content":{"parts":[{"text":"..."}]}}]}`

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<RequestContent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestContent {
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestPart {
    pub text: String,
}

impl GenerateRequest {
    /// Single-turn request carrying one user utterance
    pub fn single(text: impl Into<String>) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: text.into() }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Reply text decoded from a response envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub text: String,
}

impl GenerateResponse {
    /// `candidates[0].content.parts[0].text`, if every step is present
    pub fn into_reply(self) -> Option<ApiResponse> {
        let candidate = self.candidates?.into_iter().next()?;
        let part = candidate.content?.parts?.into_iter().next()?;
        part.text.map(|text| ApiResponse { text })
    }
}
