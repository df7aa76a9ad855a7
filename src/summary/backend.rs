//! Summarization backend for OpenAI-compatible chat completion APIs.
//!
//! The `Summarizer` trait keeps the pipeline decoupled from the actual
//! HTTP call so it can be driven with stub implementations in tests.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default API base for the summarization service.
const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// System prompt sent with each day's transcript text.
const SUMMARY_PROMPT: &str = "You summarize one day of a group chat transcript. \
Each message starts with a bracketed timestamp. Write a concise prose summary \
of the day's conversation: the topics discussed, decisions made, and anything \
people agreed to do. Do not quote timestamps back.";

/// Result type for summarizer operations.
pub type SummarizeResult<T> = Result<T, SummarizeError>;

/// Errors from the summarization service.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("No API key found. Set OPENAI_API_KEY in the environment.")]
    MissingApiKey,

    #[error("Summarization request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Summarization service returned an error: {0}")]
    Api(String),

    #[error("Summarization service returned an empty response")]
    EmptyResponse,
}

/// Pass-through options for a summarization call.
#[derive(Debug, Clone)]
pub struct SummarizeOptions {
    /// Model identifier, e.g. `gpt-4o-mini`.
    pub model: String,
    /// Sampling temperature; forwarded without validation.
    pub temperature: f32,
}

/// Capability interface for the external summarization service.
///
/// One method: text in, summary text out. The pipeline never sees the
/// transport behind it.
pub trait Summarizer {
    fn summarize(&self, text: &str, options: &SummarizeOptions) -> SummarizeResult<String>;
}

/// Summarizer backed by an OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiSummarizer {
    client: reqwest::blocking::Client,
    api_base: String,
    api_key: String,
}

impl OpenAiSummarizer {
    /// Create a summarizer using `OPENAI_API_KEY` from the environment.
    ///
    /// `api_base` overrides the endpoint for OpenAI-compatible services;
    /// `None` uses the default API base.
    pub fn from_env(api_base: Option<&str>) -> SummarizeResult<Self> {
        let api_key =
            std::env::var("OPENAI_API_KEY").map_err(|_| SummarizeError::MissingApiKey)?;

        Ok(Self {
            client: reqwest::blocking::Client::new(),
            api_base: api_base
                .unwrap_or(DEFAULT_API_BASE)
                .trim_end_matches('/')
                .to_string(),
            api_key,
        })
    }
}

impl Summarizer for OpenAiSummarizer {
    fn summarize(&self, text: &str, options: &SummarizeOptions) -> SummarizeResult<String> {
        let request = ChatRequest {
            model: &options.model,
            temperature: options.temperature,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SUMMARY_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<ApiErrorResponse>()
                .map(|body| body.error.message)
                .unwrap_or_else(|_| format!("HTTP {status}"));
            return Err(SummarizeError::Api(message));
        }

        let body: ChatResponse = response.json()?;
        let summary = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();
        let summary = summary.trim();

        if summary.is_empty() {
            return Err(SummarizeError::EmptyResponse);
        }
        Ok(summary.to_string())
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}
