//! Data models for the translation service.
//!
//! This module contains the type definitions for request/response bodies used by:
//! - The inbound translation API (`api`)
//! - The Google Cloud Translation v3 REST API (`google`)
//! - The OpenAI Chat Completions API (`openai`)

pub mod api;
pub mod google;
pub mod openai;

pub use api::{TranslateRequest, TranslateResponse, ValidatedRequest};
pub use google::{TranslateTextRequest, TranslateTextResponse, Translation};
pub use openai::{
    AssistantMessage, ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
    ChatUsage,
};
