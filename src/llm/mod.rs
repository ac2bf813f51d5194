//! Completion service integration.
//!
//! This module covers everything between the user's question and the raw SQL
//! string: prompt construction and the chat-completion client.

pub mod client;
pub mod prompt;

pub use client::{
    ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChoiceMessage, CompletionService,
    OpenAiClient, SYSTEM_ROLE,
};
pub use prompt::{build_prompt, collapse_line_breaks, strip_line_breaks};
