// Recruiting assistant. Replies are canned texts chosen by intent; there is no model
// behind it, only a simulated think time.

pub mod handlers;
pub mod intent;

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::assistant::intent::{classify, Intent};
use crate::errors::AppError;

pub const GREETING: &str = "Hello! I'm your AI assistant. I can help you with writing emails, generating interview questions, creating job descriptions, and more. How can I assist you today?";

/// Ready-made prompts offered next to the chat input.
pub const SUGGESTED_PROMPTS: [&str; 4] = [
    "Write an email template for inviting a candidate to an interview.",
    "Generate interview questions for a frontend developer position.",
    "Create a job description for a project manager role.",
    "Write a candidate feedback summary template.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(content: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            sender,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Exchange {
    pub message: ChatMessage,
    pub reply: ChatMessage,
    pub intent: Intent,
}

#[derive(Debug, Clone)]
pub struct Assistant {
    delay: Duration,
}

impl Assistant {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn greeting(&self) -> ChatMessage {
        ChatMessage::new(GREETING, Sender::Assistant)
    }

    /// Answers one user message after the configured delay.
    pub async fn respond(&self, input: &str) -> Result<Exchange, AppError> {
        if input.trim().is_empty() {
            return Err(AppError::Validation("message cannot be empty".to_string()));
        }

        let message = ChatMessage::new(input, Sender::User);
        let intent = classify(input);
        debug!("Assistant intent: {intent:?}");

        tokio::time::sleep(self.delay).await;

        Ok(Exchange {
            message,
            reply: ChatMessage::new(intent.reply(), Sender::Assistant),
            intent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_respond_waits_for_delay() {
        let assistant = Assistant::new(Duration::from_millis(1500));
        let started = tokio::time::Instant::now();

        let exchange = assistant
            .respond("Can you draft an email to the client?")
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert_eq!(exchange.intent, Intent::EmailTemplate);
        assert_eq!(exchange.message.sender, Sender::User);
        assert_eq!(exchange.reply.sender, Sender::Assistant);
        assert!(exchange.reply.content.starts_with("Dear [Candidate Name]"));
    }

    #[tokio::test]
    async fn test_blank_message_rejected() {
        let assistant = Assistant::new(Duration::ZERO);
        let err = assistant.respond("   \n").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_suggested_prompts_resolve_to_distinct_intents() {
        let assistant = Assistant::new(Duration::ZERO);
        let mut intents = Vec::new();
        for prompt in SUGGESTED_PROMPTS {
            intents.push(assistant.respond(prompt).await.unwrap().intent);
        }
        assert_eq!(
            intents,
            vec![
                Intent::EmailTemplate,
                Intent::InterviewQuestions,
                Intent::JobDescription,
                Intent::FeedbackSummary,
            ]
        );
    }

    #[test]
    fn test_greeting() {
        let greeting = Assistant::new(Duration::ZERO).greeting();
        assert_eq!(greeting.sender, Sender::Assistant);
        assert_eq!(greeting.content, GREETING);
    }
}
