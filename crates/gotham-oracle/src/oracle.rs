//! Core Oracle implementation

use crate::config::OracleConfig;
use crate::error::OracleError;
use crate::parser::{clean_text, parse_cards, parse_finance_tips};
use crate::prompt::{build_prompt, CONVERSATION_ROLE, SYSTEM_ROLE};
use crate::types::{Exchange, FinanceTips};
use gotham_domain::fallback::ASK_BATMAN_FAILURE;
use gotham_domain::{ContentItem, WisdomKind};
use gotham_llm::{ChatRequest, CompletionProvider};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The Oracle turns wisdom kinds into completion calls
#[derive(Clone)]
pub struct Oracle {
    provider: Arc<dyn CompletionProvider>,
    config: OracleConfig,
}

impl Oracle {
    /// Create a new Oracle
    pub fn new(provider: Arc<dyn CompletionProvider>, config: OracleConfig) -> Self {
        Self { provider, config }
    }

    /// The request sent for a wisdom kind
    pub fn request_for(&self, kind: WisdomKind) -> ChatRequest {
        ChatRequest::new(SYSTEM_ROLE, build_prompt(kind)).with_temperature(self.config.temperature)
    }

    /// Proxy one wisdom kind and return the completion verbatim
    pub async fn wisdom(&self, kind: WisdomKind) -> Result<String, OracleError> {
        debug!("Requesting '{}' from {}", kind, self.provider.name());
        let text = self.provider.complete(&self.request_for(kind)).await?;
        Ok(text)
    }

    /// Single-text wisdom, trimmed and unquoted
    pub async fn text(&self, kind: WisdomKind) -> Result<String, OracleError> {
        let response = self.wisdom(kind).await?;
        clean_text(&response)
    }

    /// Cards for a structured kind, validated against its item rules
    pub async fn cards(&self, kind: WisdomKind) -> Result<Vec<ContentItem>, OracleError> {
        let response = self.wisdom(kind).await?;
        parse_cards(kind, &response)
    }

    /// Finance tips for both tracks
    pub async fn finance_tips(&self) -> Result<FinanceTips, OracleError> {
        let response = self.wisdom(WisdomKind::FinanceTips).await?;
        parse_finance_tips(&response)
    }

    /// Answer a visitor's question in persona
    ///
    /// Provider failures yield the canned reply. Only an empty or oversized
    /// question is an error.
    pub async fn converse(&self, question: &str) -> Result<Exchange, OracleError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(OracleError::InvalidQuestion(
                "question must not be empty".to_string(),
            ));
        }
        if question.chars().count() > self.config.max_question_length {
            return Err(OracleError::InvalidQuestion(format!(
                "question exceeds {} characters",
                self.config.max_question_length
            )));
        }

        let request = ChatRequest::new(CONVERSATION_ROLE, question)
            .with_temperature(self.config.conversation_temperature)
            .with_max_tokens(self.config.conversation_max_tokens);

        match self.provider.complete(&request).await {
            Ok(answer) if !answer.trim().is_empty() => {
                info!("Answered question of {} chars", question.len());
                Ok(Exchange::new(question, answer.trim(), false))
            }
            Ok(_) => {
                warn!("Empty answer from {}", self.provider.name());
                Ok(Exchange::new(question, ASK_BATMAN_FAILURE, true))
            }
            Err(e) => {
                warn!("Conversation failed: {}", e);
                Ok(Exchange::new(question, ASK_BATMAN_FAILURE, true))
            }
        }
    }
}
