//! Configuration for the Oracle

use serde::{Deserialize, Serialize};

/// Sampling settings for wisdom and conversation calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Temperature for wisdom prompts
    pub temperature: f32,

    /// Temperature for Ask Batman answers
    pub conversation_temperature: f32,

    /// Completion cap for Ask Batman answers
    pub conversation_max_tokens: u32,

    /// Longest question accepted (characters)
    pub max_question_length: usize,
}

impl OracleConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err("temperature must be between 0.0 and 2.0".to_string());
        }
        if !(0.0..=2.0).contains(&self.conversation_temperature) {
            return Err("conversation_temperature must be between 0.0 and 2.0".to_string());
        }
        if self.conversation_max_tokens == 0 {
            return Err("conversation_max_tokens must be greater than 0".to_string());
        }
        if self.max_question_length == 0 {
            return Err("max_question_length must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            conversation_temperature: 0.8,
            conversation_max_tokens: 200,
            max_question_length: 2_000,
        }
    }
}
