//! Oracle result types

use gotham_domain::{ContentItem, FinanceTrack};

/// Finance tips split by audience
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinanceTips {
    /// Beginner tips
    pub rookie: Vec<ContentItem>,
    /// Advanced tips
    pub wayne: Vec<ContentItem>,
}

impl FinanceTips {
    /// Tips for one track
    pub fn for_track(&self, track: FinanceTrack) -> &[ContentItem] {
        match track {
            FinanceTrack::Rookie => &self.rookie,
            FinanceTrack::Wayne => &self.wayne,
        }
    }

    /// The hardcoded tips for both tracks
    pub fn fallback() -> Self {
        Self {
            rookie: gotham_domain::fallback::finance_tips(FinanceTrack::Rookie),
            wayne: gotham_domain::fallback::finance_tips(FinanceTrack::Wayne),
        }
    }
}

/// Who said a line in the Ask Batman exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    /// The visitor
    User,
    /// The persona
    Batman,
}

impl Speaker {
    /// Get the role name
    pub fn as_str(&self) -> &'static str {
        match self {
            Speaker::User => "user",
            Speaker::Batman => "batman",
        }
    }
}

/// One line of an exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Who said it
    pub speaker: Speaker,
    /// What was said
    pub content: String,
}

/// A question and its answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    /// The question and the answer, in order
    pub lines: Vec<Line>,
    /// Whether the answer is the canned failure reply
    pub degraded: bool,
}

impl Exchange {
    /// Build an exchange from a question and its answer
    pub fn new(question: impl Into<String>, answer: impl Into<String>, degraded: bool) -> Self {
        Self {
            lines: vec![
                Line {
                    speaker: Speaker::User,
                    content: question.into(),
                },
                Line {
                    speaker: Speaker::Batman,
                    content: answer.into(),
                },
            ],
            degraded,
        }
    }

    /// The answer text
    pub fn answer(&self) -> &str {
        self.lines
            .iter()
            .rev()
            .find(|line| line.speaker == Speaker::Batman)
            .map(|line| line.content.as_str())
            .unwrap_or_default()
    }
}
