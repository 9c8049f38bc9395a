//! Prompt templates for the wisdom proxy

use gotham_domain::WisdomKind;

/// System role sent with every wisdom prompt
pub const SYSTEM_ROLE: &str = "You are Batman, the Dark Knight of Gotham. You speak with authority, brevity, and wisdom. Your advice is practical, somewhat dark but ultimately hopeful, focused on discipline, justice, preparation, and personal growth.";

/// System role for the Ask Batman conversation
pub const CONVERSATION_ROLE: &str = r#"You are Batman. Respond with the wisdom, intensity, and grounded philosophy of Bruce Wayne/Batman. Your responses should be:
- Direct and purposeful, no unnecessary words
- Grounded in real-world advice and practical wisdom
- Slightly dark but ultimately hopeful
- Focused on discipline, justice, preparation, and personal growth
- Use occasional references to facing fear, doing what's right, and the importance of training/preparation
- Keep responses between 1-3 sentences, impactful and memorable
- End with practical advice they can implement today"#;

/// Build the user prompt for a wisdom kind
///
/// Structured kinds get the JSON output contract appended.
pub fn build_prompt(kind: WisdomKind) -> String {
    let mut prompt = String::from(instruction(kind));
    match kind {
        WisdomKind::FinanceTips => {
            prompt.push_str("\n\n");
            prompt.push_str(FINANCE_OUTPUT_FORMAT);
        }
        WisdomKind::WisdomQuotes | WisdomKind::HealthProtocols => {
            prompt.push_str("\n\n");
            prompt.push_str(CARD_OUTPUT_FORMAT);
        }
        _ => {}
    }
    prompt
}

fn instruction(kind: WisdomKind) -> &'static str {
    match kind {
        WisdomKind::AskBatman => "Give me a deep, profound, and unique Batman-style life wisdom, lesson, or philosophical insight that helps people improve their lives. Make it sound like Batman is speaking directly to the person. Keep it between 3-5 sentences. Make it impactful, memorable, and actionable.",
        WisdomKind::JusticeChallenge => "Create a new daily justice challenge for today as if Batman is speaking directly to the person. This should be a small, meaningful action someone can take to improve justice, fairness, or integrity in their community or personal life. Keep it practical and meaningful. 1-2 sentences only.",
        WisdomKind::HealthChallenge => "Create a new daily health challenge for today as if Batman is speaking directly to the person. This should be a specific physical exercise or health activity someone can complete today. Make it specific with numbers (like doing 50 push-ups). Keep it challenging but achievable. 1-2 sentences only.",
        WisdomKind::WisdomQuotes => "Generate 4 short wisdom quotes about justice, discipline, courage and integrity as if Batman is speaking. Each quote should be wise, profound and 1-2 sentences only.",
        WisdomKind::HealthProtocols => "Generate 4 short health advice quotes about physical training, rest, mental discipline and nutrition as if Batman is speaking. Each quote should be wise, actionable and 1-2 sentences only.",
        WisdomKind::FinanceTips => "Generate 6 short financial advice quotes (3 for beginners labeled as 'rookie' and 3 for advanced labeled as 'wayne') about emergency fund, spending wisely, investing, diversification, market psychology and passive income as if Batman is speaking. Each quote should be wise, actionable and 1-2 sentences only.",
    }
}

const CARD_OUTPUT_FORMAT: &str = r#"Output format (JSON array only, no additional text):
[
  {
    "title": "short heading",
    "quote": "the quote",
    "category": "short category label",
    "icon": "one emoji"
  }
]

Remember: Return ONLY valid JSON, no markdown code blocks, no explanations."#;

const FINANCE_OUTPUT_FORMAT: &str = r#"Output format (JSON array only, no additional text):
[
  {
    "title": "short heading",
    "quote": "the quote",
    "category": "short category label",
    "icon": "one emoji",
    "track": "rookie" or "wayne"
  }
]

Remember: Return ONLY valid JSON, no markdown code blocks, no explanations."#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_kind_has_distinct_prompt() {
        let prompts: HashSet<String> = WisdomKind::ALL.into_iter().map(build_prompt).collect();
        assert_eq!(prompts.len(), WisdomKind::ALL.len());
    }

    #[test]
    fn test_structured_prompts_ask_for_json() {
        for kind in WisdomKind::ALL {
            let prompt = build_prompt(kind);
            assert_eq!(prompt.contains("JSON array only"), kind.is_structured(), "{}", kind);
        }
    }

    #[test]
    fn test_finance_prompt_mentions_tracks() {
        let prompt = build_prompt(WisdomKind::FinanceTips);
        assert!(prompt.contains("\"track\""));
        assert!(prompt.contains("'rookie'"));
        assert!(!build_prompt(WisdomKind::WisdomQuotes).contains("\"track\""));
    }

    #[test]
    fn test_single_text_prompt_is_bare_instruction() {
        assert_eq!(
            build_prompt(WisdomKind::HealthChallenge),
            instruction(WisdomKind::HealthChallenge)
        );
    }
}
