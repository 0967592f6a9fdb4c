// Prompt assembly for a single health question.

use crate::completion::ChatMessage;

const PERSONA: &str = "You are MediBot, a friendly and cautious AI health assistant. \
Your role is to provide general health information while being \
extremely careful not to give medical advice. Follow these rules:";

const RULES: &[&str] = &[
    "Be informative but never diagnostic",
    "Only share publicly available health facts",
    "Always suggest consulting a doctor for personal concerns",
    "Use simple, clear language suitable for non-experts",
    "If unsure, say you don't know",
    "Keep responses under 150 words unless more detail is specifically requested",
];

lazy_static::lazy_static! {
    /// Persona line followed by the numbered rules, one per line.
    pub static ref SYSTEM_PROMPT: String = {
        let rules = RULES
            .iter()
            .enumerate()
            .map(|(i, rule)| format!("{}. {}", i + 1, rule))
            .collect::<Vec<_>>()
            .join("\n");
        format!("{}\n{}", PERSONA, rules)
    };
}

/// Build the two-message exchange sent for `query`: the fixed system
/// instruction, then the query verbatim. Empty queries are accepted; the
/// session loop filters them before getting here.
pub fn build_messages(query: &str) -> [ChatMessage; 2] {
    [
        ChatMessage::system(SYSTEM_PROMPT.as_str()),
        ChatMessage::user(query),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::Role;

    #[test]
    fn test_build_messages_roles_and_order() {
        let [system, user] = build_messages("What causes a sore throat?");
        assert_eq!(system.role, Role::System);
        assert_eq!(user.role, Role::User);
        assert_eq!(user.content, "What causes a sore throat?");
    }

    #[test]
    fn test_query_passed_verbatim() {
        let query = "  **weird** input\twith spacing  ";
        let [_, user] = build_messages(query);
        assert_eq!(user.content, query);

        let [_, empty] = build_messages("");
        assert_eq!(empty.content, "");
    }

    #[test]
    fn test_system_prompt_lists_numbered_rules() {
        let prompt = SYSTEM_PROMPT.as_str();
        assert!(prompt.starts_with("You are MediBot"));
        assert!(prompt.contains("\n1. Be informative but never diagnostic"));
        assert!(prompt.contains("\n3. Always suggest consulting a doctor for personal concerns"));
        assert!(prompt.ends_with(
            "6. Keep responses under 150 words unless more detail is specifically requested"
        ));
        assert_eq!(prompt.lines().count(), 1 + RULES.len());
    }
}
