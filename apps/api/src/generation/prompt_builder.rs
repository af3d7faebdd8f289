//! Builds the system and user prompts for a post.
//!
//! Pure and deterministic: the same selections always produce byte-identical prompts.

use crate::catalog::{fields_for, ContentGoal, Tone, UserInputs};
use crate::generation::prompts::{SYSTEM_INSTRUCTION, USER_PROMPT_TEMPLATE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

pub fn build_prompt(goal: ContentGoal, inputs: &UserInputs, tone: Tone) -> PromptPair {
    let details = render_details(goal, inputs);

    let user = USER_PROMPT_TEMPLATE
        .replace("{goal}", goal.label())
        .replace("{tone}", tone.label())
        .replace("{details}", &details);

    PromptPair {
        system: SYSTEM_INSTRUCTION.to_string(),
        user,
    }
}

/// One `- Key: value` line per input, values verbatim.
/// Catalog fields come first in catalog order, then any extra keys in key order.
fn render_details(goal: ContentGoal, inputs: &UserInputs) -> String {
    let catalog = fields_for(goal);
    let mut keys: Vec<&str> = catalog.iter().map(|f| f.key).collect();
    keys.extend(
        inputs
            .keys()
            .map(String::as_str)
            .filter(|k| !catalog.iter().any(|f| f.key == *k)),
    );

    keys.into_iter()
        .filter_map(|key| {
            let value = inputs.get(key)?;
            Some(format!("- {}: {}", capitalize_first(key), value))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn capitalize_first(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(pairs: &[(&str, &str)]) -> UserInputs {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("painPoint"), "PainPoint");
        assert_eq!(capitalize_first("url"), "Url");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_user_prompt_contains_labels_keys_and_values() {
        let prompt = build_prompt(
            ContentGoal::ArticleShare,
            &inputs(&[
                ("url", "https://x.com/a"),
                ("takeaway", "80% haven't adopted this"),
            ]),
            Tone::Technical,
        );

        assert!(prompt.user.contains("**Goal:** Share an Article/Link"));
        assert!(prompt.user.contains("**Tone:** Technical & Data-Driven"));
        assert!(prompt.user.contains("- Url: https://x.com/a"));
        assert!(prompt.user.contains("- Takeaway: 80% haven't adopted this"));
    }

    #[test]
    fn test_details_follow_catalog_order() {
        let prompt = build_prompt(
            ContentGoal::ProductPromotion,
            &inputs(&[
                ("painPoint", "Manual reports"),
                ("feature", "Real-time tracking"),
                ("product", "Dashboard"),
            ]),
            Tone::Professional,
        );

        let product = prompt.user.find("- Product:").unwrap();
        let feature = prompt.user.find("- Feature:").unwrap();
        let pain = prompt.user.find("- PainPoint:").unwrap();
        assert!(product < feature && feature < pain);
    }

    #[test]
    fn test_empty_optional_value_is_still_listed() {
        let prompt = build_prompt(
            ContentGoal::EngagingQuestion,
            &inputs(&[("topic", "Remote work"), ("stance", "")]),
            Tone::Casual,
        );

        assert!(prompt.user.contains("- Topic: Remote work\n- Stance: "));
    }

    #[test]
    fn test_absent_catalog_field_is_not_listed() {
        let prompt = build_prompt(
            ContentGoal::EngagingQuestion,
            &inputs(&[("topic", "Remote work")]),
            Tone::Casual,
        );

        assert!(!prompt.user.contains("Stance"));
    }

    #[test]
    fn test_values_are_verbatim() {
        let prompt = build_prompt(
            ContentGoal::PersonalStory,
            &inputs(&[
                ("situation", "  leading spaces\nand a newline"),
                ("lesson", "Ask early."),
            ]),
            Tone::Inspirational,
        );

        assert!(prompt
            .user
            .contains("- Situation:   leading spaces\nand a newline"));
    }

    #[test]
    fn test_extra_keys_render_after_catalog_fields() {
        let prompt = build_prompt(
            ContentGoal::Milestone,
            &inputs(&[("achievement", "10k customers"), ("audience", "Founders")]),
            Tone::Inspirational,
        );

        let achievement = prompt.user.find("- Achievement:").unwrap();
        let audience = prompt.user.find("- Audience: Founders").unwrap();
        assert!(achievement < audience);
    }

    #[test]
    fn test_system_instruction_is_fixed() {
        let a = build_prompt(ContentGoal::Milestone, &UserInputs::new(), Tone::Casual);
        let b = build_prompt(
            ContentGoal::IndustryInsight,
            &inputs(&[("topic", "AI")]),
            Tone::Contrarian,
        );
        assert_eq!(a.system, SYSTEM_INSTRUCTION);
        assert_eq!(a.system, b.system);
    }

    #[test]
    fn test_build_is_deterministic() {
        let values = inputs(&[("topic", "AI"), ("opinion", "It empowers people")]);
        let a = build_prompt(ContentGoal::IndustryInsight, &values, Tone::Professional);
        let b = build_prompt(ContentGoal::IndustryInsight, &values, Tone::Professional);
        assert_eq!(a, b);
    }
}
