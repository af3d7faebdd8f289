//! Content goals, tones, and the input fields each goal asks for.
//!
//! Everything here is static, read-only data. The set of goals and tones is closed,
//! so lookups are plain `match` tables rather than trait objects.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// User-supplied values keyed by `InputFieldSpec::key`.
pub type UserInputs = BTreeMap<String, String>;

// ────────────────────────────────────────────────────────────────────────────
// Goals and tones
// ────────────────────────────────────────────────────────────────────────────

/// What the post is meant to achieve. Serialized as its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentGoal {
    #[serde(rename = "Share a Personal Story/Lesson", alias = "PersonalStory")]
    PersonalStory,
    #[serde(rename = "Provide an Industry Insight", alias = "IndustryInsight")]
    IndustryInsight,
    #[serde(rename = "Ask an Engaging Question", alias = "EngagingQuestion")]
    EngagingQuestion,
    #[serde(rename = "Promote a Product/Service", alias = "ProductPromotion")]
    ProductPromotion,
    #[serde(rename = "Share an Article/Link", alias = "ArticleShare")]
    ArticleShare,
    #[serde(rename = "Celebrate a Win/Milestone", alias = "Milestone")]
    Milestone,
}

/// Goals in the order the goal picker shows them.
pub const GOALS: [ContentGoal; 6] = [
    ContentGoal::PersonalStory,
    ContentGoal::IndustryInsight,
    ContentGoal::ArticleShare,
    ContentGoal::ProductPromotion,
    ContentGoal::EngagingQuestion,
    ContentGoal::Milestone,
];

impl ContentGoal {
    pub fn label(self) -> &'static str {
        match self {
            ContentGoal::PersonalStory => "Share a Personal Story/Lesson",
            ContentGoal::IndustryInsight => "Provide an Industry Insight",
            ContentGoal::EngagingQuestion => "Ask an Engaging Question",
            ContentGoal::ProductPromotion => "Promote a Product/Service",
            ContentGoal::ArticleShare => "Share an Article/Link",
            ContentGoal::Milestone => "Celebrate a Win/Milestone",
        }
    }

    fn variant_name(self) -> &'static str {
        match self {
            ContentGoal::PersonalStory => "PersonalStory",
            ContentGoal::IndustryInsight => "IndustryInsight",
            ContentGoal::EngagingQuestion => "EngagingQuestion",
            ContentGoal::ProductPromotion => "ProductPromotion",
            ContentGoal::ArticleShare => "ArticleShare",
            ContentGoal::Milestone => "Milestone",
        }
    }
}

impl fmt::Display for ContentGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContentGoal {
    type Err = UnknownCatalogEntry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GOALS
            .iter()
            .copied()
            .find(|g| g.label() == s || g.variant_name() == s)
            .ok_or_else(|| UnknownCatalogEntry(s.to_string()))
    }
}

/// Voice the post should be written in. Serialized as its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    #[serde(rename = "Professional & Authoritative", alias = "Professional")]
    Professional,
    Inspirational,
    #[serde(rename = "Casual & Conversational", alias = "Casual")]
    Casual,
    #[serde(rename = "Contrarian / Thought-Provoking", alias = "Contrarian")]
    Contrarian,
    #[serde(rename = "Technical & Data-Driven", alias = "Technical")]
    Technical,
}

/// Tones in the order the tone picker shows them.
pub const TONES: [Tone; 5] = [
    Tone::Professional,
    Tone::Inspirational,
    Tone::Casual,
    Tone::Contrarian,
    Tone::Technical,
];

impl Tone {
    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "Professional & Authoritative",
            Tone::Inspirational => "Inspirational",
            Tone::Casual => "Casual & Conversational",
            Tone::Contrarian => "Contrarian / Thought-Provoking",
            Tone::Technical => "Technical & Data-Driven",
        }
    }

    fn variant_name(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Inspirational => "Inspirational",
            Tone::Casual => "Casual",
            Tone::Contrarian => "Contrarian",
            Tone::Technical => "Technical",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tone {
    type Err = UnknownCatalogEntry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TONES
            .iter()
            .copied()
            .find(|t| t.label() == s || t.variant_name() == s)
            .ok_or_else(|| UnknownCatalogEntry(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown catalog entry: {0}")]
pub struct UnknownCatalogEntry(pub String);

// ────────────────────────────────────────────────────────────────────────────
// Input fields
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Single line.
    ShortText,
    /// Multi-line.
    LongText,
}

/// One input the user fills in for a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InputFieldSpec {
    pub label: &'static str,
    pub placeholder: &'static str,
    /// Unique within the goal; used as the `UserInputs` key and in the prompt.
    pub key: &'static str,
    pub kind: FieldKind,
    /// Optional fields never block the inputs step.
    pub required: bool,
}

const fn field(
    label: &'static str,
    placeholder: &'static str,
    key: &'static str,
    kind: FieldKind,
) -> InputFieldSpec {
    InputFieldSpec {
        label,
        placeholder,
        key,
        kind,
        required: true,
    }
}

const fn optional(spec: InputFieldSpec) -> InputFieldSpec {
    InputFieldSpec {
        required: false,
        ..spec
    }
}

const PERSONAL_STORY_FIELDS: &[InputFieldSpec] = &[
    field(
        "The Situation",
        "e.g., I had a major project fail last year.",
        "situation",
        FieldKind::LongText,
    ),
    field(
        "The Lesson Learned",
        "e.g., I learned the importance of asking for help early.",
        "lesson",
        FieldKind::LongText,
    ),
];

const INDUSTRY_INSIGHT_FIELDS: &[InputFieldSpec] = &[
    field(
        "Topic",
        "e.g., The future of AI in marketing.",
        "topic",
        FieldKind::ShortText,
    ),
    field(
        "Your Core Opinion/Insight",
        "e.g., AI won't replace marketers, it will empower them.",
        "opinion",
        FieldKind::LongText,
    ),
];

const ARTICLE_SHARE_FIELDS: &[InputFieldSpec] = &[
    field(
        "Article URL",
        "https://example.com/article",
        "url",
        FieldKind::ShortText,
    ),
    field(
        "Your Key Takeaway or Opinion",
        "e.g., The most surprising statistic was that 80% of companies haven't adopted this yet.",
        "takeaway",
        FieldKind::LongText,
    ),
];

const PRODUCT_PROMOTION_FIELDS: &[InputFieldSpec] = &[
    field(
        "Product/Service Name",
        "e.g., Our new analytics dashboard.",
        "product",
        FieldKind::ShortText,
    ),
    field(
        "Key Feature/Benefit",
        "e.g., It helps users track real-time engagement.",
        "feature",
        FieldKind::ShortText,
    ),
    field(
        "Target Audience Pain Point",
        "e.g., Wasting hours manually compiling reports.",
        "painPoint",
        FieldKind::ShortText,
    ),
];

const ENGAGING_QUESTION_FIELDS: &[InputFieldSpec] = &[
    field(
        "Topic of the Question",
        "e.g., Remote work productivity.",
        "topic",
        FieldKind::ShortText,
    ),
    optional(field(
        "Your Brief Stance (optional)",
        "e.g., I believe hybrid models are the future, but I'm curious what others think.",
        "stance",
        FieldKind::LongText,
    )),
];

const MILESTONE_FIELDS: &[InputFieldSpec] = &[
    field(
        "The Achievement",
        "e.g., We just reached 10,000 customers!",
        "achievement",
        FieldKind::ShortText,
    ),
    optional(field(
        "Who to Thank (optional)",
        "e.g., Our amazing team and loyal customers.",
        "thanks",
        FieldKind::ShortText,
    )),
];

/// Returns the ordered input fields for a goal.
pub fn fields_for(goal: ContentGoal) -> &'static [InputFieldSpec] {
    match goal {
        ContentGoal::PersonalStory => PERSONAL_STORY_FIELDS,
        ContentGoal::IndustryInsight => INDUSTRY_INSIGHT_FIELDS,
        ContentGoal::EngagingQuestion => ENGAGING_QUESTION_FIELDS,
        ContentGoal::ProductPromotion => PRODUCT_PROMOTION_FIELDS,
        ContentGoal::ArticleShare => ARTICLE_SHARE_FIELDS,
        ContentGoal::Milestone => MILESTONE_FIELDS,
    }
}

/// Looks up a single field by key within a goal.
pub fn field_spec(goal: ContentGoal, key: &str) -> Option<&'static InputFieldSpec> {
    fields_for(goal).iter().find(|f| f.key == key)
}

pub fn required_fields(goal: ContentGoal) -> impl Iterator<Item = &'static InputFieldSpec> {
    fields_for(goal).iter().filter(|f| f.required)
}

/// Required fields whose value is absent or empty, in catalog order.
pub fn missing_required(goal: ContentGoal, inputs: &UserInputs) -> Vec<&'static InputFieldSpec> {
    required_fields(goal)
        .filter(|f| is_blank(inputs.get(f.key).map(String::as_str)))
        .collect()
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}
