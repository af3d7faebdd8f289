//! Turns a post request into one call to the text provider.
//!
//! Flow: validate request → build prompt pair → one provider call → trim → normalize errors.
//!
//! Provider failures are logged here with their cause and surfaced to callers only as a
//! generic `GenerationError::Provider`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use crate::catalog::{missing_required, ContentGoal, Tone, UserInputs};
use crate::generation::prompt_builder::build_prompt;
use crate::llm_client::{ProviderRequest, TextProvider, MODEL, TEMPERATURE, TOP_P};

pub const MISSING_PARAMETERS_MESSAGE: &str = "Missing required parameters.";
pub const EMPTY_RESPONSE_MESSAGE: &str =
    "The AI returned an empty response. Please try again with a more detailed prompt.";
pub const PROVIDER_FAILURE_MESSAGE: &str =
    "Failed to generate LinkedIn post. Please check your inputs and try again.";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Snapshot of the user's selections. Also the `POST /api/generate` body.
///
/// Every field is optional so that an absent field is a validation failure
/// rather than a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub goal: Option<ContentGoal>,
    pub inputs: Option<UserInputs>,
    pub tone: Option<Tone>,
}

impl GenerationRequest {
    pub fn new(goal: ContentGoal, inputs: UserInputs, tone: Tone) -> Self {
        Self {
            goal: Some(goal),
            inputs: Some(inputs),
            tone: Some(tone),
        }
    }
}

/// Model and sampling parameters applied to every request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: MODEL.to_string(),
            temperature: TEMPERATURE,
            top_p: TOP_P,
        }
    }
}

/// User-facing generation failures. `Display` is safe to show to end users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("{0}")]
    Validation(String),

    #[error("{}", EMPTY_RESPONSE_MESSAGE)]
    EmptyResponse,

    #[error("{}", PROVIDER_FAILURE_MESSAGE)]
    Provider,
}

// ────────────────────────────────────────────────────────────────────────────
// Gateway
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct GenerationGateway {
    provider: Arc<dyn TextProvider>,
    settings: GenerationSettings,
}

impl GenerationGateway {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self::with_settings(provider, GenerationSettings::default())
    }

    pub fn with_settings(provider: Arc<dyn TextProvider>, settings: GenerationSettings) -> Self {
        Self { provider, settings }
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Generates one post. Exactly one provider call on the success path, none on
    /// validation failure.
    pub async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        let (goal, inputs, tone) = match (request.goal, request.inputs, request.tone) {
            (Some(goal), Some(inputs), Some(tone)) => (goal, inputs, tone),
            _ => {
                return Err(GenerationError::Validation(
                    MISSING_PARAMETERS_MESSAGE.to_string(),
                ))
            }
        };

        if let Some(field) = missing_required(goal, &inputs).first() {
            return Err(GenerationError::Validation(format!(
                "Missing required field: {}",
                field.label
            )));
        }

        let prompt = build_prompt(goal, &inputs, tone);
        let provider_request = ProviderRequest {
            model: self.settings.model.clone(),
            system_instruction: prompt.system,
            user_prompt: prompt.user,
            temperature: self.settings.temperature,
            top_p: self.settings.top_p,
        };

        info!("Generating post: goal={:?}, tone={:?}", goal, tone);

        let text = self
            .provider
            .generate_text(&provider_request)
            .await
            .map_err(|e| {
                error!("Error generating content: {e}");
                GenerationError::Provider
            })?;

        let text = text.trim();
        if text.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        Ok(text.to_string())
    }
}
