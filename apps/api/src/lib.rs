pub mod catalog;
pub mod config;
pub mod errors;
pub mod generation;
pub mod llm_client;
pub mod routes;
pub mod state;
pub mod terminal;
pub mod wizard;

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::generation::gateway::GenerationGateway;
use crate::llm_client::LlmClient;

/// Builds the Gemini-backed gateway both binaries share.
pub fn build_gateway(config: &Config) -> Result<GenerationGateway> {
    let llm = LlmClient::new(
        config.api_key.clone(),
        &config.gemini_base_url,
        config.llm_timeout,
    )
    .context("Failed to build HTTP client")?;
    Ok(GenerationGateway::new(Arc::new(llm)))
}
