// Post generation: prompt assembly, the provider gateway, and the HTTP handler.
// All provider calls go through llm_client — no direct Gemini calls here.

pub mod gateway;
pub mod handlers;
pub mod prompt_builder;
pub mod prompts;
