// Code analysis: prompt building, provider call, and normalization of the model's reply.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod coerce;
pub mod extract;
pub mod handlers;
pub mod keys;
pub mod models;
pub mod normalizer;
pub mod prompts;
pub mod service;
