// Comment generation: prompt construction, one routed LLM call, and parsing
// the labelled completion back into variants.
// All LLM calls go through llm_client. No vendor HTTP here.

pub mod generator;
pub mod handlers;
pub mod prompt_builder;
pub mod prompts;
pub mod response_parser;
