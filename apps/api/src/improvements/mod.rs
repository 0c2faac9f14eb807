// Resume Improvement Engine
// Implements: section alias resolution, entry flattening, flag dispatch,
// change filtering, and the suggestion entry point.
// All LLM calls go through llm_client via the RewriteOracle trait — no
// direct Anthropic calls here.

pub mod filter;
pub mod flatten;
pub mod generator;
pub mod handlers;
pub mod instructions;
pub mod oracle;
pub mod resolver;
