//! Language-model oracle: prompts, the evaluation contract, and the client.

mod client;
mod contract;
mod prompts;

pub use client::{DEFAULT_TIMEOUT, LlmOracle, clean_word};
pub use contract::{EvaluationPayload, evaluation_schema, parse_evaluation};
pub use prompts::WORD_TEMPERATURE;
