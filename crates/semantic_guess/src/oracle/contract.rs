//! The structured-output contract for guess evaluation.
//!
//! The schema, not any provider SDK, is the portable artifact: it is derived
//! from [`EvaluationPayload`] and sent with every evaluation request.

use schemars::JsonSchema;
use semantic_guess_core::{GuessVerdict, Score, UNKNOWN_GLYPH};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// The oracle's raw answer to an evaluation prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationPayload {
    /// Similarity score from 0 to 100.
    pub score: f64,
    /// True if the guess is a valid word with meaning.
    pub is_valid: bool,
    /// A single emoji representing the guessed word.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    /// Short encouragement or observation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl EvaluationPayload {
    /// Converts the payload into a verdict.
    ///
    /// Scores are rounded and clamped; a missing emoji becomes `❓`; blank
    /// feedback is dropped.
    pub fn into_verdict(self) -> GuessVerdict {
        let emoji = self
            .emoji
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| UNKNOWN_GLYPH.to_string());
        let feedback = self
            .feedback
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty());
        GuessVerdict {
            score: Score::from_raw(self.score),
            is_valid: self.is_valid,
            emoji,
            feedback,
        }
    }
}

/// JSON schema sent with evaluation requests.
///
/// `score` and `isValid` are required; `emoji` and `feedback` are optional.
#[instrument]
pub fn evaluation_schema() -> serde_json::Value {
    let schema = schemars::schema_for!(EvaluationPayload);
    let mut value = serde_json::to_value(&schema).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to serialize evaluation schema");
        serde_json::Value::Object(Default::default())
    });
    if let Some(object) = value.as_object_mut() {
        object.remove("$schema");
    }
    value
}

/// Parses an evaluation answer.
///
/// Tolerates a surrounding markdown code fence and leading prose. A missing
/// `score` counts as zero; a missing `isValid` is an error.
#[instrument(skip(text), fields(length = text.len()))]
pub fn parse_evaluation(text: &str) -> Result<EvaluationPayload, serde_json::Error> {
    let body = extract_json_object(text);
    debug!(body, "Parsing evaluation payload");
    let mut value: serde_json::Value = serde_json::from_str(body)?;
    if let Some(object) = value.as_object_mut() {
        object
            .entry("score")
            .or_insert_with(|| serde_json::json!(0));
    }
    serde_json::from_value(value)
}

/// Returns the outermost `{...}` span of `text`, or `text` itself.
fn extract_json_object(text: &str) -> &str {
    let trimmed = text.trim();
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_json() {
        let payload =
            parse_evaluation(r#"{"score": 92, "isValid": true, "emoji": "🐱", "feedback": "So close!"}"#)
                .expect("Valid payload");
        let verdict = payload.into_verdict();
        assert_eq!(verdict.score.value(), 92);
        assert!(verdict.is_valid);
        assert_eq!(verdict.emoji, "🐱");
        assert_eq!(verdict.feedback.as_deref(), Some("So close!"));
    }

    #[test]
    fn parses_fenced_json_with_missing_optionals() {
        let text = "```json\n{\"score\": 40.4, \"isValid\": true}\n```";
        let verdict = parse_evaluation(text).expect("Fenced payload").into_verdict();
        assert_eq!(verdict.score.value(), 40);
        assert_eq!(verdict.emoji, UNKNOWN_GLYPH);
        assert!(verdict.feedback.is_none());
    }

    #[test]
    fn missing_score_is_zero() {
        let verdict = parse_evaluation(r#"{"isValid": false}"#)
            .expect("Payload without score")
            .into_verdict();
        assert_eq!(verdict.score, Score::ZERO);
        assert!(!verdict.is_valid);
    }

    #[test]
    fn missing_validity_is_an_error() {
        assert!(parse_evaluation(r#"{"score": 50}"#).is_err());
        assert!(parse_evaluation("I think it's close").is_err());
        assert!(parse_evaluation("").is_err());
    }

    #[test]
    fn schema_requires_score_and_validity() {
        let schema = evaluation_schema();
        assert!(schema.get("$schema").is_none());
        let required: Vec<&str> = schema["required"]
            .as_array()
            .expect("required list")
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert!(required.contains(&"score"));
        assert!(required.contains(&"isValid"));
        assert!(!required.contains(&"emoji"));
        assert!(schema["properties"]["feedback"].is_object());
    }
}
