//! Language-specific prompt templates for the three oracle operations.

use semantic_guess_core::{HintLevel, Language};

use crate::llm_client::CompletionRequest;

const SYSTEM: &str = "You are the game master of a cheerful word-guessing game.";

/// Temperature for word generation unless configured otherwise.
pub const WORD_TEMPERATURE: f32 = 1.2;

/// Asks for one common everyday noun.
pub fn target_word(language: Language, temperature: f32) -> CompletionRequest {
    let prompt = match language {
        Language::Thai => {
            "ขอคำนามทั่วไป 1 คำ ที่คนทั่วไปรู้จัก ใช้ในชีวิตประจำวัน ไม่ใช่คำเฉพาะ ไม่เอาคำทับศัพท์ พิมพ์มาแค่คำนั้นคำเดียว ไม่มีเครื่องหมายอื่น"
        }
        Language::English => {
            "Generate a single, common, everyday noun in English. Return ONLY the word, no punctuation."
        }
    };
    CompletionRequest::new(SYSTEM.to_string(), prompt.to_string()).with_temperature(temperature)
}

/// Asks for a validity check, similarity score, emoji and feedback.
pub fn evaluation(
    target: &str,
    guess: &str,
    language: Language,
    schema: serde_json::Value,
) -> CompletionRequest {
    let lang = language.code();
    let prompt = format!(
        r#"Target Word: "{target}"
Guessed Word: "{guess}"
Language: {lang}

Task:
1. Check if "{guess}" is a valid word in {lang}. If it is gibberish or misspelt, isValid is false.
2. If valid, rate the SEMANTIC similarity (meaning) between the Target and the Guess on a scale of 0 to 100.
   - 100 = Exact match or synonym.
   - 75-99 = Very close concept (e.g., Cat vs Kitten).
   - 50-74 = Related field (e.g., Cat vs Animal).
   - 25-49 = Loosely related.
   - 0-24 = Completely different.
3. Pick a cute emoji representing "{guess}".
4. Provide very short feedback (max 5 words)."#
    );
    CompletionRequest::new(SYSTEM.to_string(), prompt).with_schema(schema)
}

/// Asks for a hint; level 1 vague, level 3 obvious.
pub fn hint(target: &str, language: Language, level: HintLevel) -> CompletionRequest {
    let prompt = match language {
        Language::Thai => format!(
            "คำปริศนาคือ \"{target}\". ขอคำใบ้ระดับที่ {level} (จาก 3 ระดับ). ระดับ 1 ใบ้กว้างๆ, ระดับ 3 ใบ้ชัดเจน. ขอประโยคสั้นๆ น่ารักๆ"
        ),
        Language::English => format!(
            "The secret word is \"{target}\". Give me hint #{level} (out of 3). Level 1 is vague, Level 3 is obvious. Keep it short and cute. Never say the secret word itself."
        ),
    };
    CompletionRequest::new(SYSTEM.to_string(), prompt)
}
