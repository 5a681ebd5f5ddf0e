//! LLM API client abstraction for OpenAI, Anthropic and Gemini.

use async_openai::{
    Client as OpenAIClient,
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs, ResponseFormat,
        ResponseFormatJsonSchema,
    },
};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// LLM provider selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LlmProvider {
    /// OpenAI (GPT models).
    OpenAI,
    /// Anthropic (Claude models).
    Anthropic,
    /// Google (Gemini models).
    Gemini,
}

impl LlmProvider {
    /// Environment variable holding this provider's API key.
    pub fn api_key_var(self) -> &'static str {
        match self {
            Self::OpenAI => "OPENAI_API_KEY",
            Self::Anthropic => "ANTHROPIC_API_KEY",
            Self::Gemini => "GEMINI_API_KEY",
        }
    }
}

/// Configuration for LLM client.
#[derive(Debug, Clone, Getters)]
pub struct LlmConfig {
    provider: LlmProvider,
    #[getter(skip)]
    api_key: String,
    model: String,
    max_tokens: u32,
    base_url: Option<String>,
}

impl LlmConfig {
    /// Creates a new LLM configuration.
    #[instrument(skip(api_key), fields(provider = ?provider, model = %model))]
    pub fn new(
        provider: LlmProvider,
        api_key: String,
        model: String,
        max_tokens: u32,
        base_url: Option<String>,
    ) -> Self {
        debug!("Creating LLM config");
        Self {
            provider,
            api_key,
            model,
            max_tokens,
            base_url,
        }
    }

    fn base_url_or(&self, default: &str) -> String {
        self.base_url
            .as_deref()
            .unwrap_or(default)
            .trim_end_matches('/')
            .to_string()
    }
}

/// One request to a text-generation model.
#[derive(Debug, Clone, new)]
pub struct CompletionRequest {
    /// Standing instructions.
    pub system: String,
    /// The user turn.
    pub prompt: String,
    /// Sampling temperature; provider default when unset.
    #[new(default)]
    pub temperature: Option<f32>,
    /// JSON schema the answer must follow; free text when unset.
    #[new(default)]
    pub schema: Option<serde_json::Value>,
}

impl CompletionRequest {
    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Requires a JSON answer matching `schema`.
    pub fn with_schema(mut self, schema: serde_json::Value) -> Self {
        self.schema = Some(schema);
        self
    }
}

/// Anything that can answer a [`CompletionRequest`] with text.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates the completion text.
    async fn generate(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}

/// LLM client that abstracts over multiple providers.
#[derive(Debug, Clone)]
pub struct LlmClient {
    config: LlmConfig,
    http: reqwest::Client,
}

impl LlmClient {
    /// Creates a new LLM client.
    #[instrument(skip(config), fields(provider = ?config.provider()))]
    pub fn new(config: LlmConfig) -> Self {
        info!("Creating LLM client");
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// The client's configuration.
    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    /// Generates a completion using Anthropic Claude.
    #[instrument(skip(self, request))]
    async fn generate_anthropic(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let system = match &request.schema {
            Some(schema) => format!(
                "{}\n\nRespond with only a JSON object that matches this JSON schema, with no other text:\n{}",
                request.system, schema
            ),
            None => request.system.clone(),
        };

        debug!("Building Anthropic API request");
        let mut body = serde_json::json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "system": system,
            "messages": [
                {
                    "role": "user",
                    "content": request.prompt
                }
            ]
        });
        if let Some(temperature) = request.temperature {
            // Anthropic caps temperature at 1.0.
            body["temperature"] = serde_json::json!(temperature.min(1.0));
        }

        let url = format!("{}/v1/messages", self.config.base_url_or(ANTHROPIC_BASE_URL));
        let response = self
            .http
            .post(url)
            .header("x-api-key", self.config.api_key.clone())
            .header("anthropic-version", "2023-06-01")
            .json(&body);
        let response_json = self.send_json("Anthropic", response).await?;

        let content = response_json["content"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                error!(response = %response_json, "No text content in Anthropic response");
                LlmError::new("No text content in Anthropic response".to_string())
            })?
            .to_string();

        info!(content_length = content.len(), "Generated completion");
        Ok(content)
    }

    /// Generates a completion using Google Gemini.
    #[instrument(skip(self, request))]
    async fn generate_gemini(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        debug!("Building Gemini API request");
        let mut generation_config = serde_json::json!({
            "maxOutputTokens": self.config.max_tokens,
        });
        if let Some(temperature) = request.temperature {
            generation_config["temperature"] = serde_json::json!(temperature);
        }
        if let Some(schema) = &request.schema {
            generation_config["responseMimeType"] = serde_json::json!("application/json");
            generation_config["responseJsonSchema"] = schema.clone();
        }

        let body = serde_json::json!({
            "systemInstruction": { "parts": [{ "text": request.system }] },
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": request.prompt }]
                }
            ],
            "generationConfig": generation_config,
        });

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url_or(GEMINI_BASE_URL),
            self.config.model
        );
        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", self.config.api_key.clone())
            .json(&body);
        let response_json = self.send_json("Gemini", response).await?;

        let content = response_json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                error!(response = %response_json, "No text content in Gemini response");
                LlmError::new("No text content in Gemini response".to_string())
            })?
            .to_string();

        info!(content_length = content.len(), "Generated completion");
        Ok(content)
    }

    /// Sends a JSON request and parses the JSON reply.
    async fn send_json(
        &self,
        provider: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<serde_json::Value, LlmError> {
        debug!(provider, "Sending request");
        let response = request.send().await.map_err(|e| {
            error!(error = ?e, provider, "API request failed");
            LlmError::new(format!("{} API request failed: {}", provider, e))
        })?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            error!(error = ?e, provider, "Failed to read response");
            LlmError::new(format!("Failed to read response: {}", e))
        })?;

        if !status.is_success() {
            error!(status = %status, response = %response_text, provider, "API error");
            return Err(LlmError::new(format!(
                "{} API error {}: {}",
                provider, status, response_text
            )));
        }

        debug!(response_length = response_text.len(), provider, "Parsing response");
        serde_json::from_str(&response_text).map_err(|e| {
            error!(error = ?e, response = %response_text, provider, "Failed to parse response");
            LlmError::new(format!("Failed to parse response: {}", e))
        })
    }

    /// Generates a completion using OpenAI.
    #[instrument(skip(self, request))]
    async fn generate_openai(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        debug!("Creating OpenAI client");

        let mut openai_config = OpenAIConfig::new().with_api_key(self.config.api_key.clone());
        if let Some(base_url) = &self.config.base_url {
            openai_config = openai_config.with_api_base(base_url.clone());
        }
        let client = OpenAIClient::with_config(openai_config);

        debug!("Building chat completion request");
        let messages = vec![
            ChatCompletionRequestMessage::System(
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(request.system.as_str())
                    .build()
                    .map_err(|e| {
                        error!(error = ?e, "Failed to build system message");
                        LlmError::new(format!("Failed to build system message: {}", e))
                    })?,
            ),
            ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessageArgs::default()
                    .content(request.prompt.as_str())
                    .build()
                    .map_err(|e| {
                        error!(error = ?e, "Failed to build user message");
                        LlmError::new(format!("Failed to build user message: {}", e))
                    })?,
            ),
        ];

        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(self.config.model.as_str())
            .messages(messages)
            .max_completion_tokens(self.config.max_tokens);
        if let Some(temperature) = request.temperature {
            args.temperature(temperature);
        }
        if let Some(schema) = &request.schema {
            args.response_format(ResponseFormat::JsonSchema {
                json_schema: ResponseFormatJsonSchema {
                    description: None,
                    name: "guess_verdict".to_string(),
                    schema: Some(schema.clone()),
                    strict: Some(false),
                },
            });
        }
        let chat_request = args.build().map_err(|e| {
            error!(error = ?e, "Failed to build request");
            LlmError::new(format!("Failed to build request: {}", e))
        })?;

        debug!("Sending request to OpenAI");
        let response = client.chat().create(chat_request).await.map_err(|e| {
            error!(error = ?e, "OpenAI API error");
            LlmError::new(format!("OpenAI API error: {}", e))
        })?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| {
                error!("No content in OpenAI response");
                LlmError::new("No content in OpenAI response".to_string())
            })?;

        info!(content_length = content.len(), "Generated completion");
        Ok(content)
    }
}

#[async_trait::async_trait]
impl TextGenerator for LlmClient {
    #[instrument(skip(self, request), fields(provider = ?self.config.provider, model = %self.config.model))]
    async fn generate(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        debug!(structured = request.schema.is_some(), "Generating completion");
        match self.config.provider {
            LlmProvider::OpenAI => self.generate_openai(request).await,
            LlmProvider::Anthropic => self.generate_anthropic(request).await,
            LlmProvider::Gemini => self.generate_gemini(request).await,
        }
    }
}

/// LLM client error.
#[derive(Debug, Clone, Display, Error)]
#[display("LLM error: {} at {}:{}", message, file, line)]
pub struct LlmError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl LlmError {
    /// Creates a new LLM error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        error!(error_message = %message, "LLM error created");
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
