//! Gemini API client for text generation, vision input and YAML repair.
//!
//! This is the single integration point with the external generative-AI
//! service. Each call is one blocking request/response exchange: no retries,
//! no caching, no streaming. UI code never blocks on it directly; the
//! `_async` variants run the call on a worker thread and deliver the result
//! over an mpsc channel that the initiating view polls each frame.

use serde::{Deserialize, Serialize};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use tracing::{error, info};

/// Base URL of the Gemini REST API.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable consulted when no key is entered in the UI.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Model used for the YAML repair flow.
pub const REPAIR_MODEL: &str = "gemini-3-flash-preview";

const REPAIR_SYSTEM_INSTRUCTION: &str =
    "You are a YAML syntax expert. Your job is to fix invalid YAML strings and return only the valid YAML text.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// No API key was available from either the explicit parameter or the
    /// environment. Raised before any network interaction.
    MissingApiKey,
    /// Transport or response failure from the service.
    Service(String),
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::MissingApiKey => write!(
                f,
                "No Gemini API key available. Enter one in the sidebar or set {}",
                API_KEY_ENV
            ),
            GatewayError::Service(msg) => write!(f, "Gemini API call failed: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

/// Base64 file payload sent alongside the text prompt for vision/document
/// input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Everything needed for one `generateContent` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub system_instruction: Option<String>,
    pub inline_data: Option<InlineData>,
}

impl GenerateRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            system_instruction: None,
            inline_data: None,
        }
    }
}

// Wire format for the generateContent endpoint.

#[derive(Serialize)]
struct WireInlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct WirePart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<WireInlineData>,
}

#[derive(Serialize)]
struct WireContent {
    parts: Vec<WirePart>,
}

#[derive(Serialize)]
struct WireRequest {
    contents: Vec<WireContent>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<WireContent>,
}

#[derive(Deserialize)]
struct WireResponse {
    #[serde(default)]
    candidates: Vec<WireCandidate>,
}

#[derive(Deserialize)]
struct WireCandidate {
    content: Option<WireResponseContent>,
}

#[derive(Deserialize)]
struct WireResponseContent {
    #[serde(default)]
    parts: Vec<WireResponsePart>,
}

#[derive(Deserialize)]
struct WireResponsePart {
    #[serde(default)]
    text: Option<String>,
}

/// Build the JSON body for a request. Parts are ordered: inline data first
/// when present, then the text prompt.
pub fn request_body(request: &GenerateRequest) -> serde_json::Value {
    let mut parts = Vec::new();
    if let Some(inline) = &request.inline_data {
        parts.push(WirePart {
            text: None,
            inline_data: Some(WireInlineData {
                mime_type: inline.mime_type.clone(),
                data: inline.data.clone(),
            }),
        });
    }
    parts.push(WirePart {
        text: Some(request.prompt.clone()),
        inline_data: None,
    });

    let wire = WireRequest {
        contents: vec![WireContent { parts }],
        system_instruction: request.system_instruction.as_ref().map(|text| WireContent {
            parts: vec![WirePart {
                text: Some(text.clone()),
                inline_data: None,
            }],
        }),
    };

    serde_json::to_value(&wire).expect("wire request serialization cannot fail")
}

/// Build the repair request for malformed agent YAML.
///
/// When `standardize` is set, the model is additionally required to shape
/// every entry into the agent record form, inventing missing descriptive
/// fields rather than failing.
pub fn repair_request(raw_text: &str, standardize: bool) -> GenerateRequest {
    let mut prompt = String::from(
        "Please fix the following YAML content. Ensure it is valid YAML. \
         Only return the raw YAML, no markdown fencing.",
    );
    if standardize {
        prompt.push_str(
            "\nStandardize every entry into a record with the fields: id, name, \
             description, model, systemPrompt. Invent a reasonable value for any \
             missing descriptive field instead of failing.",
        );
    }
    prompt.push_str("\n\n");
    prompt.push_str(raw_text);

    GenerateRequest {
        model: REPAIR_MODEL.to_string(),
        prompt,
        system_instruction: Some(REPAIR_SYSTEM_INSTRUCTION.to_string()),
        inline_data: None,
    }
}

/// Strip leading/trailing Markdown code-fence lines from model output.
///
/// The repair prompt asks for raw text, but the output contract is
/// best-effort, so callers sanitize defensively.
pub fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }
    let mut lines: Vec<&str> = trimmed.lines().collect();
    // Drop the opening fence (possibly tagged, e.g. ```yaml).
    lines.remove(0);
    if let Some(last) = lines.last() {
        if last.trim() == "```" {
            lines.pop();
        }
    }
    lines.join("\n").trim().to_string()
}

/// Client for the Gemini API. Cheap to clone; each worker thread gets its
/// own copy.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: Option<String>,
    endpoint: String,
}

impl GeminiClient {
    /// Create a client, resolving the API key from the explicit parameter or
    /// the `GEMINI_API_KEY` environment variable, in that order.
    pub fn new(explicit_key: Option<String>) -> Self {
        let api_key = explicit_key
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(API_KEY_ENV).ok().filter(|k| !k.trim().is_empty()));
        Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Create a client with exactly the given key, without consulting the
    /// environment. Used by tests to exercise the unauthenticated path.
    pub fn with_key(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Point the client at a different endpoint (local stub servers in
    /// tests).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// One blocking `generateContent` exchange.
    ///
    /// Fails with [`GatewayError::MissingApiKey`] before any network call
    /// when no key is available. Returns the concatenated text parts of the
    /// first candidate; an answer with no text parts yields an empty string.
    pub fn generate(&self, request: &GenerateRequest) -> Result<String, GatewayError> {
        let api_key = self.api_key.as_ref().ok_or(GatewayError::MissingApiKey)?;

        info!(
            "Calling Gemini generateContent: model={}, inline_data={}, system_instruction={}",
            request.model,
            request.inline_data.is_some(),
            request.system_instruction.is_some()
        );

        let url = format!("{}/models/{}:generateContent", self.endpoint, request.model);
        let body = request_body(request);

        let client = reqwest::blocking::Client::new();
        let response = client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                error!("Gemini request failed to send: {}", e);
                GatewayError::Service(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            error!("Gemini API returned HTTP {}: {}", status, detail);
            return Err(GatewayError::Service(format!("HTTP {}: {}", status, detail)));
        }

        let parsed: WireResponse = response.json().map_err(|e| {
            error!("Failed to decode Gemini response: {}", e);
            GatewayError::Service(format!("invalid response body: {}", e))
        })?;

        let text = parsed
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        info!("Gemini call completed, response length: {}", text.len());
        Ok(text)
    }

    /// Run [`Self::generate`] on a worker thread; the result arrives on the
    /// returned channel. The caller polls with `try_recv` each frame.
    pub fn generate_async(&self, request: GenerateRequest) -> Receiver<Result<String, GatewayError>> {
        let (tx, rx) = mpsc::channel();
        let client = self.clone();
        thread::spawn(move || {
            let result = client.generate(&request);
            // Receiver may be gone if the app shut down mid-request.
            let _ = tx.send(result);
        });
        rx
    }

    /// Repair malformed agent YAML via the model, stripping any residual
    /// code fences from the answer.
    pub fn repair_agent_yaml(
        &self,
        raw_text: &str,
        standardize: bool,
    ) -> Result<String, GatewayError> {
        let request = repair_request(raw_text, standardize);
        let text = self.generate(&request)?;
        Ok(strip_code_fences(&text))
    }

    /// Async variant of [`Self::repair_agent_yaml`].
    pub fn repair_agent_yaml_async(
        &self,
        raw_text: String,
        standardize: bool,
    ) -> Receiver<Result<String, GatewayError>> {
        let (tx, rx) = mpsc::channel();
        let client = self.clone();
        thread::spawn(move || {
            let result = client.repair_agent_yaml(&raw_text, standardize);
            let _ = tx.send(result);
        });
        rx
    }
}
