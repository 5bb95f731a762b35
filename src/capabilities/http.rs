//! HTTP translation client.
//!
//! Calls a Google-Translate-compatible endpoint (`/translate_a/single`,
//! `client=gtx`) and concatenates the returned segments. Blocking by
//! design: the pipeline is a single synchronous request-per-interaction
//! sequence, so there is nothing to overlap with.

use std::time::Duration;

use serde_json::Value;

use crate::error::CapabilityError;

use super::Translator;

const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A [`Translator`] backed by an HTTP translation endpoint.
#[derive(Debug, Clone)]
pub struct HttpTranslator {
    client: reqwest::blocking::Client,
    endpoint: String,
    source_lang: String,
    target_lang: String,
}

impl HttpTranslator {
    /// Create a translator for the given language pair against the public
    /// endpoint.
    pub fn new(source_lang: &str, target_lang: &str) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, source_lang, target_lang)
    }

    /// Create a translator against a custom endpoint (used in tests and
    /// for self-hosted gateways).
    pub fn with_endpoint(endpoint: &str, source_lang: &str, target_lang: &str) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
        }
    }

    /// Extract the translated text from the `client=gtx` response shape:
    /// an array whose first element is a list of `[translated, original,
    /// ...]` segments.
    fn extract_translation(body: &Value) -> Result<String, CapabilityError> {
        let segments = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| {
                CapabilityError::MalformedResponse(
                    "missing segment array".to_string(),
                )
            })?;

        let mut out = String::new();
        for segment in segments {
            if let Some(text) = segment.get(0).and_then(Value::as_str) {
                out.push_str(text);
            }
        }

        if out.is_empty() {
            return Err(CapabilityError::MalformedResponse(
                "no translated segments".to_string(),
            ));
        }
        Ok(out)
    }
}

impl Translator for HttpTranslator {
    fn translate(&self, text: &str) -> Result<String, CapabilityError> {
        let url = format!("{}/translate_a/single", self.endpoint);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", self.source_lang.as_str()),
                ("tl", self.target_lang.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()?
            .error_for_status()?;

        let body: Value = response.json()?;
        Self::extract_translation(&body)
    }
}
