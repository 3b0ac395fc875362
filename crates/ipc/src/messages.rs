//! Render request and response messages.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::IpcError;

/// Request to render one material preview
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    /// Material id; missing or unknown ids render the neutral fallback
    #[serde(default)]
    pub material: Option<String>,
    /// Fixed seed for reproducible texture jitter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl RenderRequest {
    pub fn new(material: impl Into<String>) -> Self {
        Self {
            material: Some(material.into()),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn to_json(&self) -> Result<String, IpcError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, IpcError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Result of a render, shaped for the UI
///
/// On success `imageData` carries the base64 JPEG and `error` is absent.
/// On failure only `success`, `material` and `error` are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Resolved material id, `None` for the neutral fallback
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RenderResponse {
    /// Successful render carrying the encoded image
    pub fn ok(
        image: &[u8],
        mime_type: impl Into<String>,
        file_name: impl Into<String>,
        material: Option<&str>,
    ) -> Self {
        Self {
            success: true,
            image_data: Some(STANDARD.encode(image)),
            mime_type: Some(mime_type.into()),
            file_name: Some(file_name.into()),
            material: material.map(str::to_string),
            error: None,
        }
    }

    pub fn failure(material: Option<&str>, error: impl ToString) -> Self {
        Self {
            success: false,
            image_data: None,
            mime_type: None,
            file_name: None,
            material: material.map(str::to_string),
            error: Some(error.to_string()),
        }
    }

    /// Decode the base64 image payload back into bytes
    pub fn image_bytes(&self) -> Result<Vec<u8>, IpcError> {
        if !self.success {
            return Err(IpcError::InvalidFormat(format!(
                "render failed: {}",
                self.error.as_deref().unwrap_or("unknown error")
            )));
        }
        let data = self
            .image_data
            .as_deref()
            .ok_or_else(|| IpcError::InvalidFormat("missing imageData".to_string()))?;
        Ok(STANDARD.decode(data)?)
    }

    pub fn to_json(&self) -> Result<String, IpcError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, IpcError> {
        let response: Self = serde_json::from_str(json)?;
        if response.success && response.image_data.is_none() {
            return Err(IpcError::InvalidFormat(
                "successful response without imageData".to_string(),
            ));
        }
        Ok(response)
    }
}
