//! Wire types shared between the client state and the REST layer.

use serde::{Deserialize, Serialize};

/// One generated image as displayed in the transcript.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub id: String,
    pub url: String,
    /// The full prompt sent to the backend, including any style suffix.
    pub prompt: String,
    pub style: Option<String>,
    pub size_label: String,
    /// Milliseconds since the epoch, as reported by the browser clock.
    pub created_at: f64,
}

/// Request body for the image-generation endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct GenerateRequest {
    pub prompt: String,
    pub count: u32,
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_image: Option<String>,
}

/// Response body from the image-generation endpoint: one URL per image.
#[derive(Clone, Debug, Deserialize)]
pub struct GenerateResponse {
    pub images: Vec<String>,
}
