//! REST API helpers for communicating with the image-generation backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` outputs instead of panics so a failed
//! generation rolls the transcript back and surfaces a toast without
//! crashing hydration.

#![allow(clippy::unused_async)]

use thiserror::Error;

use crate::net::types::{GenerateRequest, GenerateResponse};

/// Failure of an opaque backend call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(String),
    #[error("bad response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Ask the backend to generate images for a prompt. Returns one URL per
/// generated image.
pub async fn generate_images(request: &GenerateRequest) -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/images/generate")
            .json(request)
            .map_err(|e| ApiError::Http(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Http(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Http(format!("status {}", resp.status())));
        }
        let body: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.images)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Ask the backend to send a fresh verification code to `email`.
///
/// Fire-and-forget: the verifier screens observe no response, they only
/// restart their countdown.
pub async fn request_verification_code(email: &str) {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email });
        match gloo_net::http::Request::post("/api/auth/send-code").json(&body) {
            Ok(req) => {
                if let Err(e) = req.send().await {
                    leptos::logging::warn!("send-code request failed: {e}");
                }
            }
            Err(e) => leptos::logging::warn!("send-code encode failed: {e}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
    }
}
