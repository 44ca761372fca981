use std::collections::HashMap;

use axum::extract::Multipart;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::error::ApiError;
use crate::models::StylizeConfig;
use crate::pipeline;

/// `POST /api/style-transfer-advanced`: multipart form with a `file` or
/// `image` field carrying the raster (raw bytes, or base64 text in the
/// `image` field) plus the flat fields of the stylization request
/// (spec §6, `original_source/server_advanced.py`'s route).
pub async fn style_transfer_advanced(mut multipart: Multipart) -> Result<Response, ApiError> {
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut image_bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "file" || name == "image" {
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(e.to_string()))?;
            image_bytes = Some(resolve_image_bytes(&name, data.to_vec()));
        } else {
            let text = field.text().await.unwrap_or_default();
            fields.insert(name, text);
        }
    }

    let bytes = image_bytes
        .ok_or_else(|| ApiError::BadRequest("missing 'file' or 'image' field".to_string()))?;

    let cfg = StylizeConfig::from_fields(&fields);
    tracing::debug!(style = cfg.style.as_str(), seed = cfg.seed, "request parameters resolved");

    let img = pipeline::decode(&bytes)?;
    let png = pipeline::stylize(img, &cfg)?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}

/// The `image` field may carry either a raw binary upload or a base64
/// text payload (spec §6). `file` is always raw bytes.
fn resolve_image_bytes(field_name: &str, data: Vec<u8>) -> Vec<u8> {
    if field_name == "image" {
        if let Ok(text) = std::str::from_utf8(&data) {
            let trimmed = text.trim();
            let payload = trimmed
                .split_once(',')
                .map(|(_, b64)| b64)
                .unwrap_or(trimmed);
            if let Ok(decoded) = BASE64.decode(payload) {
                return decoded;
            }
        }
    }
    data
}
