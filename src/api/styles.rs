use axum::Json;

use crate::models::StyleTag;

pub async fn list_styles() -> Json<Vec<&'static str>> {
    Json(StyleTag::ALL.iter().map(StyleTag::as_str).collect())
}
