//! Prompt Generation API Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::prompts::{GeneratedPrompt, PromptGenerator};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    topic: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PromptsResponse {
    prompts: Vec<GeneratedPrompt>,
}

/// POST /api/generate-prompts - 生成提示词
///
/// body: `{"topic": "...", "category": "<slug>"}`
pub async fn generate(
    State(state): State<ServerState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> AppResult<Json<PromptsResponse>> {
    // 非 JSON / 非法 JSON body -> 400
    let Json(request) = payload.map_err(|_| AppError::validation("Invalid JSON"))?;

    let (topic, category) = match (
        request.topic.filter(|t| !t.is_empty()),
        request.category.filter(|c| !c.is_empty()),
    ) {
        (Some(topic), Some(category)) => (topic, category),
        _ => {
            return Err(AppError::validation(
                "Both topic and category are required",
            ));
        }
    };

    let generator = PromptGenerator::new(state.db.clone());
    let prompts = generator.generate(&category, &topic).await?;
    Ok(Json(PromptsResponse { prompts }))
}

/// 非 POST 方法 -> 405
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
