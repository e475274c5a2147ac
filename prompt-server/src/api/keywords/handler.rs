//! Keyword Suggestion API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::suggest::{Suggestion, SuggestionEngine};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct KeywordParams {
    /// 分类 slug (必填)
    category: Option<String>,
    /// 原始查询串 (可省略，等价于空查询)
    #[serde(default)]
    query: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    suggestions: Vec<Suggestion>,
}

/// GET /api/keywords?category=<slug>&query=<string> - 关键词建议
pub async fn suggest(
    State(state): State<ServerState>,
    Query(params): Query<KeywordParams>,
) -> AppResult<Json<SuggestionsResponse>> {
    let category = params
        .category
        .filter(|slug| !slug.is_empty())
        .ok_or_else(|| AppError::validation("Category is required"))?;

    let engine = SuggestionEngine::new(state.db.clone());
    let suggestions = engine.suggest(&category, &params.query).await?;
    Ok(Json(SuggestionsResponse { suggestions }))
}
