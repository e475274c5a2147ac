//! Trending Topics API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::trending::{TrendingReporter, TrendingTopic};
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct TrendingParams {
    /// 分类 slug (可省略 = 全局热度榜)
    category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TrendingResponse {
    topics: Vec<TrendingTopic>,
}

/// GET /api/trending?category=<slug>? - 热门话题
pub async fn trending(
    State(state): State<ServerState>,
    Query(params): Query<TrendingParams>,
) -> AppResult<Json<TrendingResponse>> {
    let reporter = TrendingReporter::new(state.db.clone());
    let topics = reporter.trending(params.category.as_deref()).await?;
    Ok(Json(TrendingResponse { topics }))
}
