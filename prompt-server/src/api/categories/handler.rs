//! Category API Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::CategoryRepository;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct CategoryView {
    name: String,
    slug: String,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    categories: Vec<CategoryView>,
}

/// GET /api/categories - 获取所有分类 (供前端填充分类选择)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<CategoriesResponse>> {
    let repo = CategoryRepository::new(state.db.clone());
    let categories = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(CategoriesResponse {
        categories: categories
            .into_iter()
            .map(|c| CategoryView {
                name: c.name,
                slug: c.slug,
            })
            .collect(),
    }))
}
