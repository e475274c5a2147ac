//! Prompt Generation API 模块

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/generate-prompts",
        // 非 POST 方法统一 405 + {"error"} 响应
        post(handler::generate).fallback(handler::method_not_allowed),
    )
}
