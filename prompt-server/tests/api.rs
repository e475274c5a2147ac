//! HTTP API 集成测试
//!
//! 在内存数据库 + 完整 seed 数据上驱动整个 router

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use prompt_server::{Config, ServerState, api, db};

async fn test_app() -> Router {
    let config = Config::from_env();
    let state = ServerState::initialize_in_memory(&config).await.unwrap();
    db::seed::load_initial_data(&state.db, false).await.unwrap();
    api::build_app(&state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

async fn post_json(app: &Router, uri: &str, body: String) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn test_health() {
    let app = test_app().await;
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn test_list_categories() {
    let app = test_app().await;
    let (status, body) = get(&app, "/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    let categories = body["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 5);
    assert!(
        categories
            .iter()
            .any(|c| c["slug"] == "coding" && c["name"] == "Coding")
    );
}

#[tokio::test]
async fn test_keywords_empty_query_returns_top_ten() {
    let app = test_app().await;
    let (status, body) = get(&app, "/api/keywords?category=coding").await;
    assert_eq!(status, StatusCode::OK);

    let suggestions = body["suggestions"].as_array().unwrap();
    assert_eq!(suggestions.len(), 10);
    // 热度降序，榜首是种子数据里的 Python (10)
    assert_eq!(suggestions[0]["text"], "Python");
    assert_eq!(suggestions[0]["popularity"], 10);
    let pops: Vec<i64> = suggestions
        .iter()
        .map(|s| s["popularity"].as_i64().unwrap())
        .collect();
    assert!(pops.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_keywords_requires_category() {
    let app = test_app().await;
    let (status, body) = get(&app, "/api/keywords?query=python").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Category is required");
}

#[tokio::test]
async fn test_keywords_unknown_category() {
    let app = test_app().await;
    let (status, body) = get(&app, "/api/keywords?category=nope&query=python").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Category not found");
}

#[tokio::test]
async fn test_keywords_miss_creates_suggestion() {
    let app = test_app().await;
    let (status, body) = get(&app, "/api/keywords?category=coding&query=jsx").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["suggestions"],
        json!([{ "text": "Jsx", "popularity": 1 }])
    );
}

#[tokio::test]
async fn test_keywords_match_is_ranked() {
    let app = test_app().await;
    let (status, body) = get(&app, "/api/keywords?category=coding&query=python").await;
    assert_eq!(status, StatusCode::OK);
    let suggestions = body["suggestions"].as_array().unwrap();
    // exact 层按热度降序: "Python" (10) 在 "create a simple python code" (8) 之前
    assert_eq!(suggestions[0]["text"], "Python");
    assert!(
        suggestions
            .iter()
            .any(|s| s["text"] == "create a simple python code")
    );
}

#[tokio::test]
async fn test_generate_prompts() {
    let app = test_app().await;
    let (status, body) = post_json(
        &app,
        "/api/generate-prompts",
        json!({ "topic": "sorting", "category": "coding" }).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let prompts = body["prompts"].as_array().unwrap();
    assert!(prompts.len() == 2 || prompts.len() == 3);
    for prompt in prompts {
        let content = prompt["generatedContent"].as_str().unwrap();
        assert!(content.contains("sorting"));
        assert!(!content.contains("{topic}"));
        assert!(prompt["id"].as_str().is_some());
        assert!(prompt["name"].as_str().is_some());
    }

    // 主题被计入关键词：低于 3 字符的查询返回热度榜，此处用完整查询验证
    let (_, keywords) = get(&app, "/api/keywords?category=coding&query=sorting").await;
    assert!(
        keywords["suggestions"]
            .as_array()
            .unwrap()
            .iter()
            .any(|s| s["text"] == "sorting")
    );
}

#[tokio::test]
async fn test_generate_requires_topic_and_category() {
    let app = test_app().await;
    let (status, body) = post_json(
        &app,
        "/api/generate-prompts",
        json!({ "topic": "sorting" }).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Both topic and category are required");
}

#[tokio::test]
async fn test_generate_rejects_invalid_json() {
    let app = test_app().await;
    let (status, body) = post_json(&app, "/api/generate-prompts", "not json".to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid JSON");
}

#[tokio::test]
async fn test_generate_unknown_category() {
    let app = test_app().await;
    let (status, _) = post_json(
        &app,
        "/api/generate-prompts",
        json!({ "topic": "sorting", "category": "nope" }).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_generate_rejects_non_post() {
    let app = test_app().await;
    let (status, body) = get(&app, "/api/generate-prompts").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Only POST method is allowed");
}

#[tokio::test]
async fn test_trending_global() {
    let app = test_app().await;
    let (status, body) = get(&app, "/api/trending").await;
    assert_eq!(status, StatusCode::OK);
    let topics = body["topics"].as_array().unwrap();
    assert_eq!(topics.len(), 12);
    let pops: Vec<i64> = topics
        .iter()
        .map(|t| t["popularity"].as_i64().unwrap())
        .collect();
    assert!(pops.windows(2).all(|w| w[0] >= w[1]));
    // 每条都带分类名称和 slug
    assert!(
        topics
            .iter()
            .all(|t| t["category"].as_str().is_some() && t["category_slug"].as_str().is_some())
    );
}

#[tokio::test]
async fn test_trending_per_category() {
    let app = test_app().await;
    let (status, body) = get(&app, "/api/trending?category=social-media").await;
    assert_eq!(status, StatusCode::OK);
    let topics = body["topics"].as_array().unwrap();
    assert_eq!(topics.len(), 8);
    assert!(topics.iter().all(|t| t["category_slug"] == "social-media"));
}

#[tokio::test]
async fn test_trending_unknown_category() {
    let app = test_app().await;
    let (status, body) = get(&app, "/api/trending?category=nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Category not found");
}
