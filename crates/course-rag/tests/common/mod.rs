//! Shared fixtures for HTTP contract tests
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use mockall::mock;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

use course_rag::config::ServerConfig;
use course_rag::providers::{AnalyticsProvider, RagBackend, SessionProvider};
use course_rag::{build_router, AppState, CourseAnalytics, RagAnswer, Result};

mock! {
    pub Sessions {}

    #[async_trait]
    impl SessionProvider for Sessions {
        async fn create_session(&self) -> Result<String>;
    }
}

mock! {
    pub Rag {}

    #[async_trait]
    impl RagBackend for Rag {
        async fn query(&self, query: &str, session_id: &str) -> Result<RagAnswer>;
    }
}

mock! {
    pub Analytics {}

    #[async_trait]
    impl AnalyticsProvider for Analytics {
        async fn get_course_analytics(&self) -> Result<CourseAnalytics>;
    }
}

/// Session provider issuing `test-session-123` any number of times
pub fn default_sessions() -> MockSessions {
    let mut sessions = MockSessions::new();
    sessions
        .expect_create_session()
        .returning(|| Ok("test-session-123".to_string()));
    sessions
}

/// Backend answering every query with `Test answer` and two sources
pub fn default_rag() -> MockRag {
    let mut rag = MockRag::new();
    rag.expect_query()
        .returning(|_, _| Ok(RagAnswer::new("Test answer", ["source1", "source2"])));
    rag
}

/// Analytics provider reporting two test courses
pub fn default_analytics() -> MockAnalytics {
    let mut analytics = MockAnalytics::new();
    analytics.expect_get_course_analytics().returning(|| {
        Ok(CourseAnalytics {
            total_courses: 2,
            course_titles: vec!["Test Course".to_string(), "Another Course".to_string()],
        })
    });
    analytics
}

/// Router over the given collaborators with the default server config
pub fn app(sessions: MockSessions, rag: MockRag, analytics: MockAnalytics) -> Router {
    app_with_config(&ServerConfig::default(), sessions, rag, analytics)
}

pub fn app_with_config(
    config: &ServerConfig,
    sessions: MockSessions,
    rag: MockRag,
    analytics: MockAnalytics,
) -> Router {
    let state = AppState::new(Arc::new(sessions), Arc::new(rag), Arc::new(analytics));
    build_router(config, state)
}

/// Router over the default collaborators
pub fn default_app() -> Router {
    app(default_sessions(), default_rag(), default_analytics())
}

/// Collected response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_raw(uri: &str, content_type: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
