pub mod health;
pub mod page;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::contact::handlers as contact;
use crate::interaction::handlers as sections;
use crate::projects::handlers as projects;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(page::page_handler))
        .route("/health", get(health::health_handler))
        // Portfolio data
        .route("/api/v1/portfolio", get(page::portfolio_handler))
        .route("/api/v1/projects", get(projects::handle_list_projects))
        .route("/api/v1/projects/:index", get(projects::handle_get_project))
        // Interaction
        .route(
            "/api/v1/sections/active",
            post(sections::handle_active_section),
        )
        // Contact form
        .route("/api/v1/contact", post(contact::handle_contact))
        .nest_service("/static", static_dir)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::contact::SimulatedContactSink;
    use crate::data::parse_portfolio;
    use crate::render::Fragments;

    const DATA: &str = r#"{
        "personalInfo": { "name": "Nerick", "title": "CS Student" },
        "projects": [
            { "title": "Weather App", "year": "2023", "technologies": ["JavaScript"] },
            { "title": "Robot", "year": "2025", "featured": true, "status": "in-progress",
              "githubLink": "https://github.com/n/robot" },
            { "title": "Compiler", "year": "2024", "technologies": ["Rust"] }
        ],
        "contact": { "email": "n@example.com" }
    }"#;

    fn app() -> Router {
        let portfolio = parse_portfolio(DATA).unwrap();
        build_router(AppState {
            config: Config::default(),
            portfolio: Arc::new(portfolio),
            fragments: Arc::new(Fragments::default()),
            contact_sink: Arc::new(SimulatedContactSink::new(Duration::ZERO)),
        })
    }

    async fn send(request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let (status, body) = send(Request::get(uri).body(Body::empty()).unwrap()).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn post_json(uri: &str, payload: Value) -> (StatusCode, Value) {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();
        let (status, body) = send(request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "portfolio");
        assert_eq!(body["projects"], 3);
    }

    #[tokio::test]
    async fn test_page_renders() {
        let (status, body) = send(Request::get("/").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("Nerick's Portfolio"));
        assert!(html.contains("3 projects"));
    }

    #[tokio::test]
    async fn test_page_rejects_unknown_filter() {
        let (status, _) =
            send(Request::get("/?filter=archived").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_project_query() {
        let (status, body) = get_json("/api/v1/projects?sort=alphabetical").await;
        assert_eq!(status, StatusCode::OK);
        let titles: Vec<&str> = body["projects"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["project"]["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, ["Compiler", "Robot", "Weather App"]);
        assert_eq!(body["count_label"], "3 projects");
        assert_eq!(body["empty"], false);
    }

    #[tokio::test]
    async fn test_project_query_empty_state() {
        let (_, body) = get_json("/api/v1/projects?search=quantum").await;
        assert_eq!(body["count"], 0);
        assert_eq!(body["empty"], true);
        assert_eq!(
            body["empty_message"],
            "No projects found matching your criteria."
        );
    }

    #[tokio::test]
    async fn test_unknown_sort_is_bad_request() {
        let (status, body) = get_json("/api/v1/projects?sort=popular").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_project_detail() {
        let (status, body) = get_json("/api/v1/projects/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["index"], 1);
        assert_eq!(body["status_badge"]["label"], "In Progress");
        assert_eq!(body["actions"][0]["kind"], "code");

        let (status, body) = get_json("/api/v1/projects/9").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_active_section() {
        let (status, body) = post_json(
            "/api/v1/sections/active",
            json!({
                "sections": [
                    { "section": "home", "rect_top": -900.0, "rect_height": 900.0,
                      "offset_top": 0.0, "offset_height": 900.0 },
                    { "section": "projects", "rect_top": 100.0, "rect_height": 800.0,
                      "offset_top": 1000.0, "offset_height": 800.0 }
                ],
                "viewport": { "scroll_y": 900.0, "height": 1000.0 }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["active"], "projects");
        assert_eq!(body["used_fallback"], false);
        assert_eq!(body["nav_href"], "#projects");
    }

    #[tokio::test]
    async fn test_contact_validation_and_success() {
        let (status, body) = post_json(
            "/api/v1/contact",
            json!({ "name": "Ada", "email": "nope", "subject": "Hi", "message": "Hello" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Please enter a valid email address.");

        let (status, body) = post_json(
            "/api/v1/contact",
            json!({ "name": "Ada", "email": "ada@example.com", "subject": "Hi", "message": "Hello" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["message"],
            "Thank you, Ada! Your message has been received. I'll get back to you soon at ada@example.com."
        );
        assert!(body["id"].is_string());
    }
}
