use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use serde_json::{json, Value};

use sofa_match::api::{create_router, AppState};
use sofa_match::models::{Item, Questionnaire};
use sofa_match::services::{CatalogSnapshot, InMemoryCatalogSource};

fn sofa(id: &str, price: u32, capacity: u32, width: u32, material: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Sofa {}", id),
        "maker": "Kagu Works",
        "description": "",
        "price": price,
        "capacity": capacity,
        "size": { "width": width, "depth": 85, "height": 80 },
        "material": material,
        "styles": ["modern"],
        "colors": [
            { "color_group": "gray", "name": "Stone", "hex": "#888888", "image_path": "/images/sofas/stone.png" }
        ],
        "default_color_index": 0,
        "features": ["pet_friendly"],
        "tags": []
    })
}

fn catalog() -> Vec<Item> {
    let raw = json!([
        sofa("fit-1", 45000, 2, 150, "fabric"),
        sofa("fit-2", 40000, 3, 158, "fabric"),
        sofa("wide-1", 42000, 2, 190, "fabric"),
        sofa("wide-2", 35000, 2, 210, "fabric"),
        sofa("leather-1", 48000, 2, 140, "leather"),
        sofa("pricey-1", 80000, 2, 150, "fabric"),
        sofa("pricey-2", 120000, 3, 150, "fabric"),
        sofa("single-1", 30000, 1, 100, "fabric"),
        sofa("single-2", 20000, 1, 90, "fabric"),
        sofa("pricey-3", 51000, 2, 150, "fabric"),
    ]);
    serde_json::from_value(raw).unwrap()
}

fn questionnaire() -> Questionnaire {
    serde_json::from_value(json!({
        "questions": [
            {
                "id": "budget",
                "text": "What is your budget?",
                "type": "single_select",
                "options": [
                    { "label": "Under 50,000", "value": "under_50000" },
                    { "label": "Over 300,000", "value": "over_300000" }
                ]
            }
        ]
    }))
    .unwrap()
}

fn create_test_server() -> TestServer {
    let source = Arc::new(InMemoryCatalogSource::new(catalog(), questionnaire()));
    let state = AppState::new(source, CatalogSnapshot::new(catalog(), questionnaire()));
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["items"], 10);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server();
    let id = "6f1c2d3e-4a5b-4c6d-8e7f-8091a2b3c4d5";
    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static(id),
        )
        .await;
    assert_eq!(response.header("x-request-id"), id);
}

#[tokio::test]
async fn test_get_questions() {
    let server = create_test_server();
    let response = server.get("/api/hearing/questions").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["questions"][0]["id"], "budget");
    assert_eq!(body["questions"][0]["type"], "single_select");
}

#[tokio::test]
async fn test_list_and_get_sofa() {
    let server = create_test_server();

    let response = server.get("/api/sofas").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["sofas"].as_array().unwrap().len(), 10);
    assert_eq!(body["sofas"][0]["id"], "fit-1");

    let response = server.get("/api/sofas/wide-2").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["sofa"]["price"], 35000.0);
    assert_eq!(body["sofa"]["colors"][0]["color_group"], "gray");
}

#[tokio::test]
async fn test_unknown_sofa_is_404() {
    let server = create_test_server();
    let response = server.get("/api/sofas/nope").await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("nope"));
}

#[tokio::test]
async fn test_recommend_without_answers() {
    let server = create_test_server();
    let response = server.post("/api/recommend").json(&json!({})).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["relaxed"], false);
    assert!(body.get("message").is_none());
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 5);
    for result in results {
        assert!(result["matchScore"].as_u64().unwrap() <= 100);
    }
}

#[tokio::test]
async fn test_recommend_relaxes_space() {
    let server = create_test_server();
    let response = server
        .post("/api/recommend")
        .json(&json!({
            "budget": "under_50000",
            "capacity": "2",
            "space": "under_150",
            "material": "fabric",
            "style": ["modern", "any"],
            "lifestyle": "pets"
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["relaxed"], true);
    assert!(body["message"].as_str().unwrap().contains("space"));

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 4);
    // 30 style + 10 color default + 20 budget (0.9) + 20 pets + 10 exact seats
    assert_eq!(results[0]["id"], "fit-1");
    assert_eq!(results[0]["matchScore"], 90);

    let scores: Vec<u64> = results
        .iter()
        .map(|r| r["matchScore"].as_u64().unwrap())
        .collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_recommend_strict_when_enough() {
    let server = create_test_server();
    let response = server
        .post("/api/recommend")
        .json(&json!({ "budget": "100000_200000", "capacity": 2 }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["relaxed"], false);
    for result in body["results"].as_array().unwrap() {
        assert!(result["price"].as_f64().unwrap() <= 200000.0);
        assert!(result["capacity"].as_u64().unwrap() >= 2);
    }
}

#[tokio::test]
async fn test_recommend_rejects_malformed_json() {
    let server = create_test_server();
    let response = server.post("/api/recommend").text("{not json").await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_reload_catalog() {
    let server = create_test_server();
    let response = server.post("/api/catalog/reload").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["items"], 10);
    assert_eq!(body["questions"], 1);
}
