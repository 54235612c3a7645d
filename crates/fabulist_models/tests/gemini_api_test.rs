//! Integration tests against the real Gemini API.
//!
//! These tests require a `GEMINI_API_KEY` (read from the environment
//! or a `.env` file) and are ignored by default; run them with
//! `cargo test -- --ignored`.

use fabulist_core::{GenerateRequest, Message};
use fabulist_interface::{FabulistDriver, JsonMode};
use fabulist_models::GeminiClient;

fn live_client() -> GeminiClient {
    dotenvy::dotenv().ok();
    GeminiClient::new().expect("GEMINI_API_KEY must be set for live tests")
}

#[tokio::test]
#[ignore] // Requires GEMINI_API_KEY
async fn generates_freeform_text() {
    let client = live_client();

    let request = GenerateRequest {
        messages: vec![Message::user("Write one sentence about rain.")],
        max_tokens: Some(100),
        ..Default::default()
    };

    let response = client.generate(&request).await.expect("generation failed");
    assert!(!response.text().trim().is_empty());
}

#[tokio::test]
#[ignore] // Requires GEMINI_API_KEY
async fn generates_schema_conforming_json() {
    let client = live_client();

    let schema = serde_json::json!({
        "type": "object",
        "properties": {
            "title": { "type": "string" },
            "synopsis": { "type": "string" }
        },
        "required": ["title", "synopsis"]
    });
    let request = GenerateRequest {
        messages: vec![Message::user(
            "Invent a one-line premise for a detective story.",
        )],
        ..Default::default()
    };

    let value = client
        .generate_json(&request, &schema)
        .await
        .expect("structured generation failed");
    assert!(value.get("title").is_some());
    assert!(value.get("synopsis").is_some());
}
