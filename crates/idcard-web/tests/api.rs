//! HTTP-level tests for the validation endpoint.

use axum_test::TestServer;
use serde_json::{Value, json};

use idcard_web::app;

fn server() -> TestServer {
    TestServer::new(app()).expect("test server")
}

#[tokio::test]
async fn validate_endpoint_partitions_ids() {
    let response = server()
        .post("/api/validate")
        .json(&json!({
            "input_text": "110101199003074899\n1101 0119 9003 0748 99\n110101199003074897\n"
        }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["total"], 3);
    assert_eq!(body["valid_count"], 2);
    assert_eq!(body["invalid_count"], 1);
    assert_eq!(body["valid_ids"][0]["area"], "北京市");
    assert_eq!(body["valid_ids"][0]["birth_date"], "1990-03-07");
    assert_eq!(body["valid_ids"][0]["gender"], "male");
    // The spaced line normalizes to the same number as the first.
    assert_eq!(body["valid_ids"][1]["processed"], "110101199003074899");
    assert_eq!(body["valid_ids"][1]["original"], "1101 0119 9003 0748 99");
    assert_eq!(body["invalid_ids"][0]["original"], "110101199003074897");
    assert_eq!(body["invalid_ids"][0]["errors"][0], "校验码不正确");
}

#[tokio::test]
async fn blank_input_is_rejected() {
    let response = server()
        .post("/api/validate")
        .json(&json!({ "input_text": "  \n\n  " }))
        .await;
    response.assert_status_bad_request();
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn missing_input_field_is_rejected() {
    let response = server().post("/api/validate").json(&json!({})).await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn health_reports_ok() {
    let response = server().get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}
