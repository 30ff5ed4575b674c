use crate::common::spawn_pool;
use bluegreen_core::pool::Pool;

#[tokio::test]
async fn test_green_version_with_release_id() {
    let green = spawn_pool(Pool::Green, Some("green-v2")).await;
    let resp = reqwest::get(green.url("/version")).await.unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(resp.headers()["x-release-id"], "green-v2");
    assert_eq!(resp.headers()["x-app-pool"], "green");
    assert_eq!(resp.headers()["content-type"], "application/json");

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"app": "green", "version": "green-v2"}));
}

#[tokio::test]
async fn test_blue_version_defaults() {
    let blue = spawn_pool(Pool::Blue, None).await;
    let resp = reqwest::get(blue.url("/version")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(resp.text().await.unwrap(), r#"{"app":"blue","version":"blue-v1"}"#);
}
