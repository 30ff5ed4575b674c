use crate::common::{get, spawn_pool};
use bluegreen_core::pool::Pool;

#[tokio::test]
async fn test_chaos_on_blue_leaves_green_serving() {
    let blue = spawn_pool(Pool::Blue, None).await;
    let green = spawn_pool(Pool::Green, None).await;
    let client = reqwest::Client::new();

    assert_eq!(get(&client, &blue, "/healthz").await, (200, "OK".into()));
    assert_eq!(
        get(&client, &blue, "/chaos/start").await,
        (200, "Chaos mode enabled for Blue".into())
    );

    assert_eq!(
        get(&client, &blue, "/healthz").await,
        (500, "💥 Simulated Blue failure".into())
    );
    assert_eq!(get(&client, &green, "/healthz").await, (200, "OK".into()));
    assert_eq!(
        get(&client, &green, "/").await,
        (200, "💚 Green App - Version 1".into())
    );
    assert!(!green.state.chaos.is_enabled());

    assert_eq!(
        get(&client, &blue, "/chaos/stop").await,
        (200, "Chaos mode disabled for Blue".into())
    );
    assert_eq!(get(&client, &blue, "/healthz").await, (200, "OK".into()));
}

#[tokio::test]
async fn test_post_toggles_chaos() {
    let green = spawn_pool(Pool::Green, None).await;
    let client = reqwest::Client::new();

    let resp = client.post(green.url("/chaos/start")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(resp.text().await.unwrap(), "Chaos mode enabled for Green");

    assert_eq!(
        get(&client, &green, "/version").await,
        (500, "💥 Simulated Green failure".into())
    );

    let resp = client.post(green.url("/chaos/stop")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(get(&client, &green, "/healthz").await, (200, "OK".into()));
}
