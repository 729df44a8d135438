//! End-to-end dispatch tests against stub backends
//!
//! These run the real router in-process: HTTP request in, stub backend
//! behind the service traits, JSON response out.

use std::sync::Arc;
use std::time::{Duration, Instant};

use itemsys_api::{create_router, AppState};
use itemsys_core::models::UserProfile;
use itemsys_rpc::testing::TestServer;
use itemsys_tests::{StubBehavior, StubItemService, StubUserService};
use serde_json::{json, Value};

struct Gateway {
    server: TestServer,
    users: Arc<StubUserService>,
    items: Arc<StubItemService>,
}

impl Gateway {
    async fn start() -> Self {
        Self::start_with_timeout(Duration::from_secs(5)).await
    }

    async fn start_with_timeout(timeout: Duration) -> Self {
        let users = Arc::new(StubUserService::new());
        let items = Arc::new(StubItemService::new());
        let state =
            AppState::new(users.clone(), items.clone()).with_call_timeout(timeout);
        let server = TestServer::start(create_router(state))
            .await
            .expect("start test server");
        Self {
            server,
            users,
            items,
        }
    }

    fn url(&self, path: &str) -> String {
        self.server.url(path)
    }
}

// =============================================================================
// Success path
// =============================================================================

#[tokio::test]
async fn get_user_profile_returns_the_backend_result_as_json() {
    let gw = Gateway::start().await;
    gw.users.set_profile(UserProfile {
        user_id: "u-1".to_string(),
        username: "Ann".to_string(),
        email: None,
        full_name: None,
        bio: None,
        eco_points: None,
        created_at: None,
    });

    let response = gw
        .server
        .client
        .get(gw.url("/item-system/users/42"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["username"], "Ann");
    assert_eq!(body["user_id"], "42");
}

#[tokio::test]
async fn health_endpoint_answers_without_touching_backends() {
    let gw = Gateway::start().await;

    let response = gw.server.client.get(gw.url("/health")).send().await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(gw.users.calls() + gw.items.calls(), 0);
}

#[tokio::test]
async fn unknown_paths_fall_through_to_404() {
    let gw = Gateway::start().await;

    let response = gw
        .server
        .client
        .get(gw.url("/item-system/unknown"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
    assert_eq!(gw.users.calls() + gw.items.calls(), 0);
}

// =============================================================================
// Binding precedence
// =============================================================================

#[tokio::test]
async fn path_parameter_wins_over_body_field() {
    let gw = Gateway::start().await;

    let response = gw
        .server
        .client
        .put(gw.url("/item-system/users/42"))
        .json(&json!({"user_id": "1", "username": "Bea"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let seen = gw.users.last_request("UpdateUserProfile").unwrap();
    assert_eq!(seen["user_id"], "42");
    assert_eq!(seen["username"], "Bea");
}

#[tokio::test]
async fn eco_point_credits_bind_the_path_user() {
    let gw = Gateway::start().await;

    let response = gw
        .server
        .client
        .put(gw.url("/item-system/users/42/eco-points"))
        .json(&json!({"user_id": "9", "points": 25}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let seen = gw.users.last_request("AddEcoPoints").unwrap();
    assert_eq!(seen["user_id"], "42");
    assert_eq!(seen["points"], 25);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["user_id"], "42");
    assert_eq!(body["points"], 25);
}

#[tokio::test]
async fn query_fields_bind_on_query_routes() {
    let gw = Gateway::start().await;

    let response = gw
        .server
        .client
        .get(gw.url("/item-system/recyclings/search?city=Oslo&material=glass"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let seen = gw.items.last_request("SearchRecyclingCenters").unwrap();
    assert_eq!(seen["city"], "Oslo");
    assert_eq!(seen["material"], "glass");
}

#[tokio::test]
async fn query_overrides_the_optional_body_on_recycling_submission() {
    let gw = Gateway::start().await;

    let response = gw
        .server
        .client
        .get(gw.url("/item-system/recyclings?user_id=7&center_id=rc-2"))
        .json(&json!({"user_id": "stale", "item_ids": ["i-1", "i-2"]}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let seen = gw.items.last_request("SubmitItemsForRecycling").unwrap();
    assert_eq!(seen["user_id"], "7");
    assert_eq!(seen["center_id"], "rc-2");
    assert_eq!(seen["item_ids"], json!(["i-1", "i-2"]));
}

// =============================================================================
// Decode failures never reach a backend
// =============================================================================

#[tokio::test]
async fn malformed_body_is_rejected_before_any_backend_call() {
    let gw = Gateway::start().await;

    let response = gw
        .server
        .client
        .post(gw.url("/item-system/items"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
    assert_eq!(gw.items.calls(), 0);
}

#[tokio::test]
async fn missing_body_on_a_body_required_route_is_a_400() {
    let gw = Gateway::start().await;

    let response = gw
        .server
        .client
        .post(gw.url("/item-system/users"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    assert_eq!(gw.users.calls(), 0);
}

#[tokio::test]
async fn wrongly_shaped_body_is_a_400() {
    let gw = Gateway::start().await;

    // score must be a number
    let response = gw
        .server
        .client
        .post(gw.url("/item-system/ratings/add"))
        .json(&json!({"user_id": "u-1", "rater_id": "u-2", "score": "five"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    assert_eq!(gw.items.calls(), 0);
}

// =============================================================================
// Failure translation
// =============================================================================

#[tokio::test]
async fn backend_not_found_maps_to_404() {
    let gw = Gateway::start().await;
    gw.items.set_behavior(StubBehavior::NotFound);

    let response = gw
        .server
        .client
        .delete(gw.url("/item-system/items/7"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("no such entity"));
}

#[tokio::test]
async fn backend_invalid_argument_maps_to_400() {
    let gw = Gateway::start().await;
    gw.users.set_behavior(StubBehavior::InvalidArgument);

    let response = gw
        .server
        .client
        .put(gw.url("/item-system/users/42"))
        .json(&json!({"username": "x"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn other_backend_failures_map_to_500_with_a_generic_message() {
    let gw = Gateway::start().await;

    for behavior in [StubBehavior::Internal, StubBehavior::Unavailable] {
        gw.items.set_behavior(behavior);

        let response = gw
            .server
            .client
            .get(gw.url("/item-system/items/7"))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 500);
        let body: Value = response.json().await.unwrap();
        // No backend detail leaks into the envelope.
        assert_eq!(body["error"], "backend request failed");
    }
}

// =============================================================================
// Deadline
// =============================================================================

#[tokio::test]
async fn hung_backend_fails_within_the_deadline() {
    let gw = Gateway::start_with_timeout(Duration::from_millis(300)).await;
    gw.users.set_behavior(StubBehavior::Hang);

    let started = Instant::now();
    let response = gw
        .server
        .client
        .get(gw.url("/item-system/users/42"))
        .send()
        .await
        .unwrap();
    let elapsed = started.elapsed();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "backend request timed out");
    // Deadline plus scheduling tolerance; well under the client timeout.
    assert!(elapsed < Duration::from_millis(900), "took {:?}", elapsed);
    assert!(elapsed >= Duration::from_millis(250), "took {:?}", elapsed);
}

#[tokio::test]
async fn shutdown_cancels_an_in_flight_backend_call() {
    let users = Arc::new(StubUserService::new());
    let items = Arc::new(StubItemService::new());
    let shutdown = tokio_util::sync::CancellationToken::new();
    let state = AppState::new(users.clone(), items.clone())
        .with_shutdown_token(shutdown.clone());
    let server = TestServer::start(create_router(state))
        .await
        .expect("start test server");

    users.set_behavior(StubBehavior::Hang);

    let client = server.client.clone();
    let url = server.url("/item-system/users/42");
    let request = tokio::spawn(async move { client.get(url).send().await.unwrap().status() });

    tokio::time::sleep(Duration::from_millis(50)).await;
    shutdown.cancel();

    let status = tokio::time::timeout(Duration::from_secs(1), request)
        .await
        .expect("request should be cancelled well before the deadline")
        .unwrap();
    assert_eq!(status, 500);
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test]
async fn a_slow_route_does_not_delay_an_independent_one() {
    let gw = Gateway::start().await;
    gw.users.set_behavior(StubBehavior::Delay(Duration::from_millis(500)));

    let slow_client = gw.server.client.clone();
    let slow_url = gw.url("/item-system/users/42");
    let slow = tokio::spawn(async move {
        let started = Instant::now();
        let response = slow_client.get(slow_url).send().await.unwrap();
        (response.status(), started.elapsed())
    });

    // Give the slow request a head start so both are in flight.
    tokio::time::sleep(Duration::from_millis(50)).await;

    let started = Instant::now();
    let response = gw
        .server
        .client
        .get(gw.url("/item-system/items/7"))
        .send()
        .await
        .unwrap();
    let fast_elapsed = started.elapsed();

    assert_eq!(response.status(), 200);
    assert!(
        fast_elapsed < Duration::from_millis(300),
        "fast request was held up: {:?}",
        fast_elapsed
    );

    let (slow_status, slow_elapsed) = slow.await.unwrap();
    assert_eq!(slow_status, 200);
    assert!(slow_elapsed >= Duration::from_millis(450));
}
