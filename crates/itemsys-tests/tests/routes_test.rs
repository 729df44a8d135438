//! Route-table coverage: every (method, path) pair reaches its backend
//! operation with the bound request.

use std::sync::Arc;

use itemsys_api::{create_router, AppState};
use itemsys_rpc::testing::TestServer;
use itemsys_tests::{StubItemService, StubUserService};
use serde_json::{json, Value};

struct Gateway {
    server: TestServer,
    users: Arc<StubUserService>,
    items: Arc<StubItemService>,
}

impl Gateway {
    async fn start() -> Self {
        let users = Arc::new(StubUserService::new());
        let items = Arc::new(StubItemService::new());
        let state = AppState::new(users.clone(), items.clone());
        let server = TestServer::start(create_router(state))
            .await
            .expect("start test server");
        Self {
            server,
            users,
            items,
        }
    }

    async fn get(&self, path: &str) -> reqwest::StatusCode {
        self.server
            .client
            .get(self.server.url(path))
            .send()
            .await
            .unwrap()
            .status()
    }

    async fn delete(&self, path: &str) -> reqwest::StatusCode {
        self.server
            .client
            .delete(self.server.url(path))
            .send()
            .await
            .unwrap()
            .status()
    }

    async fn post(&self, path: &str, body: Value) -> reqwest::StatusCode {
        self.server
            .client
            .post(self.server.url(path))
            .json(&body)
            .send()
            .await
            .unwrap()
            .status()
    }

    async fn put(&self, path: &str, body: Value) -> reqwest::StatusCode {
        self.server
            .client
            .put(self.server.url(path))
            .json(&body)
            .send()
            .await
            .unwrap()
            .status()
    }
}

#[tokio::test]
async fn user_routes_reach_their_operations() {
    let gw = Gateway::start().await;

    assert_eq!(gw.get("/item-system/users/42").await, 200);
    assert_eq!(
        gw.put("/item-system/users/42", json!({"username": "ann"})).await,
        200
    );
    assert_eq!(gw.delete("/item-system/users/42").await, 200);
    assert_eq!(gw.post("/item-system/users", json!({"page": 1})).await, 200);
    assert_eq!(gw.get("/item-system/users/42/eco-points").await, 200);
    assert_eq!(
        gw.put("/item-system/users/42/eco-points", json!({"points": 5})).await,
        200
    );
    assert_eq!(
        gw.post("/item-system/users/42/eco-points/history", json!({})).await,
        200
    );

    let ops: Vec<String> = gw.users.requests().into_iter().map(|(op, _)| op).collect();
    assert_eq!(
        ops,
        vec![
            "GetUserProfile",
            "UpdateUserProfile",
            "DeleteUser",
            "GetUsers",
            "GetEcoPoints",
            "AddEcoPoints",
            "GetEcoPointsHistory",
        ]
    );
    assert_eq!(gw.items.calls(), 0);
}

#[tokio::test]
async fn item_routes_reach_their_operations() {
    let gw = Gateway::start().await;

    assert_eq!(
        gw.post(
            "/item-system/items/addItem",
            json!({"name": "bicycle", "owner_id": "u-1"}),
        )
        .await,
        200
    );
    assert_eq!(
        gw.put("/item-system/items/7", json!({"name": "bike"})).await,
        200
    );
    assert_eq!(gw.delete("/item-system/items/7").await, 200);
    assert_eq!(gw.get("/item-system/items/7").await, 200);
    assert_eq!(gw.post("/item-system/items", json!({"limit": 10})).await, 200);
    assert_eq!(
        gw.post("/item-system/items/search", json!({"keyword": "bike"})).await,
        200
    );

    let ops: Vec<String> = gw.items.requests().into_iter().map(|(op, _)| op).collect();
    assert_eq!(
        ops,
        vec![
            "AddItem",
            "UpdateItem",
            "DeleteItem",
            "GetItem",
            "ListItems",
            "SearchItems",
        ]
    );

    // The path identifier flowed into the bound requests.
    assert_eq!(gw.items.last_request("UpdateItem").unwrap()["item_id"], "7");
    assert_eq!(gw.items.last_request("DeleteItem").unwrap()["item_id"], "7");
    assert_eq!(gw.users.calls(), 0);
}

#[tokio::test]
async fn category_challenge_and_tip_routes_reach_their_operations() {
    let gw = Gateway::start().await;

    assert_eq!(
        gw.post("/item-system/category/catogories", json!({"name": "tools"})).await,
        200
    );
    assert_eq!(
        gw.post(
            "/item-system/ecosystem/eco-challenge",
            json!({"title": "bike to work"}),
        )
        .await,
        200
    );
    assert_eq!(
        gw.post(
            "/item-system/ecosystem/participate",
            json!({"challenge_id": "ch-1", "user_id": "u-1"}),
        )
        .await,
        200
    );
    assert_eq!(
        gw.put(
            "/item-system/ecosystem/update",
            json!({"challenge_id": "ch-1", "user_id": "u-1", "progress": 100}),
        )
        .await,
        200
    );
    assert_eq!(
        gw.post(
            "/item-system/ecosystem/eco-tips",
            json!({"title": "reuse jars", "content": "wash and reuse glass jars"}),
        )
        .await,
        200
    );
    assert_eq!(
        gw.post("/item-system/ecosystem/eco-tips/all", json!({})).await,
        200
    );

    let ops: Vec<String> = gw.items.requests().into_iter().map(|(op, _)| op).collect();
    assert_eq!(
        ops,
        vec![
            "AddItemCategory",
            "CreateEcoChallenge",
            "ParticipateEcoChallenge",
            "UpdateEcoChallengeProgress",
            "CreateEcoTip",
            "GetEcoTips",
        ]
    );
}

#[tokio::test]
async fn rating_recycling_and_statistics_routes_reach_their_operations() {
    let gw = Gateway::start().await;

    assert_eq!(
        gw.post(
            "/item-system/ratings/add",
            json!({"user_id": "u-1", "rater_id": "u-2", "score": 4.5}),
        )
        .await,
        200
    );
    assert_eq!(
        gw.post("/item-system/ratings/GetAll", json!({"user_id": "u-1"})).await,
        200
    );
    assert_eq!(
        gw.post(
            "/item-system/recyclings",
            json!({"name": "north depot", "address": "1 Elm St"}),
        )
        .await,
        200
    );
    assert_eq!(gw.get("/item-system/recyclings/search?city=Oslo").await, 200);
    assert_eq!(
        gw.get("/item-system/recyclings?user_id=u-1&center_id=rc-1").await,
        200
    );
    assert_eq!(gw.post("/item-system/statistics", json!({})).await, 200);

    let ops: Vec<String> = gw.items.requests().into_iter().map(|(op, _)| op).collect();
    assert_eq!(
        ops,
        vec![
            "AddRating",
            "GetRatings",
            "AddRecyclingCenter",
            "SearchRecyclingCenters",
            "SubmitItemsForRecycling",
            "Statistics",
        ]
    );
}

#[tokio::test]
async fn swap_routes_reach_their_operations() {
    let gw = Gateway::start().await;

    assert_eq!(
        gw.post(
            "/item-system/swaps",
            json!({
                "offered_item_id": "i-1",
                "requested_item_id": "i-2",
                "from_user_id": "u-1",
                "to_user_id": "u-2"
            }),
        )
        .await,
        200
    );
    assert_eq!(
        gw.put("/item-system/swaps/accept", json!({"swap_id": "sw-1"})).await,
        200
    );
    assert_eq!(
        gw.put("/item-system/swaps/reject", json!({"swap_id": "sw-1"})).await,
        200
    );
    assert_eq!(gw.put("/item-system/swaps/sw-9", json!({})).await, 200);

    let ops: Vec<String> = gw.items.requests().into_iter().map(|(op, _)| op).collect();
    assert_eq!(
        ops,
        vec![
            "SendSwapRequest",
            "AcceptSwapRequest",
            "RejectSwapRequest",
            "ListSwapRequests",
        ]
    );

    // The literal segments won over the {swap_id} capture...
    assert_eq!(
        gw.items.last_request("AcceptSwapRequest").unwrap()["swap_id"],
        "sw-1"
    );
    // ...and the capture bound the listing filter.
    assert_eq!(
        gw.items.last_request("ListSwapRequests").unwrap()["swap_id"],
        "sw-9"
    );
}
