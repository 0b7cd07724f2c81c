mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use common::{create_draft, harness, started_draft, Harness};
use league_draft_backend::{app, error::ErrorDto};
use serde_json::{json, Value};
use tower::ServiceExt;

fn router(h: &Harness) -> Router {
    app(h.engine.clone(), h.hub.clone())
}

async fn send(h: &Harness, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = router(h).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn error_of(value: Value) -> String {
    serde_json::from_value::<ErrorDto>(value).unwrap().error
}

#[tokio::test]
async fn create_and_fetch_a_draft() {
    let h = harness().await;
    let base = format!("/leagues/{}/drafts", h.league_id);

    let (status, created) = send(
        &h,
        "POST",
        &base,
        Some(json!({ "name": "Spring draft", "total_rounds": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "scheduled");
    assert_eq!(created["mode"], "synchronous");
    assert_eq!(created["pick_time_limit_seconds"], 120);
    assert_eq!(created["snake_draft"], true);

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = send(&h, "GET", &format!("{base}/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, listed) = send(&h, "GET", &base, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn pick_rejections_map_to_status_codes() {
    let h = harness().await;
    let (a, b) = (h.team(0), h.team(1));
    let draft_id = started_draft(&h, &[a, b], 2).await;
    let uri = format!("/leagues/{}/drafts/{}/pick", h.league_id, draft_id);

    let (status, body) = send(&h, "POST", &uri, Some(json!({ "team_id": b, "player_id": h.player(1) }))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(error_of(body), "not your turn");

    let (status, body) = send(&h, "POST", &uri, Some(json!({ "team_id": a, "player_id": h.player(1) }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["overall_pick_number"], 1);
    assert_eq!(body["team_name"], "Aces");

    let (status, body) = send(&h, "POST", &uri, Some(json!({ "team_id": b, "player_id": h.player(1) }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error_of(body), "player already drafted");

    let missing = format!("/leagues/{}/drafts/{}/pick", h.league_id, draft_id + 100);
    let (status, _) = send(&h, "POST", &missing, Some(json!({ "team_id": b, "player_id": h.player(2) }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn lifecycle_endpoints() {
    let h = harness().await;
    let draft_id = create_draft(&h, 1).await;
    let base = format!("/leagues/{}/drafts/{}", h.league_id, draft_id);

    let (status, body) = send(&h, "POST", &format!("{base}/start"), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error_of(body), "draft order must be set before starting");

    let order = json!({
        "order": [
            { "team_id": h.team(1), "position": 2 },
            { "team_id": h.team(0), "position": 1 }
        ]
    });
    let (status, body) = send(&h, "POST", &format!("{base}/order"), Some(order)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["team_id"], h.team(0));
    assert_eq!(body[1]["team_id"], h.team(1));

    let (status, body) = send(&h, "POST", &format!("{base}/start"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "in_progress");

    let (status, body) = send(&h, "POST", &format!("{base}/pause"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "paused");

    let (status, _) = send(&h, "POST", &format!("{base}/pause"), Some(json!({ "reason": "again" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(&h, "POST", &format!("{base}/resume"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "in_progress");

    let (status, body) = send(&h, "POST", &format!("{base}/cancel"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "cancelled");
}

#[tokio::test]
async fn invalid_settings_are_unprocessable() {
    let h = harness().await;

    let (status, _) = send(
        &h,
        "POST",
        &format!("/leagues/{}/drafts", h.league_id),
        Some(json!({ "name": "Broken", "total_rounds": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(
        &h,
        "POST",
        &format!("/leagues/{}/drafts", h.league_id),
        Some(json!({ "name": "Endless", "total_rounds": i64::MAX })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(
        &h,
        "POST",
        "/leagues/4242/drafts",
        Some(json!({ "name": "Orphan", "total_rounds": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn teams_players_and_transactions() {
    let h = harness().await;

    let (status, league) = send(&h, "POST", "/leagues", Some(json!({ "name": "Winter League", "max_teams": 2 }))).await;
    assert_eq!(status, StatusCode::CREATED);
    let league_id = league["id"].as_i64().unwrap();
    let teams = format!("/leagues/{league_id}/teams");

    for name in ["North", "South"] {
        let (status, _) = send(&h, "POST", &teams, Some(json!({ "name": name }))).await;
        assert_eq!(status, StatusCode::CREATED);
    }
    let (status, _) = send(&h, "POST", &teams, Some(json!({ "name": "East" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, listed) = send(&h, "GET", &teams, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 2);

    let (status, player) = send(
        &h,
        "POST",
        "/players",
        Some(json!({ "first_name": "Sam", "last_name": "Slugger", "primary_position": "1B" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(player["draft_rank"], Value::Null);

    let draft_id = started_draft(&h, &[h.team(0), h.team(1)], 1).await;
    let base = format!("/leagues/{}/drafts/{}", h.league_id, draft_id);
    send(&h, "POST", &format!("{base}/pick"), Some(json!({ "team_id": h.team(0), "player_id": h.player(1) }))).await;

    let (status, available) = send(&h, "GET", &format!("{base}/available-players?limit=2"), None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = available
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![h.player(2), h.player(3)]);

    let (status, transactions) = send(&h, "GET", &format!("/leagues/{}/transactions", h.league_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(transactions.as_array().unwrap().len(), 1);
    assert_eq!(transactions[0]["transaction_type"], "draft");
}

#[tokio::test]
async fn trade_endpoint() {
    let h = harness().await;
    let draft_id = started_draft(&h, &[h.team(0), h.team(1)], 2).await;
    let uri = format!("/leagues/{}/drafts/{}/picks/4/trade", h.league_id, draft_id);

    let (status, body) = send(&h, "POST", &uri, Some(json!({ "team_id": h.team(2) }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["team_name"], "Cyclones");
    assert_eq!(body["original_team_name"], "Aces");

    let (status, picks) = send(&h, "GET", &format!("/leagues/{}/drafts/{}/picks", h.league_id, draft_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(picks[3]["team_id"], h.team(2));
}
