use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::feedback::adapters::outbound::in_memory::InMemoryEntries;
use crate::shell::http::router;
use crate::tests::fixtures::state::{ADMIN_KEY, DELETE_KEY, make_test_state};

async fn app() -> (Arc<InMemoryEntries>, Router) {
    let persistence = Arc::new(InMemoryEntries::new());
    let state = make_test_state(persistence.clone()).await;
    (persistence, router(state))
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn submit(app: &Router, colleague: &str, note: &str) {
    let response = send(
        app,
        json_request(
            "POST",
            "/feedback",
            json!({ "colleague": colleague, "note": note }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

async fn wall(app: &Router, uri: &str) -> Value {
    body_json(send(app, Request::get(uri).body(Body::empty()).unwrap()).await).await
}

#[tokio::test]
async fn submitted_feedback_shows_up_newest_first() {
    let (persistence, app) = app().await;

    submit(&app, "Merieme Dissi", "Fixed printer").await;
    submit(&app, "Zif Zakaria", "Replaced cable").await;
    submit(&app, "Abichry Adil", "Reset password").await;

    let json = wall(&app, "/feedback").await;
    let names: Vec<_> = json["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Abichry Adil", "Zif Zakaria", "Merieme Dissi"]);
    assert_eq!(json["admin"], false);
    assert_eq!(persistence.snapshot().await.unwrap().len(), 3);
}

#[tokio::test]
async fn manual_entry_uses_the_typed_identity() {
    let (_, app) = app().await;

    let response = send(
        &app,
        json_request(
            "POST",
            "/feedback",
            json!({
                "colleague": "Other (Manual Entry)",
                "full_name": "Sara Idrissi",
                "department": "Logistics",
                "mode": "Specific IT Project",
                "task_detail": "ERP migration",
                "note": "Moved the stock module"
            }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let entry = body_json(response).await;
    assert_eq!(entry["name"], "Sara Idrissi");
    assert_eq!(entry["dept"], "Logistics");
    assert_eq!(entry["tag"], "ERP migration");
}

#[tokio::test]
async fn rejected_submissions_leave_the_wall_untouched() {
    let (_, app) = app().await;

    let missing_note = send(
        &app,
        json_request("POST", "/feedback", json!({ "colleague": "Zif Zakaria", "note": "" })),
    )
    .await;
    let unknown = send(
        &app,
        json_request("POST", "/feedback", json!({ "colleague": "Nobody", "note": "x" })),
    )
    .await;

    assert_eq!(missing_note.status(), StatusCode::BAD_REQUEST);
    assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);
    assert_eq!(wall(&app, "/feedback").await["entries"], json!([]));
}

#[tokio::test]
async fn admin_deletes_by_feed_index() {
    let (_, app) = app().await;
    submit(&app, "Merieme Dissi", "first").await;
    submit(&app, "Zif Zakaria", "second").await;

    let admin_wall = wall(&app, &format!("/feedback?admin={ADMIN_KEY}")).await;
    assert_eq!(admin_wall["admin"], true);
    let oldest = admin_wall["entries"][1]["index"].as_i64().unwrap();

    let wrong_key = send(
        &app,
        json_request(
            "DELETE",
            &format!("/feedback/{oldest}?admin={ADMIN_KEY}"),
            json!({ "delete_key": "guess" }),
        ),
    )
    .await;
    assert_eq!(wrong_key.status(), StatusCode::FORBIDDEN);

    let deleted = send(
        &app,
        json_request(
            "DELETE",
            &format!("/feedback/{oldest}?admin={ADMIN_KEY}"),
            json!({ "delete_key": DELETE_KEY }),
        ),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let json = wall(&app, "/feedback").await;
    assert_eq!(json["entries"].as_array().unwrap().len(), 1);
    assert_eq!(json["entries"][0]["name"], "Zif Zakaria");
    assert_eq!(json["entries"][0]["index"], 0);
}

#[tokio::test]
async fn delete_without_admin_mode_is_forbidden() {
    let (_, app) = app().await;
    submit(&app, "Merieme Dissi", "first").await;

    let response = send(
        &app,
        json_request("DELETE", "/feedback/0", json!({ "delete_key": DELETE_KEY })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], "Admin mode required");
    assert_eq!(
        wall(&app, "/feedback").await["entries"]
            .as_array()
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn export_is_stable_between_calls() {
    let (_, app) = app().await;
    submit(&app, "Merieme Dissi", "Fixed printer, again").await;

    let first = send(&app, Request::get("/feedback/export").body(Body::empty()).unwrap()).await;
    let second = send(&app, Request::get("/feedback/export").body(Body::empty()).unwrap()).await;

    let first = first.into_body().collect().await.unwrap().to_bytes();
    let second = second.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(first, second);
    let text = String::from_utf8(first.to_vec()).unwrap();
    assert!(text.starts_with("name,dept,tag,note,time\n"));
    assert!(text.contains("\"Fixed printer, again\""));
}

#[tokio::test]
async fn graphql_submits_and_lists_feedback() {
    let (_, app) = app().await;

    let mutation = send(
        &app,
        json_request(
            "POST",
            "/gql",
            json!({
                "query": r#"mutation { submitFeedback(input: { colleague: "Merieme Dissi", mode: ALL_TECHNICAL_ASSISTANCE, note: "Fixed printer" }) { name dept tag } }"#
            }),
        ),
    )
    .await;
    let mutation = body_json(mutation).await;
    assert_eq!(
        mutation["data"]["submitFeedback"],
        json!({
            "name": "Merieme Dissi",
            "dept": "Chargé D'approvisionnement",
            "tag": "All Technical Assistance"
        })
    );

    let query = send(
        &app,
        json_request(
            "POST",
            "/gql",
            json!({ "query": "{ isAdmin feedback { index name note } }" }),
        ),
    )
    .await;
    let query = body_json(query).await;
    assert_eq!(query["data"]["isAdmin"], false);
    assert_eq!(
        query["data"]["feedback"],
        json!([{ "index": 0, "name": "Merieme Dissi", "note": "Fixed printer" }])
    );
}

#[tokio::test]
async fn graphql_submission_groups_the_form_fields() {
    let (_, app) = app().await;
    let mutation = r#"mutation {
        submitFeedback(input: {
            colleague: "Other (Manual Entry)",
            fullName: "Sara Idrissi",
            department: "Logistics",
            mode: SPECIFIC_IT_PROJECT,
            taskDetail: "ERP migration",
            note: "Moved the stock module",
            date: "2024-12-02",
            time: "08:30"
        }) { name dept tag time }
    }"#;

    let as_admin = send(
        &app,
        json_request(
            "POST",
            &format!("/gql?admin={ADMIN_KEY}"),
            json!({ "query": mutation }),
        ),
    )
    .await;

    assert_eq!(
        body_json(as_admin).await["data"]["submitFeedback"],
        json!({
            "name": "Sara Idrissi",
            "dept": "Logistics",
            "tag": "ERP migration",
            "time": "08:30 | 02 Dec 2024"
        })
    );
}

#[tokio::test]
async fn graphql_delete_requires_admin_mode() {
    let (_, app) = app().await;
    submit(&app, "Merieme Dissi", "first").await;
    let mutation = format!(
        r#"mutation {{ deleteFeedback(index: 0, deleteKey: "{DELETE_KEY}") }}"#
    );

    let denied = send(&app, json_request("POST", "/gql", json!({ "query": mutation }))).await;
    let denied = body_json(denied).await;
    assert_eq!(denied["errors"][0]["message"], "Admin mode required");
    assert_eq!(denied["errors"][0]["extensions"]["status"], 403);

    let allowed = send(
        &app,
        json_request(
            "POST",
            &format!("/gql?admin={ADMIN_KEY}"),
            json!({ "query": mutation }),
        ),
    )
    .await;
    assert_eq!(body_json(allowed).await["data"]["deleteFeedback"], true);
    assert_eq!(wall(&app, "/feedback").await["entries"], json!([]));
}
