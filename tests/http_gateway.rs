//! Runs the HTTP gateway against an in-process stub of the expense service.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use spendtrack::api::{ExpenseApi, HttpExpenseApi};
use spendtrack::error::ApiError;
use spendtrack::models::{ExpenseCategory, ExpenseDraft, ExpenseId, Money};
use spendtrack::store::ExpenseStore;

#[derive(Clone, Default)]
struct StubState {
    records: Arc<Mutex<Vec<Value>>>,
    next_id: Arc<Mutex<u32>>,
}

impl StubState {
    fn seeded(records: Vec<Value>) -> Self {
        let state = Self::default();
        *state.records.lock().unwrap() = records;
        state
    }

    fn records(&self) -> Vec<Value> {
        self.records.lock().unwrap().clone()
    }
}

async fn list(State(state): State<StubState>) -> Json<Vec<Value>> {
    Json(state.records())
}

async fn create(
    State(state): State<StubState>,
    Json(mut body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let id = {
        let mut next = state.next_id.lock().unwrap();
        *next += 1;
        format!("65f0c0ffee{:02}", *next)
    };
    body["_id"] = json!(id);
    state.records.lock().unwrap().push(body.clone());
    (StatusCode::CREATED, Json(body))
}

async fn update(
    State(state): State<StubState>,
    Path(id): Path<String>,
    Json(mut body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut records = state.records.lock().unwrap();
    match records.iter_mut().find(|r| r["_id"] == json!(id)) {
        Some(record) => {
            body["_id"] = json!(id);
            *record = body;
            (StatusCode::OK, Json(json!({ "message": "Expense updated" })))
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Expense not found" })),
        ),
    }
}

async fn remove(State(state): State<StubState>, Path(id): Path<String>) -> StatusCode {
    let mut records = state.records.lock().unwrap();
    let before = records.len();
    records.retain(|r| r["_id"] != json!(id));
    if records.len() < before {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn broken() -> &'static str {
    "<html>definitely not json</html>"
}

async fn failing() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable\n")
}

async fn spawn_stub(state: StubState) -> SocketAddr {
    let app = Router::new()
        .route("/api/expenses", get(list).post(create))
        .route("/api/expenses/{id}", axum::routing::put(update).delete(remove))
        .route("/broken/expenses", get(broken))
        .route("/failing/expenses", get(failing))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client(addr: SocketAddr, prefix: &str) -> HttpExpenseApi {
    HttpExpenseApi::new(&format!("http://{}/{}", addr, prefix), Duration::from_secs(5)).unwrap()
}

fn draft(title: &str, cents: i64, date: &str, category: ExpenseCategory) -> ExpenseDraft {
    ExpenseDraft::new(title, Money::from_cents(cents), date.parse().unwrap(), category)
}

#[tokio::test]
async fn list_accepts_underscore_id_and_skips_bad_records() {
    let state = StubState::seeded(vec![
        json!({"_id": "a1", "title": "Groceries", "amount": 42.5, "date": "2024-01-05", "category": "food"}),
        json!({"id": 7, "title": "Bus", "amount": 2.75, "date": "2024-01-06", "category": "transportation"}),
        json!({"_id": "bad-date", "title": "x", "amount": 1.0, "date": "05/01/2024", "category": "food"}),
        json!({"_id": "bad-cat", "title": "x", "amount": 1.0, "date": "2024-01-07", "category": "snacks"}),
        json!({"_id": "negative", "title": "x", "amount": -3.0, "date": "2024-01-07", "category": "food"}),
        json!({"title": "no id", "amount": 1.0, "date": "2024-01-07", "category": "food"}),
        json!("not even an object"),
    ]);
    let addr = spawn_stub(state).await;

    let expenses = client(addr, "api").list().await.unwrap();

    assert_eq!(expenses.len(), 2);
    assert_eq!(expenses[0].id, ExpenseId::new("a1"));
    assert_eq!(expenses[0].amount, Money::from_cents(4250));
    assert_eq!(expenses[1].id, ExpenseId::new("7"));
    assert_eq!(expenses[1].category, ExpenseCategory::Transportation);
}

#[tokio::test]
async fn create_update_delete_round_trip() {
    let state = StubState::default();
    let addr = spawn_stub(state.clone()).await;
    let api = client(addr, "api/");

    let created = api
        .create(&draft("Cinema", 1200, "2024-03-09", ExpenseCategory::Entertainment).with_note("IMAX"))
        .await
        .unwrap();
    assert_eq!(created.id, ExpenseId::new("65f0c0ffee01"));
    assert_eq!(created.note.as_deref(), Some("IMAX"));

    let stored = state.records();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["amount"], json!(12.0));
    assert_eq!(stored[0]["date"], json!("2024-03-09"));
    assert_eq!(stored[0]["category"], json!("entertainment"));

    api.update(
        &created.id,
        &draft("Cinema and snacks", 1850, "2024-03-09", ExpenseCategory::Entertainment),
    )
    .await
    .unwrap();
    let stored = state.records();
    assert_eq!(stored[0]["title"], json!("Cinema and snacks"));
    assert_eq!(stored[0]["amount"], json!(18.5));
    assert!(stored[0].get("note").is_none());

    api.delete(&created.id).await.unwrap();
    assert!(state.records().is_empty());
}

#[tokio::test]
async fn rejected_status_carries_server_message() {
    let addr = spawn_stub(StubState::default()).await;
    let api = client(addr, "api");

    let err = api
        .update(
            &ExpenseId::new("missing"),
            &draft("x", 100, "2024-01-01", ExpenseCategory::Other),
        )
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Rejected {
            status: 404,
            message: "Expense not found".into()
        }
    );

    let err = api.delete(&ExpenseId::new("missing")).await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected { status: 404, .. }));
}

#[tokio::test]
async fn plain_text_error_body_is_used_as_message() {
    let addr = spawn_stub(StubState::default()).await;

    let err = client(addr, "failing").list().await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Rejected {
            status: 500,
            message: "database unavailable".into()
        }
    );
}

#[tokio::test]
async fn non_json_body_is_malformed_response() {
    let addr = spawn_stub(StubState::default()).await;

    let err = client(addr, "broken").list().await.unwrap_err();
    assert!(matches!(err, ApiError::MalformedResponse(_)));
}

#[tokio::test]
async fn closed_port_is_unreachable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(addr, "api").list().await.unwrap_err();
    assert!(err.is_unreachable());
}

#[tokio::test]
async fn store_applies_changes_only_after_server_accepts() {
    let state = StubState::seeded(vec![json!({
        "_id": "rent-jan", "title": "Rent", "amount": 1200, "date": "2024-01-01", "category": "housing"
    })]);
    let addr = spawn_stub(state.clone()).await;

    let mut store = ExpenseStore::load(client(addr, "api")).await.unwrap();
    assert_eq!(store.len(), 1);

    let added = store
        .add(draft("Pharmacy", 1999, "2024-01-20", ExpenseCategory::Healthcare))
        .await
        .unwrap()
        .clone();
    assert_eq!(store.expenses()[0].id, added.id);
    assert_eq!(state.records().len(), 2);

    // The server no longer knows this record, so the local copy must survive
    state.records.lock().unwrap().retain(|r| r["_id"] != json!("rent-jan"));
    let rent = ExpenseId::new("rent-jan");
    let err = store.remove(&rent).await.unwrap_err();
    assert!(err.is_api());
    assert!(store.get(&rent).is_some());
    assert_eq!(store.len(), 2);
}
