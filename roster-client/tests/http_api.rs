//! Integration test: `HttpStudentApi` against a local mock of the student API.
//!
//! Each test starts an axum server on an ephemeral loopback port that
//! behaves like the remote `/alunos` resource.

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use roster_client::{ClientConfig, ClientError, HttpStudentApi, StudentApi};
use roster_core::{Student, StudentDraft, StudentId};

#[derive(Default)]
struct MockApi {
    students: Mutex<BTreeMap<u64, Student>>,
    next_id: Mutex<u64>,
}

type Shared = Arc<MockApi>;

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn assert_accepts_json(headers: &HeaderMap) {
    assert_eq!(header(headers, "accept"), Some("application/json"), "every request asks for JSON");
}

fn assert_sends_json(headers: &HeaderMap) {
    assert_eq!(header(headers, "content-type"), Some("application/json"), "body must be JSON");
}

async fn list(State(api): State<Shared>, headers: HeaderMap) -> Json<Vec<Student>> {
    assert_accepts_json(&headers);
    let students = api.students.lock().expect("mock lock").values().cloned().collect();
    Json(students)
}

async fn create(
    State(api): State<Shared>,
    headers: HeaderMap,
    Json(draft): Json<StudentDraft>,
) -> impl IntoResponse {
    assert_accepts_json(&headers);
    assert_sends_json(&headers);
    let id = {
        let mut next = api.next_id.lock().expect("mock lock");
        *next += 1;
        *next
    };
    let student = Student::from_draft(StudentId::from(id), &draft);
    api.students.lock().expect("mock lock").insert(id, student.clone());
    (StatusCode::CREATED, Json(student))
}

async fn fetch(
    State(api): State<Shared>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> impl IntoResponse {
    assert_accepts_json(&headers);
    let found = api.students.lock().expect("mock lock").get(&id).cloned();
    found.map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn replace(
    State(api): State<Shared>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    Json(draft): Json<StudentDraft>,
) -> impl IntoResponse {
    assert_accepts_json(&headers);
    assert_sends_json(&headers);
    let mut students = api.students.lock().expect("mock lock");
    match students.get_mut(&id) {
        Some(slot) => {
            *slot = Student::from_draft(StudentId::from(id), &draft);
            Ok(Json(slot.clone()))
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn remove(
    State(api): State<Shared>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> StatusCode {
    assert_accepts_json(&headers);
    assert_eq!(header(&headers, "content-type"), None, "delete has no body");
    let removed = api.students.lock().expect("mock lock").remove(&id);
    if removed.is_some() {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock server");
    });
    addr
}

async fn start_mock() -> HttpStudentApi {
    let app = Router::new()
        .route("/alunos", get(list).post(create))
        .route("/alunos/{id}", get(fetch).put(replace).delete(remove))
        .with_state(Shared::default());
    client_for(serve(app).await, Duration::from_secs(5))
}

fn client_for(addr: SocketAddr, timeout: Duration) -> HttpStudentApi {
    let config = ClientConfig::new(&format!("http://{addr}"))
        .expect("valid base url")
        .with_timeout(timeout);
    HttpStudentApi::new(config)
}

fn draft(name: &str) -> StudentDraft {
    StudentDraft::from_form(name, "3A", "ADS", "2024001")
}

#[tokio::test]
async fn full_crud_lifecycle() {
    let api = start_mock().await;

    assert!(api.list().await.expect("initial list").is_empty());

    let created = api.create(&draft("Ana")).await.expect("create");
    let id = created.id.clone().expect("created student has an id");
    assert_eq!(created.name.as_deref(), Some("Ana"));

    let fetched = api.get(&id).await.expect("get");
    assert_eq!(fetched, created);

    let updated = api.update(&id, &draft("Ana Souza")).await.expect("update");
    assert_eq!(updated.name.as_deref(), Some("Ana Souza"));

    let listed = api.list().await.expect("list after update");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name.as_deref(), Some("Ana Souza"));

    api.delete(&id).await.expect("delete");
    assert!(api.list().await.expect("list after delete").is_empty());
}

#[tokio::test]
async fn unknown_id_surfaces_status_error() {
    let api = start_mock().await;
    let missing = StudentId::from(404);

    let err = api.get(&missing).await.expect_err("get of unknown id must fail");
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "Erro 404 - Not Found");

    let err = api.delete(&missing).await.expect_err("delete of unknown id must fail");
    assert_eq!(err.status(), Some(404));

    let err = api
        .update(&missing, &draft("Ghost"))
        .await
        .expect_err("update of unknown id must fail");
    assert!(matches!(err, ClientError::Status { status: 404, .. }));
}

#[tokio::test]
async fn non_array_list_body_is_empty_list() {
    let app = Router::new().route(
        "/alunos",
        get(|| async { Json(serde_json::json!({"content": [{"id": 1}]})) }),
    );
    let api = client_for(serve(app).await, Duration::from_secs(5));
    let students = api.list().await.expect("object body must not be an error");
    assert!(students.is_empty());
}

#[tokio::test]
async fn html_error_page_with_ok_status_is_decode_error() {
    let app = Router::new().route("/alunos", get(|| async { "<html>maintenance</html>" }));
    let api = client_for(serve(app).await, Duration::from_secs(5));
    let result = api.list().await;
    assert!(matches!(result, Err(ClientError::Decode(_))), "got {result:?}");
}

#[tokio::test]
async fn server_error_maps_to_status() {
    let app = Router::new().route(
        "/alunos",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let api = client_for(serve(app).await, Duration::from_secs(5));
    let err = api.list().await.expect_err("500 must fail");
    assert_eq!(err.to_string(), "Erro 500 - Internal Server Error");
}

#[tokio::test]
async fn slow_api_hits_timeout() {
    let app = Router::new().route(
        "/alunos",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(Vec::<Student>::new())
        }),
    );
    let api = client_for(serve(app).await, Duration::from_millis(200));
    let err = api.list().await.expect_err("slow API must time out");
    assert!(matches!(err, ClientError::Timeout(_)), "got {err:?}");
    assert_eq!(err.to_string(), "request timed out after 200ms");
}
