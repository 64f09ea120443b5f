//! Axum route handlers for the roster front end.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use roster_client::StudentApi;
use roster_core::{Alert, StudentDraft, StudentId, ERROR_ALERT_TIMEOUT};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::{
    error::WebError,
    flash::AlertStore,
    modal::{FormMode, FormView, Modal},
    view::{render_page, PageView},
};

// ── Shared state ─────────────────────────────────────────────────────────────

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn StudentApi>,
    pub alerts: Arc<AlertStore>,
}

impl AppState {
    /// State backed by `api` with an empty alert store.
    #[must_use]
    pub fn new(api: Arc<dyn StudentApi>) -> Self {
        Self { api, alerts: Arc::new(AlertStore::new()) }
    }

    /// Load the list and render the page around it.
    ///
    /// A failed load still renders: the table shows its empty row and a
    /// danger alert explains why.
    async fn render(
        &self,
        mut alerts: Vec<Alert>,
        modal: Modal,
        confirm_delete: Option<StudentId>,
    ) -> String {
        let students = match self.api.list().await {
            Ok(students) => students,
            Err(e) => {
                tracing::error!(error = %e, "failed to load students");
                alerts.push(
                    Alert::danger(format!("Falha ao carregar alunos. Verifique a API / CORS. {e}"))
                        .with_timeout(Some(ERROR_ALERT_TIMEOUT)),
                );
                Vec::new()
            }
        };
        render_page(&PageView { students, alerts, modal, confirm_delete })
    }

    /// Redirect to the list, handing `alerts` over through the flash store.
    fn redirect_with(&self, alerts: Vec<Alert>) -> Redirect {
        let token = self.alerts.push(alerts);
        Redirect::to(&format!("/?flash={token}"))
    }
}

// ── Request types ─────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    pub flash: Option<String>,
}

/// Fields posted by the student form.
#[derive(Debug, Default, Deserialize)]
pub struct StudentForm {
    /// Hidden id input; empty when creating.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(rename = "turma", default)]
    pub class_group: String,
    #[serde(rename = "curso", default)]
    pub course: String,
    #[serde(rename = "matricula", default)]
    pub enrollment: String,
}

impl StudentForm {
    /// Create when the hidden id is blank, update otherwise.
    fn mode(&self) -> Result<FormMode, WebError> {
        match self.id.as_deref().map(str::trim) {
            None | Some("") => Ok(FormMode::New),
            Some(raw) => Ok(FormMode::Edit(StudentId::parse(raw)?)),
        }
    }

    fn draft(&self) -> StudentDraft {
        StudentDraft::from_form(&self.name, &self.class_group, &self.course, &self.enrollment)
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router around `state`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/alunos", post(save_student))
        .route("/alunos/new", get(new_student))
        .route("/alunos/{id}/edit", get(edit_student))
        .route("/alunos/{id}/delete", get(confirm_delete).post(delete_student))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health`: liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /`: the student table, plus any alerts handed over by `?flash=`.
pub async fn index(State(state): State<AppState>, Query(query): Query<IndexQuery>) -> Html<String> {
    let alerts = query
        .flash
        .as_deref()
        .and_then(|token| Uuid::parse_str(token).ok())
        .map(|token| state.alerts.take(token))
        .unwrap_or_default();
    Html(state.render(alerts, Modal::Closed, None).await)
}

/// `GET /alunos/new`: open the modal on an empty form.
pub async fn new_student(State(state): State<AppState>) -> Html<String> {
    Html(state.render(Vec::new(), Modal::Open(FormView::new_student()), None).await)
}

/// `GET /alunos/:id/edit`: open the modal pre-filled with the student.
///
/// # Errors
/// Returns [`WebError::InvalidId`] if the id cannot appear in an API URL.
pub async fn edit_student(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, WebError> {
    let id = StudentId::parse(&raw_id)?;
    match state.api.get(&id).await {
        Ok(student) => {
            let form_id = student.id.clone().filter(StudentId::is_path_safe).unwrap_or(id);
            let form = FormView::edit(form_id, student.draft());
            Ok(Html(state.render(Vec::new(), Modal::Open(form), None).await).into_response())
        }
        Err(e) => {
            tracing::warn!(%id, error = %e, "failed to load student for editing");
            let alert = Alert::danger(format!("Erro ao carregar dados do aluno: {e}"));
            Ok(state.redirect_with(vec![alert]).into_response())
        }
    }
}

/// `POST /alunos`: create or update from the submitted form.
///
/// Invalid input re-renders the open modal (422) without calling the API.
/// An API failure keeps the modal open with the submitted values (502).
///
/// # Errors
/// Returns [`WebError::InvalidId`] if the hidden id is not a usable id.
pub async fn save_student(
    State(state): State<AppState>,
    Form(form): Form<StudentForm>,
) -> Result<Response, WebError> {
    let view = FormView::submitted(form.mode()?, form.draft());
    if !view.is_valid() {
        let html = state.render(Vec::new(), Modal::Open(view), None).await;
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response());
    }

    let outcome = match &view.mode {
        FormMode::New => state.api.create(&view.values).await.map(|student| {
            tracing::info!(id = ?student.id, "student created");
            "Aluno cadastrado com sucesso."
        }),
        FormMode::Edit(id) => state.api.update(id, &view.values).await.map(|_| {
            tracing::info!(%id, "student updated");
            "Aluno atualizado com sucesso."
        }),
    };

    match outcome {
        Ok(message) => Ok(state.redirect_with(vec![Alert::success(message)]).into_response()),
        Err(e) => {
            tracing::error!(error = %e, "failed to save student");
            let alert = Alert::danger(format!("Erro ao salvar aluno: {e}"))
                .with_timeout(Some(ERROR_ALERT_TIMEOUT));
            let html = state.render(vec![alert], Modal::Open(view), None).await;
            Ok((StatusCode::BAD_GATEWAY, Html(html)).into_response())
        }
    }
}

/// `GET /alunos/:id/delete`: ask for confirmation before deleting.
///
/// # Errors
/// Returns [`WebError::InvalidId`] if the id cannot appear in an API URL.
pub async fn confirm_delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, WebError> {
    let id = StudentId::parse(&raw_id)?;
    Ok(Html(state.render(Vec::new(), Modal::Closed, Some(id)).await))
}

/// `POST /alunos/:id/delete`: delete the student and return to the list.
///
/// # Errors
/// Returns [`WebError::InvalidId`] if the id cannot appear in an API URL.
pub async fn delete_student(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Redirect, WebError> {
    let id = StudentId::parse(&raw_id)?;
    let alert = match state.api.delete(&id).await {
        Ok(()) => {
            tracing::info!(%id, "student deleted");
            Alert::success("Aluno excluído com sucesso.")
        }
        Err(e) => {
            tracing::error!(%id, error = %e, "failed to delete student");
            Alert::danger(format!("Erro ao excluir aluno: {e}"))
                .with_timeout(Some(ERROR_ALERT_TIMEOUT))
        }
    };
    Ok(state.redirect_with(vec![alert]))
}
