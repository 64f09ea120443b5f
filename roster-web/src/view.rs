//! Server-side HTML rendering of the roster page.
//!
//! Everything that comes from the API or from the user goes through
//! [`escape_html`] before it reaches the markup.

use roster_core::{escape_html, Alert, Field, Student, StudentId};

use crate::modal::{FormView, Modal};

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";

/// Number of table columns, actions included.
const COLUMNS: usize = 6;

/// Removes each alert once its `data-timeout` has elapsed.
const ALERT_TIMEOUT_SCRIPT: &str = "document.querySelectorAll('#alerts [data-timeout]').forEach(function (el) {\n  setTimeout(function () { el.remove(); }, Number(el.dataset.timeout));\n});";

/// Everything shown on one render of the page.
#[derive(Debug, Default)]
pub struct PageView {
    pub students: Vec<Student>,
    pub alerts: Vec<Alert>,
    pub modal: Modal,
    /// Student awaiting delete confirmation.
    pub confirm_delete: Option<StudentId>,
}

/// Render the complete HTML document.
#[must_use]
pub fn render_page(page: &PageView) -> String {
    let dialog = match (&page.modal, &page.confirm_delete) {
        (Modal::Open(form), _) => render_form_modal(form),
        (Modal::Closed, Some(id)) => render_confirm_delete(id),
        (Modal::Closed, None) => String::new(),
    };

    format!(
        r#"<!doctype html>
<html lang="pt-BR">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Alunos</title>
  <link rel="stylesheet" href="{BOOTSTRAP_CSS}">
</head>
<body>
<main class="container py-4">
  <div class="d-flex justify-content-between align-items-center mb-3">
    <h1 class="h3 mb-0">Alunos</h1>
    <div>
      <a id="btn-refresh" class="btn btn-outline-secondary me-2" href="/">Atualizar</a>
      <a id="btn-new" class="btn btn-primary" href="/alunos/new">Novo Aluno</a>
    </div>
  </div>
  <div id="alerts">{alerts}</div>
  <div class="table-responsive">
    <table class="table table-striped align-middle">
      <thead>
        <tr><th>ID</th><th>Nome</th><th>Turma</th><th>Curso</th><th>Matrícula</th><th class="text-end">Ações</th></tr>
      </thead>
      <tbody id="alunosBody">{rows}</tbody>
    </table>
  </div>
</main>
{dialog}
<script src="{BOOTSTRAP_JS}"></script>
<script>
{ALERT_TIMEOUT_SCRIPT}
</script>
</body>
</html>
"#,
        alerts = render_alerts(&page.alerts),
        rows = render_table_rows(&page.students),
    )
}

/// Render the `<tbody>` rows for `students`.
///
/// An empty list renders a single placeholder row.
#[must_use]
pub fn render_table_rows(students: &[Student]) -> String {
    if students.is_empty() {
        return format!(
            r#"<tr><td colspan="{COLUMNS}" class="text-center">Nenhum aluno encontrado.</td></tr>"#
        );
    }

    let mut rows = String::new();
    for student in students {
        let text = |v: &Option<String>| escape_html(v.as_deref().unwrap_or_default());
        let id = student.id.as_ref().map(|id| escape_html(id.as_str())).unwrap_or_default();
        let actions = if student.id.as_ref().is_some_and(StudentId::is_path_safe) {
            format!(
                r#"<a class="btn btn-sm btn-outline-primary me-2" data-action="edit" data-id="{id}" href="/alunos/{id}/edit">Editar</a><a class="btn btn-sm btn-outline-danger" data-action="delete" data-id="{id}" href="/alunos/{id}/delete">Excluir</a>"#
            )
        } else {
            String::new()
        };
        rows.push_str(&format!(
            r#"
<tr>
  <td>{id}</td>
  <td>{name}</td>
  <td>{class_group}</td>
  <td>{course}</td>
  <td>{enrollment}</td>
  <td class="text-end">{actions}</td>
</tr>"#,
            name = text(&student.name),
            class_group = text(&student.class_group),
            course = text(&student.course),
            enrollment = text(&student.enrollment),
        ));
    }
    rows
}

/// Render the alert stack.
#[must_use]
pub fn render_alerts(alerts: &[Alert]) -> String {
    let mut out = String::new();
    for (i, alert) in alerts.iter().enumerate() {
        let timeout = alert
            .timeout_ms()
            .map(|ms| format!(r#" data-timeout="{ms}""#))
            .unwrap_or_default();
        out.push_str(&format!(
            r#"
<div id="a{i}" class="alert alert-{kind} alert-dismissible fade show" role="alert"{timeout}>
  {message}
  <button type="button" class="btn-close" data-bs-dismiss="alert" aria-label="Close"></button>
</div>"#,
            kind = alert.kind.css_suffix(),
            message = escape_html(&alert.message),
        ));
    }
    out
}

/// Render the open student form.
#[must_use]
pub fn render_form_modal(form: &FormView) -> String {
    let validated = if form.was_validated { " was-validated" } else { "" };
    let mut fields = String::new();
    for field in Field::ALL {
        let name = field.wire_name();
        let invalid = if form.errors.get(field).is_some() { " is-invalid" } else { "" };
        let feedback = form.errors.get(field).unwrap_or("Campo obrigatório.");
        fields.push_str(&format!(
            r#"
        <div class="mb-3">
          <label for="{name}" class="form-label">{label}</label>
          <input type="text" class="form-control{invalid}" id="{name}" name="{name}" value="{value}" required>
          <div class="invalid-feedback">{feedback}</div>
        </div>"#,
            label = field.label(),
            value = escape_html(form.values.get(field)),
        ));
    }

    format!(
        r#"<div class="modal fade show d-block" id="alunoModal" tabindex="-1" role="dialog" aria-modal="true" aria-labelledby="alunoModalLabel" data-bs-backdrop="static" data-bs-keyboard="false">
  <div class="modal-dialog">
    <div class="modal-content">
      <form id="alunoForm" method="post" action="/alunos" class="needs-validation{validated}">
        <div class="modal-header">
          <h5 class="modal-title" id="alunoModalLabel">{title}</h5>
          <a class="btn-close" href="/" aria-label="Fechar"></a>
        </div>
        <div class="modal-body">
          <input type="hidden" id="alunoId" name="id" value="{hidden_id}">{fields}
        </div>
        <div class="modal-footer">
          <a class="btn btn-secondary" href="/">Cancelar</a>
          <button type="submit" class="btn btn-primary">Salvar</button>
        </div>
      </form>
    </div>
  </div>
</div>
<div class="modal-backdrop fade show"></div>"#,
        title = escape_html(&form.title()),
        hidden_id = escape_html(form.hidden_id()),
    )
}

/// Render the delete confirmation dialog for `id`.
#[must_use]
pub fn render_confirm_delete(id: &StudentId) -> String {
    let id = escape_html(id.as_str());
    format!(
        r#"<div class="modal fade show d-block" id="confirmDelete" tabindex="-1" role="alertdialog" aria-modal="true">
  <div class="modal-dialog">
    <div class="modal-content">
      <form method="post" action="/alunos/{id}/delete">
        <div class="modal-body">Deseja realmente excluir o aluno ID {id}? Esta ação é irreversível.</div>
        <div class="modal-footer">
          <a class="btn btn-secondary" href="/">Cancelar</a>
          <button type="submit" class="btn btn-danger">Excluir</button>
        </div>
      </form>
    </div>
  </div>
</div>
<div class="modal-backdrop fade show"></div>"#
    )
}

/// Minimal page for request errors that have no roster context.
#[must_use]
pub fn render_error(status: u16, message: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="pt-BR">
<head><meta charset="utf-8"><title>Erro {status}</title><link rel="stylesheet" href="{BOOTSTRAP_CSS}"></head>
<body><main class="container py-4"><div class="alert alert-danger" role="alert">{message}</div><a class="btn btn-primary" href="/">Voltar</a></main></body>
</html>
"#,
        message = escape_html(message),
    )
}
