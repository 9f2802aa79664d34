use anyhow::Context;
use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::assembly::build_document_today;
use crate::drafts::form::read_draft_form;
use crate::emphasis::{apply_emphasis, KeywordCatalog};
use crate::errors::AppError;
use crate::extraction::extract_text;
use crate::generation::drafter::{request_draft, DraftInputs};
use crate::generation::tone::CompanyTone;
use crate::models::candidate::{download_filename, CandidateProfile};
use crate::session::DraftSession;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct DraftResponse {
    pub session_id: Uuid,
    /// Live draft text as stored.
    pub draft: String,
    /// The live draft with emphasis applied, as it will be rendered.
    pub preview: String,
    pub profile: CandidateProfile,
    pub tone: CompanyTone,
}

impl DraftResponse {
    fn from_session(session: DraftSession, catalog: &KeywordCatalog) -> Self {
        let preview = apply_emphasis(&session.draft, &session.profile.company, catalog);
        Self {
            session_id: session.session_id,
            draft: session.draft,
            preview,
            profile: session.profile,
            tone: session.tone,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EditDraftRequest {
    pub text: String,
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Draft session {id} not found"))
}

/// POST /api/v1/drafts
///
/// Validation happens before anything else: an incomplete form never reaches
/// extraction, the generator or the session store.
pub async fn handle_create_draft(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<DraftResponse>), AppError> {
    let form = read_draft_form(multipart).await?;

    let resume = form.resume;
    let job_description = form.job_description;
    let (resume_text, jd_text) = tokio::task::spawn_blocking(move || {
        (
            extract_text(&resume),
            job_description.as_deref().map(extract_text),
        )
    })
    .await
    .context("Text extraction task failed")?;

    let inputs = DraftInputs {
        profile: &form.profile,
        tone: form.tone,
        resume_text: &resume_text,
        jd_text: jd_text.as_deref(),
    };
    // Stored plain; emphasis is derived on every read.
    let draft = request_draft(state.generator.as_ref(), &inputs).await?;

    let session = state.sessions.create(form.profile, form.tone, draft).await;
    info!(
        "Draft session {} created for {} at {} ({} active)",
        session.session_id,
        session.profile.name,
        session.profile.company,
        state.sessions.len().await
    );

    Ok((
        StatusCode::CREATED,
        Json(DraftResponse::from_session(session, &state.catalog)),
    ))
}

/// GET /api/v1/drafts/:id
pub async fn handle_get_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DraftResponse>, AppError> {
    let session = state.sessions.get(id).await.ok_or_else(|| session_not_found(id))?;
    Ok(Json(DraftResponse::from_session(session, &state.catalog)))
}

/// PUT /api/v1/drafts/:id
///
/// The edited text replaces the live draft verbatim; emphasis is recomputed
/// from it for the preview and again at download.
pub async fn handle_edit_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<EditDraftRequest>,
) -> Result<Json<DraftResponse>, AppError> {
    let session = state
        .sessions
        .update_draft(id, req.text)
        .await
        .ok_or_else(|| session_not_found(id))?;
    Ok(Json(DraftResponse::from_session(session, &state.catalog)))
}

/// GET /api/v1/drafts/:id/pdf
pub async fn handle_download_pdf(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let session = state.sessions.get(id).await.ok_or_else(|| session_not_found(id))?;

    let emphasized = apply_emphasis(&session.draft, &session.profile.company, &state.catalog);
    let profile = session.profile;
    let filename = download_filename(&profile.name).replace('"', "");

    let pdf = tokio::task::spawn_blocking(move || build_document_today(&emphasized, &profile))
        .await
        .context("Render task failed")??;

    info!("Rendered {} ({} bytes) for session {id}", filename, pdf.len());

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        pdf,
    ))
}

/// DELETE /api/v1/drafts/:id
pub async fn handle_delete_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .remove(id)
        .await
        .ok_or_else(|| session_not_found(id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/keywords
pub async fn handle_get_keywords(State(state): State<AppState>) -> Json<KeywordCatalog> {
    Json(state.catalog.as_ref().clone())
}
