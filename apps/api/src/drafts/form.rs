//! Multipart draft form: `resume` (file), optional `job_description` (file),
//! `name`, `company`, `role`, optional `tone`, `email`, `mobile`, `linkedin`.

use axum::extract::multipart::{Field, Multipart};
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;
use crate::generation::tone::CompanyTone;
use crate::models::candidate::CandidateProfile;

pub const MANDATORY_FIELDS_MESSAGE: &str = "Resume, Name, Company, and Role are mandatory.";

/// A submitted form that passed validation.
#[derive(Debug, Clone)]
pub struct DraftForm {
    pub resume: Bytes,
    pub job_description: Option<Bytes>,
    pub profile: CandidateProfile,
    pub tone: CompanyTone,
}

/// Raw fields as received; nothing checked yet.
#[derive(Debug, Default)]
struct RawDraftForm {
    resume: Option<Bytes>,
    job_description: Option<Bytes>,
    profile: CandidateProfile,
    tone: Option<String>,
}

/// Reads every field, then validates. Unknown fields are ignored. Empty file
/// parts count as absent.
pub async fn read_draft_form(mut multipart: Multipart) -> Result<DraftForm, AppError> {
    let mut raw = RawDraftForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed form data: {e}")))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        match name.as_str() {
            "resume" => raw.resume = read_file(field).await?,
            "job_description" => raw.job_description = read_file(field).await?,
            "name" => raw.profile.name = read_text(field).await?,
            "company" => raw.profile.company = read_text(field).await?,
            "role" => raw.profile.role = read_text(field).await?,
            "email" => raw.profile.email = read_text(field).await?,
            "mobile" => raw.profile.mobile = read_text(field).await?,
            "linkedin" => raw.profile.linkedin = read_text(field).await?,
            "tone" => raw.tone = Some(read_text(field).await?),
            other => debug!("Ignoring unknown form field '{other}'"),
        }
    }

    validate(raw)
}

fn validate(raw: RawDraftForm) -> Result<DraftForm, AppError> {
    let missing = raw.profile.missing_mandatory_fields();
    let resume = match raw.resume {
        Some(resume) if missing.is_empty() => resume,
        _ => return Err(AppError::Validation(MANDATORY_FIELDS_MESSAGE.to_string())),
    };

    let tone = match raw.tone.as_deref().map(str::trim) {
        None | Some("") => CompanyTone::default(),
        Some(label) => label.parse::<CompanyTone>().map_err(AppError::Validation)?,
    };

    Ok(DraftForm {
        resume,
        job_description: raw.job_description,
        profile: raw.profile,
        tone,
    })
}

async fn read_file(field: Field<'_>) -> Result<Option<Bytes>, AppError> {
    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read uploaded file: {e}")))?;
    Ok((!bytes.is_empty()).then_some(bytes))
}

async fn read_text(field: Field<'_>) -> Result<String, AppError> {
    let text = field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read form field: {e}")))?;
    Ok(text.trim().to_string())
}
