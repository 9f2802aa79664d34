//! Draft Requester — builds the drafting prompt and passes it to the text generator.
//!
//! The generator is opaque: its completion is returned as-is (trimmed). An
//! empty completion is a failed generation, never an empty draft.

use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::prompts::{DRAFT_PROMPT_TEMPLATE, JD_NOT_PROVIDED, STRUCTURE_INSTRUCTION};
use crate::generation::tone::CompanyTone;
use crate::llm_client::prompts::{TRUTH_INSTRUCTION, WRITER_PERSONA};
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::candidate::CandidateProfile;

/// Everything the prompt is built from.
#[derive(Debug, Clone)]
pub struct DraftInputs<'a> {
    pub profile: &'a CandidateProfile,
    pub tone: CompanyTone,
    pub resume_text: &'a str,
    /// `None` or blank renders as "Not provided".
    pub jd_text: Option<&'a str>,
}

/// Builds the single drafting prompt.
pub fn build_draft_prompt(inputs: &DraftInputs<'_>) -> String {
    let jd_text = inputs
        .jd_text
        .filter(|jd| !jd.trim().is_empty())
        .unwrap_or(JD_NOT_PROVIDED);

    fill_template(
        DRAFT_PROMPT_TEMPLATE,
        &[
            ("persona", WRITER_PERSONA),
            ("truth_instruction", TRUTH_INSTRUCTION),
            ("structure_instruction", STRUCTURE_INSTRUCTION),
            ("tone", inputs.tone.label()),
            ("name", &inputs.profile.name),
            ("company", &inputs.profile.company),
            ("role", &inputs.profile.role),
            ("resume_text", inputs.resume_text),
            ("jd_text", jd_text),
        ],
    )
}

/// Requests a draft for `inputs`. No retry: a failed call surfaces immediately.
pub async fn request_draft(
    generator: &dyn TextGenerator,
    inputs: &DraftInputs<'_>,
) -> Result<String, AppError> {
    if inputs.resume_text.trim().is_empty() {
        warn!(
            "Requesting draft for {} with no extractable resume text",
            inputs.profile.name
        );
    }

    let prompt = build_draft_prompt(inputs);
    info!(
        "Requesting draft: company={}, role={}, tone={}, prompt_chars={}",
        inputs.profile.company,
        inputs.profile.role,
        inputs.tone,
        prompt.len()
    );

    let draft = generator
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Generation(format!("Draft generation failed: {e}")))?;

    let draft = draft.trim();
    if draft.is_empty() {
        return Err(AppError::Generation(format!(
            "Draft generation failed: {}",
            LlmError::EmptyContent
        )));
    }

    Ok(draft.to_string())
}

/// Single-pass `{key}` substitution. Substituted values are never re-scanned,
/// so resume or JD text containing `{...}` is inserted verbatim.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let values_len: usize = values.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + values_len);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (*value, close))
        });

        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);

    out
}
