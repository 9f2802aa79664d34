use serde::{Deserialize, Serialize};

/// Candidate details collected from the draft form.
///
/// `name`, `company` and `role` are mandatory at submission time; the contact
/// fields may be empty and still render as (blank) closing lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile: String,
    /// Professional-network profile URL.
    #[serde(default)]
    pub linkedin: String,
}

impl CandidateProfile {
    /// Returns the labels of mandatory fields that are blank.
    pub fn missing_mandatory_fields(&self) -> Vec<&'static str> {
        [
            ("Name", &self.name),
            ("Company", &self.company),
            ("Role", &self.role),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }
}

/// Download filename for a rendered letter: spaces become underscores.
pub fn download_filename(name: &str) -> String {
    format!("{}_Cover_Letter.pdf", name.trim().replace(' ', "_"))
}
