//! Company tone — the fixed set of tones offered on the draft form.
//!
//! The label is passed verbatim into the prompt; the model adapts its language
//! without naming the tone.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Tone of the target company. Serialized as its form label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyTone {
    #[default]
    #[serde(rename = "Startup / Growth")]
    StartupGrowth,
    #[serde(rename = "Corporate / Listed")]
    CorporateListed,
    #[serde(rename = "Professional Firm")]
    ProfessionalFirm,
}

impl CompanyTone {
    pub const ALL: [CompanyTone; 3] = [
        CompanyTone::StartupGrowth,
        CompanyTone::CorporateListed,
        CompanyTone::ProfessionalFirm,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CompanyTone::StartupGrowth => "Startup / Growth",
            CompanyTone::CorporateListed => "Corporate / Listed",
            CompanyTone::ProfessionalFirm => "Professional Firm",
        }
    }
}

impl fmt::Display for CompanyTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CompanyTone {
    type Err = String;

    /// Accepts the exact form label (surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        CompanyTone::ALL
            .into_iter()
            .find(|tone| tone.label() == s)
            .ok_or_else(|| {
                let options: Vec<&str> = CompanyTone::ALL.iter().map(|t| t.label()).collect();
                format!("Unknown tone '{s}'. Expected one of: {}", options.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tone_is_startup() {
        assert_eq!(CompanyTone::default(), CompanyTone::StartupGrowth);
    }

    #[test]
    fn test_labels_round_trip_through_from_str() {
        for tone in CompanyTone::ALL {
            assert_eq!(tone.label().parse::<CompanyTone>().unwrap(), tone);
        }
    }

    #[test]
    fn test_from_str_ignores_surrounding_whitespace() {
        assert_eq!(
            " Professional Firm ".parse::<CompanyTone>().unwrap(),
            CompanyTone::ProfessionalFirm
        );
    }

    #[test]
    fn test_unknown_tone_lists_options() {
        let err = "Hedge Fund".parse::<CompanyTone>().unwrap_err();
        assert!(err.contains("Hedge Fund"));
        assert!(err.contains("Corporate / Listed"));
    }

    #[test]
    fn test_tone_serde_uses_label() {
        let json = serde_json::to_string(&CompanyTone::CorporateListed).unwrap();
        assert_eq!(json, r#""Corporate / Listed""#);
        let tone: CompanyTone = serde_json::from_str(r#""Professional Firm""#).unwrap();
        assert_eq!(tone, CompanyTone::ProfessionalFirm);
    }
}
