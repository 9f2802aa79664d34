//! Keyword catalog — the fixed vocabulary the emphasis pass may bold.
//!
//! Built once at startup (built-in or from `KEYWORD_CATALOG_PATH`) and shared
//! read-only behind an `Arc`. Declaration order matters: the per-paragraph
//! keyword cap picks keywords in catalog order, not text order.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read keyword catalog {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid keyword catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Keyword group '{0}' contains a blank keyword")]
    BlankKeyword(String),
}

/// A named category of keyword phrases, e.g. `core_finance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordGroup {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Ordered keyword groups. Read-only once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordCatalog {
    groups: Vec<KeywordGroup>,
}

impl KeywordCatalog {
    pub fn new(groups: Vec<KeywordGroup>) -> Result<Self, CatalogError> {
        // A blank phrase would match everywhere and bold every gap in the text.
        if let Some(group) = groups
            .iter()
            .find(|g| g.keywords.iter().any(|k| k.trim().is_empty()))
        {
            return Err(CatalogError::BlankKeyword(group.name.clone()));
        }
        Ok(Self { groups })
    }

    /// A catalog with no keywords; only the company rule applies.
    #[cfg(test)]
    pub fn empty() -> Self {
        Self { groups: Vec::new() }
    }

    /// Loads a catalog from a JSON array of `{"name", "keywords"}` groups.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let groups: Vec<KeywordGroup> = serde_json::from_str(raw)?;
        Self::new(groups)
    }

    pub fn groups(&self) -> &[KeywordGroup] {
        &self.groups
    }

    /// All keywords across all groups, in declaration order. Duplicates across
    /// groups are preserved.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|g| g.keywords.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.keywords.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for KeywordCatalog {
    /// The built-in finance/operations vocabulary.
    fn default() -> Self {
        let group = |name: &str, keywords: &[&str]| KeywordGroup {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        };

        Self {
            groups: vec![
                group(
                    "core_finance",
                    &[
                        "financial reporting",
                        "month-end closure",
                        "reconciliations",
                        "accounting controls",
                        "financial governance",
                        "data accuracy",
                        "compliance",
                    ],
                ),
                group(
                    "operations",
                    &[
                        "Procure-to-Pay",
                        "Record-to-Report",
                        "transaction flows",
                        "process efficiency",
                        "systems exposure",
                    ],
                ),
                group(
                    "analysis",
                    &[
                        "MIS",
                        "variance analysis",
                        "financial analysis",
                        "decision support",
                    ],
                ),
            ],
        }
    }
}
