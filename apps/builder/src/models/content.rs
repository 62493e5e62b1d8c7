//! Résumé content as persisted by the remote store.
//!
//! Section order is canonical: `personal`, `summary`, `experience`,
//! `education`, `skills`, `projects`, `certifications`, `languages`.
//! Array entries keep the order the user entered them and must round-trip
//! exactly. Every field is defaulted so a partially-saved draft always
//! decodes into a structurally complete document.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeContent {
    pub personal: PersonalDetails,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Skills,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub languages: Vec<LanguageEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalDetails {
    pub first_name: String,
    pub last_name: String,
    /// Desired job title, shown as the headline under the name.
    pub title: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub post_code: String,
}

impl PersonalDetails {
    /// Full display name, or empty when neither name part is set.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub degree: String,
    pub institute: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skills {
    pub core: Vec<String>,
    pub tools: Vec<String>,
    pub soft: Vec<String>,
}

impl Skills {
    pub fn is_empty(&self) -> bool {
        self.core.is_empty() && self.tools.is_empty() && self.soft.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub role: String,
    pub impact: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageEntry {
    pub name: String,
    pub level: String,
}

/// Decodes the `content` field of a store record.
///
/// The store may return content as a JSON object or as a JSON-encoded
/// string. Both decode to `ResumeContent`; anything that fails to decode
/// degrades to the empty document rather than failing the whole fetch.
pub fn decode_content(raw: Value) -> ResumeContent {
    let value = match raw {
        Value::String(text) => match serde_json::from_str::<Value>(&text) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Resume content string is not valid JSON, using empty content: {e}");
                return ResumeContent::default();
            }
        },
        other => other,
    };

    match serde_json::from_value::<ResumeContent>(value) {
        Ok(content) => content,
        Err(e) => {
            warn!("Resume content has an unexpected shape, using empty content: {e}");
            ResumeContent::default()
        }
    }
}
