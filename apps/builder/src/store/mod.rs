//! Résumé store boundary — the single point of entry for all remote
//! store and profile calls.
//!
//! The store owns the persisted records; this module only reads and
//! writes them through its HTTP API. The string-or-object ambiguity of
//! the `content` field is resolved here (see `models::content`) and is
//! never allowed to leak inward.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::models::content::decode_content;
use crate::models::profile::UserProfile;
use crate::models::resume::{
    CreateResumeRequest, CreatedResume, ResumeRecord, ResumeStatus, UpdateResumeRequest,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The write surface the autosave path depends on. Kept as a trait so the
/// persister can be driven against an in-memory store in tests.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn create_resume(
        &self,
        request: &CreateResumeRequest,
    ) -> Result<CreatedResume, StoreError>;

    async fn update_resume(
        &self,
        id: Uuid,
        request: &UpdateResumeRequest,
    ) -> Result<(), StoreError>;
}

/// Shape of a record on the wire, before the `content` field is decoded.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResumeRecordWire {
    id: Uuid,
    #[serde(default)]
    content: Value,
    #[serde(default)]
    status: ResumeStatus,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<ResumeRecordWire> for ResumeRecord {
    fn from(wire: ResumeRecordWire) -> Self {
        ResumeRecord {
            id: wire.id,
            content: decode_content(wire.content),
            status: wire.status,
            title: wire.title,
            role: wire.role,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
        }
    }
}

/// HTTP client for the résumé store and the profile endpoint.
#[derive(Clone)]
pub struct ResumeStoreClient {
    client: Client,
    base_url: String,
}

impl ResumeStoreClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.request_timeout_secs))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: normalize_base_url(&config.api_base_url),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Fetches and decodes a résumé record. A failure here is terminal
    /// for the edit view — there is nothing to edit without it.
    pub async fn fetch_resume(&self, id: Uuid) -> Result<ResumeRecord, StoreError> {
        let response = self
            .client
            .get(self.url(&format!("/resumes/{id}")))
            .send()
            .await?;
        let response = check_status(response).await?;
        let wire: ResumeRecordWire = response.json().await?;
        debug!("Fetched resume {id}");
        Ok(wire.into())
    }

    /// Fetches the user profile used to seed a fresh session. Absence or
    /// failure must not block starting the wizard, so this degrades to
    /// `None` instead of returning an error.
    pub async fn fetch_profile(&self) -> Option<UserProfile> {
        match self.try_fetch_profile().await {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!("Profile fetch failed, starting with empty defaults: {e}");
                None
            }
        }
    }

    async fn try_fetch_profile(&self) -> Result<UserProfile, StoreError> {
        let response = self.client.get(self.url("/users/profile")).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl ResumeStore for ResumeStoreClient {
    async fn create_resume(
        &self,
        request: &CreateResumeRequest,
    ) -> Result<CreatedResume, StoreError> {
        let response = self
            .client
            .post(self.url("/resumes"))
            .json(request)
            .send()
            .await?;
        let response = check_status(response).await?;
        let created: CreatedResume = response.json().await?;
        debug!("Created resume {}", created.id);
        Ok(created)
    }

    async fn update_resume(
        &self,
        id: Uuid,
        request: &UpdateResumeRequest,
    ) -> Result<(), StoreError> {
        let response = self
            .client
            .put(self.url(&format!("/resumes/{id}")))
            .json(request)
            .send()
            .await?;
        check_status(response).await?;
        debug!("Updated resume {id}");
        Ok(())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(StoreError::Api {
            status: status.as_u16(),
            message: body,
        });
    }
    Ok(response)
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_base_url_strips_trailing_slash() {
        assert_eq!(
            normalize_base_url("http://localhost:3000/api/"),
            "http://localhost:3000/api"
        );
        assert_eq!(
            normalize_base_url("http://localhost:3000/api"),
            "http://localhost:3000/api"
        );
    }

    #[test]
    fn test_wire_record_decodes_string_content() {
        let wire: ResumeRecordWire = serde_json::from_value(json!({
            "id": "6f6e41e4-3c07-4be5-a081-43618672eb4f",
            "content": "{\"summary\":\"From a string\"}",
            "status": "draft"
        }))
        .unwrap();
        let record: ResumeRecord = wire.into();
        assert_eq!(record.content.summary, "From a string");
        assert_eq!(record.status, ResumeStatus::Draft);
    }

    #[test]
    fn test_wire_record_defaults_missing_fields() {
        let wire: ResumeRecordWire = serde_json::from_value(json!({
            "id": "6f6e41e4-3c07-4be5-a081-43618672eb4f"
        }))
        .unwrap();
        let record: ResumeRecord = wire.into();
        assert_eq!(record.status, ResumeStatus::Draft);
        assert_eq!(record.content, crate::models::content::ResumeContent::default());
        assert!(record.title.is_none());
    }
}
