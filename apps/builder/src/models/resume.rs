//! Wire types for the remote résumé store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::content::ResumeContent;

/// Lifecycle state of a résumé record. Starts as `Draft` and transitions
/// to `Completed` exactly once, on the final wizard step. This core never
/// moves a record back to `Draft`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeStatus {
    #[default]
    Draft,
    Completed,
}

/// A résumé record as fetched from the store, with `content` already
/// decoded (see `models::content::decode_content`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub id: Uuid,
    pub content: ResumeContent,
    pub status: ResumeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateResumeRequest {
    pub title: String,
    pub role: String,
}

impl CreateResumeRequest {
    /// Placeholder fields used when the first autosave creates the draft;
    /// the user names the résumé later.
    pub fn placeholder() -> Self {
        Self {
            title: "Untitled Resume".to_string(),
            role: "General".to_string(),
        }
    }
}

/// Response of a create call. The store may return the full record; only
/// the assigned identifier matters here.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedResume {
    pub id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateResumeRequest {
    pub content: ResumeContent,
    /// Only carried when the save intent is completed; drafts never
    /// overwrite an already-completed status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResumeStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_is_lowercase_on_the_wire() {
        assert_eq!(
            serde_json::to_value(ResumeStatus::Completed).unwrap(),
            json!("completed")
        );
        let parsed: ResumeStatus = serde_json::from_value(json!("draft")).unwrap();
        assert_eq!(parsed, ResumeStatus::Draft);
    }

    #[test]
    fn test_update_request_omits_absent_status() {
        let request = UpdateResumeRequest {
            content: ResumeContent::default(),
            status: None,
        };
        let encoded = serde_json::to_value(&request).unwrap();
        assert!(encoded.get("status").is_none());

        let request = UpdateResumeRequest {
            content: ResumeContent::default(),
            status: Some(ResumeStatus::Completed),
        };
        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(encoded["status"], json!("completed"));
    }

    #[test]
    fn test_placeholder_create_request() {
        let request = CreateResumeRequest::placeholder();
        assert_eq!(request.title, "Untitled Resume");
        assert_eq!(request.role, "General");
    }
}
