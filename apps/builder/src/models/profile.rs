//! User profile payload and the seed content derived from it.

use serde::{Deserialize, Serialize};

use super::content::{PersonalDetails, ResumeContent};

/// Response of `GET /users/profile`. All fields defaulted — a sparse
/// profile still seeds a usable session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub headline: String,
}

impl UserProfile {
    /// Pre-populates a fresh wizard session from the profile: the name is
    /// split on the first space into first/last, the headline becomes the
    /// summary. Everything else starts empty.
    pub fn initial_content(&self) -> ResumeContent {
        let mut parts = self.name.trim().splitn(2, ' ');
        let first_name = parts.next().unwrap_or_default().to_string();
        let last_name = parts.next().unwrap_or_default().trim().to_string();

        ResumeContent {
            personal: PersonalDetails {
                first_name,
                last_name,
                email: self.email.clone(),
                ..Default::default()
            },
            summary: self.headline.clone(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_content_splits_name() {
        let profile = UserProfile {
            name: "Riley Taylor Jr".to_string(),
            email: "riley@example.com".to_string(),
            headline: "Accountant with 10 years of closing experience".to_string(),
        };
        let content = profile.initial_content();
        assert_eq!(content.personal.first_name, "Riley");
        assert_eq!(content.personal.last_name, "Taylor Jr");
        assert_eq!(content.personal.email, "riley@example.com");
        assert_eq!(content.summary, profile.headline);
    }

    #[test]
    fn test_initial_content_single_word_name() {
        let profile = UserProfile {
            name: "Riley".to_string(),
            ..Default::default()
        };
        let content = profile.initial_content();
        assert_eq!(content.personal.first_name, "Riley");
        assert_eq!(content.personal.last_name, "");
    }

    #[test]
    fn test_initial_content_empty_profile() {
        let content = UserProfile::default().initial_content();
        assert_eq!(content, ResumeContent::default());
    }
}
