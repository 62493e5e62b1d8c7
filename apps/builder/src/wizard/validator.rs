//! Step Validation — schema-driven validation of one step's raw input.
//!
//! Validation is pure: no side effects, no persistence. A failure is a
//! rejection result with per-field messages, consumed by the controller
//! to keep the user on the current step. Optional fields pass through
//! unvalidated but are still normalized (trimmed, bullet prefixes
//! stripped, empty list entries dropped).

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::models::content::{
    CertificationEntry, EducationEntry, ExperienceEntry, LanguageEntry, PersonalDetails,
    ProjectEntry, Skills,
};
use crate::wizard::steps::{EducationStep, ProfileStep, StepId, StepPayload};

// ────────────────────────────────────────────────────────────────────────────
// Error types
// ────────────────────────────────────────────────────────────────────────────

/// One field-level rejection, keyed by the form field path
/// (`firstName`, `experience[0].company`, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Ordered set of field-level errors for one rejected submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Message for a given field path, if that field was rejected.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", joined.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

/// Validates one step's raw payload against that step's schema.
///
/// Returns the accepted, normalized payload, or the full set of
/// field-level errors. Malformed shapes (wrong JSON type where a list or
/// object is expected) are reported as field errors, never panics.
pub fn validate_step(step: StepId, raw: &Value) -> Result<StepPayload, ValidationErrors> {
    match step {
        StepId::Personal => validate_personal(raw).map(StepPayload::Personal),
        StepId::Experience => validate_experience(raw).map(StepPayload::Experience),
        StepId::Education => validate_education(raw).map(StepPayload::Education),
        StepId::Profile => validate_profile(raw).map(StepPayload::Profile),
        StepId::Review => Ok(StepPayload::Review),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Per-step schemas
// ────────────────────────────────────────────────────────────────────────────

fn validate_personal(raw: &Value) -> Result<PersonalDetails, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let first_name = str_field(raw, "firstName");
    if first_name.chars().count() < 2 {
        errors.push("firstName", "First name is required");
    }

    let last_name = str_field(raw, "lastName");
    if last_name.chars().count() < 2 {
        errors.push("lastName", "Last name is required");
    }

    let title = str_field(raw, "title");
    if title.chars().count() < 2 {
        errors.push("title", "Desired job title is required");
    }

    let email = str_field(raw, "email");
    if !is_valid_email(&email) {
        errors.push("email", "Invalid email");
    }

    let phone = str_field(raw, "phone");
    if phone.chars().count() < 5 {
        errors.push("phone", "Phone is required");
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(PersonalDetails {
        first_name,
        last_name,
        title,
        email,
        phone,
        country: str_field(raw, "country"),
        city: str_field(raw, "city"),
        address: str_field(raw, "address"),
        post_code: str_field(raw, "postCode"),
    })
}

fn validate_experience(raw: &Value) -> Result<Vec<ExperienceEntry>, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let Some(items) = raw.as_array() else {
        errors.push("experience", "Expected a list of experience entries");
        return Err(errors);
    };

    let mut entries = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let title = str_field(item, "title");
        if title.is_empty() {
            errors.push(format!("experience[{i}].title"), "Job title is required");
        }
        let company = str_field(item, "company");
        if company.is_empty() {
            errors.push(format!("experience[{i}].company"), "Company is required");
        }

        entries.push(ExperienceEntry {
            title,
            company,
            duration: str_field(item, "duration"),
            responsibilities: responsibility_lines(item.get("responsibilities")),
        });
    }

    if errors.is_empty() {
        Ok(entries)
    } else {
        Err(errors)
    }
}

fn validate_education(raw: &Value) -> Result<EducationStep, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let mut education = Vec::new();
    for (i, item) in list_field(raw, "education").iter().enumerate() {
        let degree = str_field(item, "degree");
        if degree.is_empty() {
            errors.push(format!("education[{i}].degree"), "Degree is required");
        }
        let institute = str_field(item, "institute");
        if institute.is_empty() {
            errors.push(format!("education[{i}].institute"), "Institution is required");
        }
        education.push(EducationEntry {
            degree,
            institute,
            year: str_field(item, "year"),
        });
    }

    let mut certifications = Vec::new();
    for (i, item) in list_field(raw, "certifications").iter().enumerate() {
        let name = str_field(item, "name");
        if name.is_empty() {
            errors.push(
                format!("certifications[{i}].name"),
                "Certification name is required",
            );
        }
        certifications.push(CertificationEntry {
            name,
            issuer: str_field(item, "issuer"),
            year: str_field(item, "year"),
        });
    }

    let mut projects = Vec::new();
    for (i, item) in list_field(raw, "projects").iter().enumerate() {
        let title = str_field(item, "title");
        if title.is_empty() {
            errors.push(format!("projects[{i}].title"), "Project title is required");
        }
        let description = str_field(item, "description");
        if description.is_empty() {
            errors.push(
                format!("projects[{i}].description"),
                "Project description is required",
            );
        }
        projects.push(ProjectEntry {
            title,
            description,
            role: str_field(item, "role"),
            impact: str_field(item, "impact"),
        });
    }

    let mut languages = Vec::new();
    for (i, item) in list_field(raw, "languages").iter().enumerate() {
        let name = str_field(item, "name");
        if name.is_empty() {
            errors.push(format!("languages[{i}].name"), "Language is required");
        }
        languages.push(LanguageEntry {
            name,
            level: str_field(item, "level"),
        });
    }

    if errors.is_empty() {
        Ok(EducationStep {
            education,
            certifications,
            projects,
            languages,
        })
    } else {
        Err(errors)
    }
}

fn validate_profile(raw: &Value) -> Result<ProfileStep, ValidationErrors> {
    // Summary and skills are optional; this schema only normalizes.
    let skills = raw.get("skills").unwrap_or(&Value::Null);
    Ok(ProfileStep {
        summary: str_field(raw, "summary"),
        skills: Skills {
            core: skill_list(skills.get("core")),
            tools: skill_list(skills.get("tools")),
            soft: skill_list(skills.get("soft")),
        },
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Field helpers
// ────────────────────────────────────────────────────────────────────────────

/// Trimmed string at `key`, empty when absent or not a string.
fn str_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// List at `key`; absent or non-list values normalize to empty.
fn list_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Responsibility lines: a list of strings, or a single string. Entries
/// are trimmed, a leading "• " bullet prefix is stripped, and empty
/// lines are dropped.
fn responsibility_lines(value: Option<&Value>) -> Vec<String> {
    let lines: Vec<String> = match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        Some(Value::String(line)) => vec![line.clone()],
        _ => Vec::new(),
    };

    lines
        .iter()
        .map(|line| line.trim().trim_start_matches('•').trim_start().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Skill entries: a list of strings, or one comma-separated string.
fn skill_list(value: Option<&Value>) -> Vec<String> {
    let raw: Vec<String> = match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        Some(Value::String(joined)) => joined.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    };

    raw.iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.len() >= 3
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
