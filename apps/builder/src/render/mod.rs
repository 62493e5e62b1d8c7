//! Renderer Contract — the projection the visual document layer receives.
//!
//! Pixel layout is the UI collaborator's job; this module fixes the data
//! contract it must satisfy: a header that is always present, followed
//! by sections in display order with empty sections omitted. Built from
//! the controller's snapshot, which is structurally complete even before
//! every step has been visited.

use crate::models::content::{
    CertificationEntry, EducationEntry, ExperienceEntry, LanguageEntry, ProjectEntry,
    ResumeContent, Skills,
};

/// Name shown when the personal step has not been filled in yet.
const NAME_PLACEHOLDER: &str = "Your Name";

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentView {
    /// Full name, or a placeholder before the personal step is filled.
    pub display_name: String,
    /// Desired job title, shown under the name; empty when unset.
    pub headline: String,
    /// Contact fragments in display order: email, phone, location.
    pub contact_line: Vec<String>,
    pub sections: Vec<SectionView>,
}

/// One rendered section, in display order. Only non-empty sections are
/// projected.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionView {
    Summary(String),
    Experience(Vec<ExperienceEntry>),
    Projects(Vec<ProjectEntry>),
    Skills(Skills),
    Education(Vec<EducationEntry>),
    Certifications(Vec<CertificationEntry>),
    Languages(Vec<LanguageEntry>),
}

impl DocumentView {
    pub fn from_content(content: &ResumeContent) -> Self {
        let full_name = content.personal.full_name();
        let display_name = if full_name.is_empty() {
            NAME_PLACEHOLDER.to_string()
        } else {
            full_name
        };

        let mut contact_line = Vec::new();
        for part in [&content.personal.email, &content.personal.phone] {
            if !part.is_empty() {
                contact_line.push(part.clone());
            }
        }
        let location = location_line(&content.personal.city, &content.personal.country);
        if !location.is_empty() {
            contact_line.push(location);
        }

        let mut sections = Vec::new();
        if !content.summary.is_empty() {
            sections.push(SectionView::Summary(content.summary.clone()));
        }
        if !content.experience.is_empty() {
            sections.push(SectionView::Experience(content.experience.clone()));
        }
        if !content.projects.is_empty() {
            sections.push(SectionView::Projects(content.projects.clone()));
        }
        if !content.skills.is_empty() {
            sections.push(SectionView::Skills(content.skills.clone()));
        }
        if !content.education.is_empty() {
            sections.push(SectionView::Education(content.education.clone()));
        }
        if !content.certifications.is_empty() {
            sections.push(SectionView::Certifications(content.certifications.clone()));
        }
        if !content.languages.is_empty() {
            sections.push(SectionView::Languages(content.languages.clone()));
        }

        DocumentView {
            display_name,
            headline: content.personal.title.clone(),
            contact_line,
            sections,
        }
    }
}

fn location_line(city: &str, country: &str) -> String {
    [city, country]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}
