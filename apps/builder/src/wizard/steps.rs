//! Step identifiers and the typed payload each step produces.

use serde::{Deserialize, Serialize};

use crate::models::content::{
    CertificationEntry, EducationEntry, ExperienceEntry, LanguageEntry, PersonalDetails,
    ProjectEntry, Skills,
};

/// One screen of the wizard. Order is the wizard order; `Review` is the
/// last step and the only one whose accepted submission completes the
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepId {
    Personal,
    Experience,
    Education,
    Profile,
    Review,
}

impl StepId {
    pub const ALL: [StepId; 5] = [
        StepId::Personal,
        StepId::Experience,
        StepId::Education,
        StepId::Profile,
        StepId::Review,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        match self {
            StepId::Personal => 0,
            StepId::Experience => 1,
            StepId::Education => 2,
            StepId::Profile => 3,
            StepId::Review => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<StepId> {
        Self::ALL.get(index).copied()
    }

    pub fn is_last(self) -> bool {
        self.index() == Self::COUNT - 1
    }
}

/// Validated payload of a single step. Each variant carries the record
/// type for its section group — no untyped bags cross the wizard
/// boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum StepPayload {
    Personal(PersonalDetails),
    Experience(Vec<ExperienceEntry>),
    Education(EducationStep),
    Profile(ProfileStep),
    Review,
}

impl StepPayload {
    pub fn step(&self) -> StepId {
        match self {
            StepPayload::Personal(_) => StepId::Personal,
            StepPayload::Experience(_) => StepId::Experience,
            StepPayload::Education(_) => StepId::Education,
            StepPayload::Profile(_) => StepId::Profile,
            StepPayload::Review => StepId::Review,
        }
    }
}

/// Section group edited on the education step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EducationStep {
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub languages: Vec<LanguageEntry>,
}

/// Summary and skills, edited together on the profile step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileStep {
    pub summary: String,
    pub skills: Skills,
}
