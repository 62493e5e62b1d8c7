//! Wizard Controller — owns the session state machine.
//!
//! States are the five steps plus an implicit terminal completed state,
//! reached only from the last step's accepted submission. Transitions
//! are strictly forward-gated by validation: the step pointer never
//! moves past a step whose validation failed, and `collected` only grows.
//! The session is transient — it lives as long as its owner holds it and
//! is lost if abandoned before any snapshot fires.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::models::content::ResumeContent;
use crate::wizard::steps::{EducationStep, ProfileStep, StepId, StepPayload};
use crate::wizard::validator::{validate_step, ValidationErrors};

/// How a snapshot should be persisted: intermediate steps save drafts,
/// the final step completes the résumé.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveIntent {
    Draft,
    Completed,
}

/// The full merged wizard content at a point in time, emitted for
/// persistence after every accepted submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub content: ResumeContent,
    pub intent: SaveIntent,
}

#[derive(Debug, Error, PartialEq)]
pub enum WizardError {
    #[error("Step index {0} is out of range")]
    OutOfRange(usize),

    #[error("Step {requested} has not been reached yet (furthest step: {reached})")]
    NotReached { requested: usize, reached: usize },
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Navigation(WizardError),
}

impl SubmitError {
    /// The field errors of a rejected submission, if that is what failed.
    pub fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            SubmitError::Validation(errors) => Some(errors),
            SubmitError::Navigation(_) => None,
        }
    }
}

/// Per-step validated payloads. Accumulates monotonically: once a step
/// is accepted its payload is retained until overwritten by a
/// resubmission of that same step.
#[derive(Debug, Clone, Default, PartialEq)]
struct CollectedSteps {
    personal: Option<crate::models::content::PersonalDetails>,
    experience: Option<Vec<crate::models::content::ExperienceEntry>>,
    education: Option<EducationStep>,
    profile: Option<ProfileStep>,
}

impl CollectedSteps {
    fn insert(&mut self, payload: StepPayload) {
        match payload {
            StepPayload::Personal(details) => self.personal = Some(details),
            StepPayload::Experience(entries) => self.experience = Some(entries),
            StepPayload::Education(group) => self.education = Some(group),
            StepPayload::Profile(profile) => self.profile = Some(profile),
            StepPayload::Review => {}
        }
    }

    /// Merged view in canonical section order. Unvisited steps contribute
    /// empty defaults, so the result is always structurally complete.
    fn merged(&self) -> ResumeContent {
        let mut content = ResumeContent::default();
        if let Some(personal) = &self.personal {
            content.personal = personal.clone();
        }
        if let Some(experience) = &self.experience {
            content.experience = experience.clone();
        }
        if let Some(group) = &self.education {
            content.education = group.education.clone();
            content.certifications = group.certifications.clone();
            content.projects = group.projects.clone();
            content.languages = group.languages.clone();
        }
        if let Some(profile) = &self.profile {
            content.summary = profile.summary.clone();
            content.skills = profile.skills.clone();
        }
        content
    }

    /// Seeds the bag from existing content (edit flow, or profile-derived
    /// defaults for a new session).
    fn seed(content: ResumeContent) -> Self {
        Self {
            personal: Some(content.personal),
            experience: Some(content.experience),
            education: Some(EducationStep {
                education: content.education,
                certifications: content.certifications,
                projects: content.projects,
                languages: content.languages,
            }),
            profile: Some(ProfileStep {
                summary: content.summary,
                skills: content.skills,
            }),
        }
    }
}

/// Owns the wizard session. One instance per hosting page; passed by
/// reference to whichever step screen is active — no ambient state.
#[derive(Debug)]
pub struct WizardController {
    current: usize,
    max_reached: usize,
    completed: bool,
    collected: CollectedSteps,
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardController {
    /// A fresh session with no pre-filled content.
    pub fn new() -> Self {
        Self {
            current: 0,
            max_reached: 0,
            completed: false,
            collected: CollectedSteps::default(),
        }
    }

    /// A session seeded with existing content — editing a stored draft,
    /// or starting from profile-derived defaults.
    pub fn with_initial(content: ResumeContent) -> Self {
        Self {
            current: 0,
            max_reached: 0,
            completed: false,
            collected: CollectedSteps::seed(content),
        }
    }

    pub fn current_step(&self) -> StepId {
        StepId::ALL[self.current]
    }

    pub fn current_step_index(&self) -> usize {
        self.current
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Submits one step's raw payload.
    ///
    /// On acceptance the payload is merged into the session, the step
    /// pointer advances by one (clamped to the last step), and a snapshot
    /// is emitted with intent `Draft` — or `Completed` when the last step
    /// was accepted. On rejection the session is left untouched and the
    /// field errors are returned.
    pub fn submit_step(&mut self, step: StepId, raw: &Value) -> Result<Snapshot, SubmitError> {
        if step.index() > self.max_reached {
            return Err(SubmitError::Navigation(WizardError::NotReached {
                requested: step.index(),
                reached: self.max_reached,
            }));
        }

        let payload = validate_step(step, raw)?;
        self.collected.insert(payload);

        let intent = if step.is_last() {
            self.completed = true;
            SaveIntent::Completed
        } else {
            SaveIntent::Draft
        };

        let next = (step.index() + 1).min(StepId::COUNT - 1);
        self.current = next;
        self.max_reached = self.max_reached.max(next);
        debug!(
            "Accepted step {:?}, now at step {} (intent {:?})",
            step, self.current, intent
        );

        Ok(Snapshot {
            content: self.collected.merged(),
            intent,
        })
    }

    /// Moves to a step the user has already reached. Skipping ahead of
    /// the furthest reached step is rejected; moving backward never
    /// discards collected data.
    pub fn go_to_step(&mut self, index: usize) -> Result<(), WizardError> {
        if index >= StepId::COUNT {
            return Err(WizardError::OutOfRange(index));
        }
        if index > self.max_reached {
            return Err(WizardError::NotReached {
                requested: index,
                reached: self.max_reached,
            });
        }
        self.current = index;
        Ok(())
    }

    /// The merged view of everything collected so far, in canonical
    /// section order, with empty defaults for unvisited steps.
    pub fn snapshot_content(&self) -> ResumeContent {
        self.collected.merged()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn personal_payload(first_name: &str) -> Value {
        json!({
            "firstName": first_name,
            "lastName": "Taylor",
            "title": "Accountant",
            "email": "riley@example.com",
            "phone": "305-123-4444"
        })
    }

    fn experience_payload(company: &str) -> Value {
        json!([{ "title": "Senior Accountant", "company": company }])
    }

    /// Drives an empty controller through steps 0..k with valid payloads.
    fn advance_through(controller: &mut WizardController, k: usize) {
        let payloads = [
            personal_payload("Riley"),
            experience_payload("Acme"),
            json!({ "education": [{ "degree": "BSc", "institute": "MIT" }] }),
            json!({ "summary": "Numbers person.", "skills": { "core": ["Accounting"] } }),
            json!({}),
        ];
        for (i, payload) in payloads.iter().enumerate().take(k) {
            let step = StepId::from_index(i).unwrap();
            controller
                .submit_step(step, payload)
                .unwrap_or_else(|e| panic!("step {i} should be accepted: {e}"));
        }
    }

    // ── validation gating ───────────────────────────────────────────────────

    #[test]
    fn test_rejected_submission_leaves_state_unchanged() {
        let mut controller = WizardController::new();
        let before = controller.snapshot_content();

        let error = controller
            .submit_step(StepId::Personal, &personal_payload("A"))
            .unwrap_err();

        let errors = error.validation().expect("should be a validation error");
        assert_eq!(errors.message_for("firstName"), Some("First name is required"));
        assert_eq!(controller.current_step_index(), 0);
        assert_eq!(controller.snapshot_content(), before);
    }

    #[test]
    fn test_accepted_submission_advances_and_emits_draft_snapshot() {
        let mut controller = WizardController::new();
        let snapshot = controller
            .submit_step(StepId::Personal, &personal_payload("Al"))
            .unwrap();

        assert_eq!(controller.current_step_index(), 1);
        assert_eq!(snapshot.intent, SaveIntent::Draft);
        assert_eq!(snapshot.content.personal.first_name, "Al");
    }

    #[test]
    fn test_two_char_name_passes_then_one_char_rejected() {
        // The boundary scenario: "Al" advances, then revisiting with "A"
        // is rejected and the pointer stays put.
        let mut controller = WizardController::new();
        controller
            .submit_step(StepId::Personal, &personal_payload("Al"))
            .unwrap();
        assert_eq!(controller.current_step_index(), 1);

        controller.go_to_step(0).unwrap();
        let error = controller
            .submit_step(StepId::Personal, &personal_payload("A"))
            .unwrap_err();
        assert!(error.validation().is_some());
        assert_eq!(controller.current_step_index(), 0);
        assert_eq!(controller.snapshot_content().personal.first_name, "Al");
    }

    // ── snapshots ───────────────────────────────────────────────────────────

    #[test]
    fn test_snapshot_has_defaults_for_unvisited_steps() {
        let mut controller = WizardController::new();
        advance_through(&mut controller, 2);

        let content = controller.snapshot_content();
        assert_eq!(content.personal.first_name, "Riley");
        assert_eq!(content.experience[0].company, "Acme");
        // Steps 2.. have not been submitted; their sections are defaults.
        assert!(content.education.is_empty());
        assert_eq!(content.summary, "");
        assert!(content.skills.is_empty());
    }

    #[test]
    fn test_final_step_emits_completed_snapshot() {
        let mut controller = WizardController::new();
        advance_through(&mut controller, 4);
        assert!(!controller.is_completed());

        let snapshot = controller.submit_step(StepId::Review, &json!({})).unwrap();
        assert_eq!(snapshot.intent, SaveIntent::Completed);
        assert!(controller.is_completed());
        // The pointer clamps at the last step.
        assert_eq!(controller.current_step_index(), StepId::COUNT - 1);
    }

    #[test]
    fn test_completed_stays_completed_after_further_edits() {
        let mut controller = WizardController::new();
        advance_through(&mut controller, 5);
        assert!(controller.is_completed());

        controller.go_to_step(0).unwrap();
        let snapshot = controller
            .submit_step(StepId::Personal, &personal_payload("Robin"))
            .unwrap();
        // Editing an earlier step of a completed session saves a draft
        // snapshot but never reverts the completed state.
        assert_eq!(snapshot.intent, SaveIntent::Draft);
        assert!(controller.is_completed());
    }

    // ── revisiting ──────────────────────────────────────────────────────────

    #[test]
    fn test_resubmitting_a_step_overwrites_only_that_step() {
        let mut controller = WizardController::new();
        advance_through(&mut controller, 4);

        controller.go_to_step(1).unwrap();
        controller
            .submit_step(StepId::Experience, &experience_payload("Globex"))
            .unwrap();

        let content = controller.snapshot_content();
        assert_eq!(content.experience[0].company, "Globex");
        // Later steps' data is unaffected.
        assert_eq!(content.education[0].institute, "MIT");
        assert_eq!(content.summary, "Numbers person.");
    }

    #[test]
    fn test_moving_backward_keeps_collected_data() {
        let mut controller = WizardController::new();
        advance_through(&mut controller, 3);

        controller.go_to_step(0).unwrap();
        assert_eq!(controller.current_step_index(), 0);
        assert_eq!(controller.snapshot_content().experience[0].company, "Acme");
    }

    #[test]
    fn test_can_return_forward_after_revisiting() {
        let mut controller = WizardController::new();
        advance_through(&mut controller, 3);

        controller.go_to_step(0).unwrap();
        // Step 3 was reached before going back, so it stays reachable.
        controller.go_to_step(3).unwrap();
        assert_eq!(controller.current_step_index(), 3);
    }

    // ── navigation guards ───────────────────────────────────────────────────

    #[test]
    fn test_cannot_skip_ahead() {
        let mut controller = WizardController::new();
        assert_eq!(
            controller.go_to_step(2),
            Err(WizardError::NotReached {
                requested: 2,
                reached: 0
            })
        );
        assert_eq!(
            controller.go_to_step(StepId::COUNT),
            Err(WizardError::OutOfRange(StepId::COUNT))
        );
    }

    #[test]
    fn test_cannot_submit_an_unreached_step() {
        let mut controller = WizardController::new();
        let error = controller
            .submit_step(StepId::Review, &json!({}))
            .unwrap_err();
        assert!(error.validation().is_none());
        assert_eq!(controller.current_step_index(), 0);
        assert!(!controller.is_completed());
    }

    // ── seeding ─────────────────────────────────────────────────────────────

    #[test]
    fn test_seeded_session_starts_with_initial_content() {
        let mut initial = ResumeContent::default();
        initial.personal.first_name = "Riley".to_string();
        initial.summary = "Seeded from the profile headline".to_string();

        let controller = WizardController::with_initial(initial.clone());
        assert_eq!(controller.current_step_index(), 0);
        assert_eq!(controller.snapshot_content(), initial);
    }
}
