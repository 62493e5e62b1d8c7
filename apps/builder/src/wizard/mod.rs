// Wizard core: step identifiers, per-step schema validation, and the
// controller that gates progression and emits persistence snapshots.

pub mod controller;
pub mod steps;
pub mod validator;

pub use controller::{SaveIntent, Snapshot, SubmitError, WizardController, WizardError};
pub use steps::{StepId, StepPayload};
pub use validator::{validate_step, FieldError, ValidationErrors};
