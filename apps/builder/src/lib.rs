//! Core engine for the guided résumé builder.
//!
//! Two subsystems carry the real control flow: the wizard state machine
//! (`wizard` + `autosave`) that gates step progression, validates each
//! step, and persists snapshots to the remote store; and the export
//! pipeline (`export`) that captures the rendered document as a raster
//! and assembles a paginated A4 PDF. The page shell, pixel painting,
//! and the store engine itself are external collaborators reached
//! through `store` and `render`.

pub mod autosave;
pub mod config;
pub mod errors;
pub mod export;
pub mod models;
pub mod render;
pub mod store;
pub mod wizard;

pub use autosave::{AutosavePersister, SaveOutcome};
pub use config::Config;
pub use errors::BuilderError;
pub use export::ExportPipeline;
pub use store::ResumeStoreClient;
pub use wizard::WizardController;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes structured logging for the hosting binary. Call once at
/// startup; `RUST_LOG` overrides the given default filter.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter.to_string())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
