//! Autosave — pushes wizard snapshots to the résumé store.
//!
//! Persistence is best-effort and at-least-once: a failed save is logged
//! and swallowed, never surfaced as an interruption — the wizard's local
//! state is the source of truth until the next successful save, and the
//! next natural snapshot is the retry. There is no dedicated retry loop,
//! so a session abandoned right after a failed save can lose the delta.
//!
//! The first snapshot of a session creates the remote draft. While that
//! create call is in flight the binding is `Creating` and later
//! snapshots queue behind it, so at most one create is ever outstanding
//! and updates never race ahead of identifier assignment.

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::resume::{CreateResumeRequest, ResumeStatus, UpdateResumeRequest};
use crate::store::ResumeStore;
use crate::wizard::controller::{SaveIntent, Snapshot};

/// What became of one submitted snapshot. Failures are already logged
/// when this is returned; callers only branch on navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Queued behind an in-flight create call; it will be flushed as an
    /// update once the identifier is bound.
    Queued,
    Saved {
        completed: bool,
    },
    Failed,
}

impl SaveOutcome {
    /// True only for a successfully saved completed snapshot, the cue to
    /// navigate to the preview/export screen.
    pub fn should_navigate(self) -> bool {
        matches!(
            self,
            SaveOutcome::Saved { completed: true }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Binding {
    Unbound,
    Creating,
    Bound(Uuid),
}

struct PersisterState {
    binding: Binding,
    queued: VecDeque<Snapshot>,
}

/// Consumes snapshot events from the wizard controller and persists them
/// through the store boundary.
pub struct AutosavePersister {
    store: Arc<dyn ResumeStore>,
    state: Mutex<PersisterState>,
}

enum Action {
    Update(Uuid, Snapshot),
    Create,
}

impl AutosavePersister {
    /// A persister for a fresh session; the first snapshot creates the
    /// remote draft.
    pub fn new(store: Arc<dyn ResumeStore>) -> Self {
        Self {
            store,
            state: Mutex::new(PersisterState {
                binding: Binding::Unbound,
                queued: VecDeque::new(),
            }),
        }
    }

    /// A persister already bound to a stored résumé (edit flow).
    pub fn bound(store: Arc<dyn ResumeStore>, id: Uuid) -> Self {
        Self {
            store,
            state: Mutex::new(PersisterState {
                binding: Binding::Bound(id),
                queued: VecDeque::new(),
            }),
        }
    }

    /// The bound identifier, once the create call has resolved.
    pub async fn resume_id(&self) -> Option<Uuid> {
        match self.state.lock().await.binding {
            Binding::Bound(id) => Some(id),
            _ => None,
        }
    }

    /// Persists one snapshot. Never returns an error: failures are
    /// logged and reported as an outcome so autosave can never block the
    /// wizard's forward progression.
    pub async fn submit(&self, snapshot: Snapshot) -> SaveOutcome {
        let action = {
            let mut state = self.state.lock().await;
            match state.binding {
                Binding::Bound(id) => Action::Update(id, snapshot),
                Binding::Creating => {
                    state.queued.push_back(snapshot);
                    return SaveOutcome::Queued;
                }
                Binding::Unbound => {
                    state.binding = Binding::Creating;
                    state.queued.push_back(snapshot);
                    Action::Create
                }
            }
        };

        match action {
            Action::Update(id, snapshot) => self.push_update(id, snapshot).await,
            Action::Create => self.create_and_flush().await,
        }
    }

    /// Issues the one create call for this session, then flushes every
    /// snapshot gathered so far (the triggering one and anything queued
    /// behind it) as updates, in emission order.
    async fn create_and_flush(&self) -> SaveOutcome {
        let request = CreateResumeRequest::placeholder();
        let id = match self.store.create_resume(&request).await {
            Ok(created) => created.id,
            Err(e) => {
                warn!("Autosave create failed: {e}");
                // Keep the queued snapshots; the next snapshot's create
                // attempt flushes them.
                self.state.lock().await.binding = Binding::Unbound;
                return SaveOutcome::Failed;
            }
        };
        debug!("Bound wizard session to resume {id}");

        let pending = {
            let mut state = self.state.lock().await;
            state.binding = Binding::Bound(id);
            std::mem::take(&mut state.queued)
        };

        let mut outcome = SaveOutcome::Failed;
        for snapshot in pending {
            outcome = self.push_update(id, snapshot).await;
        }
        outcome
    }

    async fn push_update(&self, id: Uuid, snapshot: Snapshot) -> SaveOutcome {
        let completed = snapshot.intent == SaveIntent::Completed;
        let request = UpdateResumeRequest {
            content: snapshot.content,
            status: completed.then_some(ResumeStatus::Completed),
        };
        match self.store.update_resume(id, &request).await {
            Ok(()) => SaveOutcome::Saved { completed },
            Err(e) => {
                warn!("Autosave update for resume {id} failed: {e}");
                SaveOutcome::Failed
            }
        }
    }
}
