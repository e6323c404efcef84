//! StateCoordinator - loads, saves and resets the shared ToolkitState.
//!
//! Storage problems never surface as errors. They are logged and the caller
//! keeps working on its in-memory state, learning the outcome through
//! `SaveOutcome`.

use std::sync::Arc;

use crate::domain::foundation::ToolKind;
use crate::domain::toolkit::ToolkitState;
use crate::ports::StateStorage;

/// Storage key used when none is configured.
pub const DEFAULT_STATE_KEY: &str = "mediaAIToolkitState";

/// Whether a save reached storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Persisted,
    /// Storage failed; the state only lives in memory until the next save.
    InMemoryOnly,
}

impl SaveOutcome {
    pub fn is_persisted(&self) -> bool {
        matches!(self, SaveOutcome::Persisted)
    }
}

/// Coordinates the single toolkit record with the key-value store.
pub struct StateCoordinator {
    storage: Arc<dyn StateStorage>,
    key: String,
}

impl StateCoordinator {
    pub fn new(storage: Arc<dyn StateStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Parses a stored blob and repairs it. `None` for malformed JSON.
    pub fn parse_state(blob: &str) -> Option<ToolkitState> {
        match serde_json::from_str::<ToolkitState>(blob) {
            Ok(mut state) => {
                state.normalize();
                Some(state)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Discarding malformed stored state");
                None
            }
        }
    }

    /// Reads the stored state, falling back to defaults when it is absent,
    /// unreadable or malformed.
    pub async fn load(&self) -> ToolkitState {
        let blob = match self.storage.get_item(&self.key).await {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                tracing::debug!(key = %self.key, "No stored state, starting fresh");
                return ToolkitState::new();
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read stored state");
                return ToolkitState::new();
            }
        };

        match Self::parse_state(&blob) {
            Some(state) => {
                tracing::debug!(
                    key = %self.key,
                    current_tool = %state.current_tool,
                    completed = state.completed_count(),
                    "Loaded stored state"
                );
                state
            }
            None => ToolkitState::new(),
        }
    }

    /// Serializes the whole state under the configured key.
    pub async fn save(&self, state: &ToolkitState) -> SaveOutcome {
        let blob = match serde_json::to_string(state) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize state");
                return SaveOutcome::InMemoryOnly;
            }
        };

        match self.storage.set_item(&self.key, &blob).await {
            Ok(()) => SaveOutcome::Persisted,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to save state, keeping it in memory");
                SaveOutcome::InMemoryOnly
            }
        }
    }

    /// Clears one tool's answers and persists.
    pub async fn reset(&self, state: &mut ToolkitState, tool: ToolKind) -> SaveOutcome {
        state.reset_tool(tool);
        tracing::info!(tool = %tool, "Reset tool");
        self.save(state).await
    }

    /// Switches the active tool and persists.
    pub async fn activate(&self, state: &mut ToolkitState, tool: ToolKind) -> SaveOutcome {
        state.activate(tool);
        self.save(state).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryStateStorage;
    use crate::domain::assessment::{Category, QuestionId};
    use crate::domain::foundation::{AnswerValue, Choice};
    use crate::ports::StateStorageError;
    use async_trait::async_trait;

    struct FailingStorage;

    #[async_trait]
    impl StateStorage for FailingStorage {
        async fn get_item(&self, _key: &str) -> Result<Option<String>, StateStorageError> {
            Err(StateStorageError::Unavailable("quota exceeded".to_string()))
        }

        async fn set_item(&self, _key: &str, _value: &str) -> Result<(), StateStorageError> {
            Err(StateStorageError::Unavailable("quota exceeded".to_string()))
        }

        async fn remove_item(&self, _key: &str) -> Result<(), StateStorageError> {
            Err(StateStorageError::Unavailable("quota exceeded".to_string()))
        }
    }

    fn coordinator() -> (StateCoordinator, InMemoryStateStorage) {
        let storage = InMemoryStateStorage::new();
        let coordinator = StateCoordinator::new(Arc::new(storage.clone()), DEFAULT_STATE_KEY);
        (coordinator, storage)
    }

    fn answered_state() -> ToolkitState {
        let mut state = ToolkitState::new();
        state.update(|data| {
            for category in Category::all() {
                for q in QuestionId::all_in(*category) {
                    data.assessment.answer(q, AnswerValue::try_new(3).unwrap());
                }
            }
        });
        state
    }

    #[tokio::test]
    async fn load_without_stored_state_gives_defaults() {
        let (coordinator, _) = coordinator();
        assert_eq!(coordinator.load().await, ToolkitState::new());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let (coordinator, _) = coordinator();
        let mut state = answered_state();
        state.activate(ToolKind::Roadmap);

        assert_eq!(coordinator.save(&state).await, SaveOutcome::Persisted);
        assert_eq!(coordinator.load().await, state);
    }

    #[tokio::test]
    async fn malformed_json_is_discarded() {
        let (coordinator, storage) = coordinator();
        storage.set_item(DEFAULT_STATE_KEY, "{not json").await.unwrap();

        assert_eq!(coordinator.load().await, ToolkitState::new());
    }

    #[tokio::test]
    async fn load_clamps_tampered_steps() {
        let (coordinator, storage) = coordinator();
        let blob = r#"{"current_tool":"roi","tool_data":{"assessment":{"current_step":42}}}"#;
        storage.set_item(DEFAULT_STATE_KEY, blob).await.unwrap();

        let state = coordinator.load().await;

        assert_eq!(state.current_tool, ToolKind::Roi);
        assert_eq!(state.tool_data.assessment.current_step.value(), 5);
        assert_eq!(state.user_progress.len(), 4);
    }

    #[tokio::test]
    async fn reset_clears_progress_and_persists() {
        let (coordinator, _) = coordinator();
        let mut state = answered_state();
        assert!(state.is_complete(ToolKind::Assessment));

        let outcome = coordinator.reset(&mut state, ToolKind::Assessment).await;

        assert_eq!(outcome, SaveOutcome::Persisted);
        assert!(!state.is_complete(ToolKind::Assessment));
        assert_eq!(coordinator.load().await, state);
    }

    #[tokio::test]
    async fn storage_failures_are_not_fatal() {
        let coordinator = StateCoordinator::new(Arc::new(FailingStorage), DEFAULT_STATE_KEY);
        let mut state = answered_state();

        assert_eq!(coordinator.load().await, ToolkitState::new());
        assert_eq!(coordinator.save(&state).await, SaveOutcome::InMemoryOnly);
        let outcome = coordinator.activate(&mut state, ToolKind::Roi).await;
        assert_eq!(outcome, SaveOutcome::InMemoryOnly);
        assert_eq!(state.current_tool, ToolKind::Roi);
    }
}
