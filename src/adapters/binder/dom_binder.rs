//! DomBinder - applies page events to the shared state and renders the result.
//!
//! Flow per event: bind the element id on the page registry, mutate the
//! owning wizard, re-derive progress, persist through the coordinator, then
//! render the page with any one-shot effects.

use std::sync::Arc;

use crate::application::{GenerateReportHandler, GenerateReportQuery, SaveOutcome, StateCoordinator};
use crate::domain::foundation::ToolKind;
use crate::domain::roadmap::MAX_PRIORITY_USE_CASES;
use crate::domain::toolkit::ToolkitState;
use crate::ports::ExportFormat;

use super::element::{Button, ElementId};
use super::events::{BinderError, BoundEvent, UiEvent};
use super::view::{
    Effect, ScrollTarget, ToastKind, ViewModel, PDF_UNAVAILABLE, PRINT_INSTRUCTIONS,
};

pub const SAVE_FAILED: &str = "Your progress could not be saved. Changes are kept for this session only.";

/// Binder behavior switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinderSettings {
    /// Persist after every state change, not only on page hide/unload.
    pub autosave: bool,
}

impl Default for BinderSettings {
    fn default() -> Self {
        Self { autosave: true }
    }
}

pub struct DomBinder {
    coordinator: Arc<StateCoordinator>,
    reports: Arc<GenerateReportHandler>,
    settings: BinderSettings,
}

impl DomBinder {
    pub fn new(
        coordinator: Arc<StateCoordinator>,
        reports: Arc<GenerateReportHandler>,
        settings: BinderSettings,
    ) -> Self {
        Self {
            coordinator,
            reports,
            settings,
        }
    }

    pub fn coordinator(&self) -> &StateCoordinator {
        &self.coordinator
    }

    /// "Save as PDF" works only while a text exporter is registered.
    pub fn pdf_export_enabled(&self) -> bool {
        self.reports.supports(ExportFormat::Text)
    }

    /// Page load: marks `tool` as current and renders it.
    pub async fn open_page(&self, state: &mut ToolkitState, tool: ToolKind) -> ViewModel {
        let mut effects = Vec::new();
        if state.current_tool != tool {
            let outcome = self.coordinator.activate(state, tool).await;
            Self::note_outcome(outcome, &mut effects);
        }
        let mut view = ViewModel::render(state, tool);
        view.effects = effects;
        view
    }

    /// Clears `tool`'s data, persists, and renders its first step.
    pub async fn reset(&self, state: &mut ToolkitState, tool: ToolKind) -> ViewModel {
        let mut effects = Vec::new();
        self.reset_tool(state, tool, &mut effects).await;
        let mut view = ViewModel::render(state, tool);
        view.effects = effects;
        view
    }

    /// Applies one event from `page` and renders the resulting view.
    ///
    /// # Errors
    ///
    /// Returns `BinderError` for ids the page does not render; the state is
    /// left untouched.
    pub async fn dispatch(
        &self,
        state: &mut ToolkitState,
        page: ToolKind,
        event: UiEvent,
    ) -> Result<ViewModel, BinderError> {
        let bound = event.bind(page).map_err(|e| {
            tracing::warn!(page = %page.slug(), error = %e, "Ignoring event");
            e
        })?;
        tracing::debug!(page = %page.slug(), event = ?bound, "Dispatching event");

        let mut effects = Vec::new();
        let mut view_tool = page;

        let save = match bound {
            BoundEvent::Click(id) => {
                let changed = self.click(state, page, id, &mut effects, &mut view_tool).await;
                changed && self.settings.autosave
            }
            BoundEvent::Change(id, value) => {
                let changed = Self::change(state, id, &value, &mut effects);
                changed && self.settings.autosave
            }
            BoundEvent::VisibilityHidden | BoundEvent::PageUnload => true,
        };

        if save {
            let outcome = self.coordinator.save(state).await;
            Self::note_outcome(outcome, &mut effects);
        }

        let mut view = ViewModel::render(state, view_tool);
        view.effects = effects;
        Ok(view)
    }

    /// Returns whether the state changed and needs saving.
    async fn click(
        &self,
        state: &mut ToolkitState,
        page: ToolKind,
        id: ElementId,
        effects: &mut Vec<Effect>,
        view_tool: &mut ToolKind,
    ) -> bool {
        match id {
            ElementId::NavLink(tool) => {
                // Switching tools always persists, autosave or not.
                let outcome = self.coordinator.activate(state, tool).await;
                *view_tool = tool;
                effects.push(Effect::Navigate {
                    href: tool.page_path(),
                });
                Self::note_outcome(outcome, effects);
                false
            }
            ElementId::Answer { question, value } => {
                state.update(|data| data.assessment.answer(question, value));
                true
            }
            ElementId::ArchitectureOption(option) => {
                state.update(|data| data.architecture.apply(option));
                true
            }
            ElementId::RoadmapOption(option) => {
                match state.update(|data| data.roadmap.apply(option)) {
                    Ok(_) => true,
                    Err(e) => {
                        tracing::debug!(error = %e, "Rejected roadmap option");
                        effects.push(Effect::toast(
                            ToastKind::Warning,
                            format!(
                                "You can prioritize at most {} use cases.",
                                MAX_PRIORITY_USE_CASES
                            ),
                        ));
                        false
                    }
                }
            }
            ElementId::RoiOption(option) => {
                state.update(|data| data.roi.apply(option));
                true
            }
            ElementId::HorizonToggle(horizon) => {
                state.update(|data| data.roi.set_horizon(horizon));
                true
            }
            ElementId::RoiFigure(_) => false,
            ElementId::Button(button) => self.press(state, page, button, effects).await,
        }
    }

    async fn press(
        &self,
        state: &mut ToolkitState,
        page: ToolKind,
        button: Button,
        effects: &mut Vec<Effect>,
    ) -> bool {
        match button {
            Button::Next => {
                state.update(|data| data.wizard_mut(page).next_step());
                effects.push(Effect::ScrollTo {
                    target: ScrollTarget::Top,
                });
                true
            }
            Button::Back => {
                state.update(|data| data.wizard_mut(page).previous_step());
                effects.push(Effect::ScrollTo {
                    target: ScrollTarget::Top,
                });
                true
            }
            Button::Calculate => {
                let missing = state.wizard(page).missing_fields();
                if !missing.is_empty() {
                    effects.push(Effect::toast(
                        ToastKind::Info,
                        format!("Still to answer: {}", missing.join(", ")),
                    ));
                }
                effects.push(Effect::ScrollTo {
                    target: ScrollTarget::Results,
                });
                false
            }
            Button::Download => {
                self.download(state, page, ExportFormat::Json, effects).await;
                false
            }
            Button::SavePdf => {
                if self.pdf_export_enabled() {
                    if self.download(state, page, ExportFormat::Text, effects).await {
                        effects.push(Effect::alert(PRINT_INSTRUCTIONS));
                    }
                } else {
                    effects.push(Effect::alert(PDF_UNAVAILABLE));
                }
                false
            }
            Button::Reset => {
                self.reset_tool(state, page, effects).await;
                false
            }
        }
    }

    /// Pushes a download effect; returns whether a file was produced.
    async fn download(
        &self,
        state: &ToolkitState,
        page: ToolKind,
        format: ExportFormat,
        effects: &mut Vec<Effect>,
    ) -> bool {
        let query = GenerateReportQuery { tool: page, format };
        match self.reports.handle(state, query).await {
            Ok(exported) => {
                let content = exported.content_lossy();
                effects.push(Effect::Download {
                    filename: exported.filename.clone(),
                    content_type: exported.content_type,
                    content,
                });
                effects.push(Effect::toast(
                    ToastKind::Success,
                    format!("Downloaded {}", exported.filename),
                ));
                true
            }
            Err(e) => {
                tracing::warn!(tool = %page.slug(), error = %e, "Report generation failed");
                effects.push(Effect::toast(ToastKind::Error, e.to_string()));
                false
            }
        }
    }

    fn change(
        state: &mut ToolkitState,
        id: ElementId,
        value: &str,
        effects: &mut Vec<Effect>,
    ) -> bool {
        let ElementId::RoiFigure(figure) = id else {
            return false;
        };
        match state.update(|data| data.roi.set_figure(figure, value)) {
            Ok(()) => true,
            Err(e) => {
                effects.push(Effect::toast(ToastKind::Error, e.to_string()));
                false
            }
        }
    }

    async fn reset_tool(&self, state: &mut ToolkitState, tool: ToolKind, effects: &mut Vec<Effect>) {
        let outcome = self.coordinator.reset(state, tool).await;
        Self::note_outcome(outcome, effects);
        effects.push(Effect::toast(
            ToastKind::Info,
            format!("{} has been reset.", tool.display_name()),
        ));
    }

    fn note_outcome(outcome: SaveOutcome, effects: &mut Vec<Effect>) {
        if outcome == SaveOutcome::InMemoryOnly {
            effects.push(Effect::toast(ToastKind::Warning, SAVE_FAILED));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::export::{JsonReportExporter, TextReportExporter};
    use crate::adapters::storage::InMemoryStateStorage;
    use crate::application::DEFAULT_STATE_KEY;
    use crate::ports::StateStorage;

    struct Harness {
        binder: DomBinder,
        storage: InMemoryStateStorage,
        state: ToolkitState,
    }

    fn harness(pdf: bool, autosave: bool) -> Harness {
        let storage = InMemoryStateStorage::new();
        let coordinator = Arc::new(StateCoordinator::new(
            Arc::new(storage.clone()),
            DEFAULT_STATE_KEY,
        ));
        let mut exporters: Vec<Arc<dyn crate::ports::ReportExporter>> =
            vec![Arc::new(JsonReportExporter::new())];
        if pdf {
            exporters.push(Arc::new(TextReportExporter::new()));
        }
        let binder = DomBinder::new(
            coordinator,
            Arc::new(GenerateReportHandler::new(exporters)),
            BinderSettings { autosave },
        );
        Harness {
            binder,
            storage,
            state: ToolkitState::new(),
        }
    }

    fn click(element: &str) -> UiEvent {
        UiEvent::Click {
            element: element.to_string(),
        }
    }

    impl Harness {
        async fn send(&mut self, page: ToolKind, event: UiEvent) -> ViewModel {
            self.binder
                .dispatch(&mut self.state, page, event)
                .await
                .unwrap()
        }

        async fn stored(&self) -> Option<String> {
            self.storage.get_item(DEFAULT_STATE_KEY).await.unwrap()
        }
    }

    #[tokio::test]
    async fn single_select_click_deselects_siblings() {
        let mut h = harness(false, true);
        h.send(ToolKind::Architecture, click("option-primary_goal-monetization"))
            .await;
        let view = h
            .send(ToolKind::Architecture, click("option-primary_goal-content_discovery"))
            .await;

        assert!(view.option("option-primary_goal-content_discovery").unwrap().selected);
        assert!(!view.option("option-primary_goal-monetization").unwrap().selected);
    }

    #[tokio::test]
    async fn multi_select_click_toggles() {
        let mut h = harness(false, true);
        h.send(ToolKind::Architecture, click("option-content_types-video")).await;
        h.send(ToolKind::Architecture, click("option-content_types-audio")).await;
        let view = h
            .send(ToolKind::Architecture, click("option-content_types-video"))
            .await;

        assert!(!view.option("option-content_types-video").unwrap().selected);
        assert!(view.option("option-content_types-audio").unwrap().selected);
    }

    #[tokio::test]
    async fn state_change_is_persisted_with_autosave() {
        let mut h = harness(false, true);
        h.send(ToolKind::Assessment, click("answer-governance-1-3")).await;
        assert!(h.stored().await.is_some());
    }

    #[tokio::test]
    async fn without_autosave_only_page_hide_persists() {
        let mut h = harness(false, false);
        h.send(ToolKind::Assessment, click("answer-governance-1-3")).await;
        assert!(h.stored().await.is_none());

        h.send(ToolKind::Assessment, UiEvent::VisibilityHidden).await;
        assert!(h.stored().await.is_some());
    }

    #[tokio::test]
    async fn nav_click_persists_without_autosave() {
        let mut h = harness(false, false);
        h.send(ToolKind::Assessment, click("nav-roi")).await;

        let stored = h.stored().await.expect("nav switch should be stored");
        let loaded = StateCoordinator::parse_state(&stored).unwrap();
        assert_eq!(loaded.current_tool, ToolKind::Roi);
    }

    #[tokio::test]
    async fn next_and_back_stay_in_range() {
        let mut h = harness(false, true);
        let view = h.send(ToolKind::Roi, click("btn-back")).await;
        assert_eq!(view.current_step, 1);
        assert!(view.effects.contains(&Effect::ScrollTo {
            target: ScrollTarget::Top
        }));

        for _ in 0..10 {
            h.send(ToolKind::Roi, click("btn-next")).await;
        }
        let view = h.send(ToolKind::Roi, click("btn-next")).await;
        assert_eq!(view.current_step, 4);
    }

    #[tokio::test]
    async fn unknown_element_leaves_state_untouched() {
        let mut h = harness(false, true);
        let before = h.state.clone();
        let result = h
            .binder
            .dispatch(&mut h.state, ToolKind::Roadmap, click("option-content_types-video"))
            .await;

        assert!(matches!(result, Err(BinderError::UnknownElement { .. })));
        assert_eq!(h.state, before);
    }

    #[tokio::test]
    async fn invalid_figure_shows_error_toast() {
        let mut h = harness(false, true);
        let view = h
            .send(
                ToolKind::Roi,
                UiEvent::Change {
                    element: "input-staff_count".to_string(),
                    value: "lots".to_string(),
                },
            )
            .await;

        assert!(view
            .effects
            .iter()
            .any(|e| matches!(e, Effect::Toast { kind: ToastKind::Error, .. })));
        assert_eq!(h.state.tool_data.roi.staff_count, None);
    }

    #[tokio::test]
    async fn fourth_use_case_warns() {
        let mut h = harness(false, true);
        for id in [
            "option-use_cases-transcription",
            "option-use_cases-moderation",
            "option-use_cases-archive_search",
        ] {
            h.send(ToolKind::Roadmap, click(id)).await;
        }
        let view = h
            .send(ToolKind::Roadmap, click("option-use_cases-personalization"))
            .await;

        assert!(!view.option("option-use_cases-personalization").unwrap().selected);
        assert!(view
            .effects
            .iter()
            .any(|e| matches!(e, Effect::Toast { kind: ToastKind::Warning, .. })));
    }

    #[tokio::test]
    async fn pdf_disabled_alerts() {
        let mut h = harness(false, true);
        let view = h.send(ToolKind::Assessment, click("btn-pdf")).await;
        assert_eq!(view.effects, vec![Effect::alert(PDF_UNAVAILABLE)]);
    }

    #[tokio::test]
    async fn download_incomplete_tool_shows_error_toast() {
        let mut h = harness(true, true);
        let view = h.send(ToolKind::Roi, click("btn-download")).await;
        assert!(view
            .effects
            .iter()
            .all(|e| !matches!(e, Effect::Download { .. })));
        assert!(view
            .effects
            .iter()
            .any(|e| matches!(e, Effect::Toast { kind: ToastKind::Error, .. })));
    }

    #[tokio::test]
    async fn pdf_download_includes_print_instructions() {
        let mut h = harness(true, true);
        for n in 1..=5 {
            h.send(ToolKind::Assessment, click(&format!("answer-use_cases-{}-4", n)))
                .await;
        }
        let view = h.send(ToolKind::Assessment, click("btn-pdf")).await;

        assert!(view.effects.iter().any(|e| matches!(
            e,
            Effect::Download { filename, .. } if filename == "MediaAI_Readiness_Assessment.txt"
        )));
        assert!(view.effects.contains(&Effect::alert(PRINT_INSTRUCTIONS)));
    }

    #[tokio::test]
    async fn nav_click_switches_tool() {
        let mut h = harness(false, true);
        let view = h.send(ToolKind::Assessment, click("nav-roadmap")).await;

        assert_eq!(view.tool, ToolKind::Roadmap);
        assert_eq!(h.state.current_tool, ToolKind::Roadmap);
        assert!(view.effects.contains(&Effect::Navigate {
            href: ToolKind::Roadmap.page_path()
        }));
    }

    #[tokio::test]
    async fn reset_button_clears_tool() {
        let mut h = harness(false, true);
        h.send(ToolKind::Roi, click("option-scope-pilot")).await;
        let view = h.send(ToolKind::Roi, click("btn-reset")).await;

        assert!(view.options.iter().all(|o| !o.selected));
        assert!(view
            .effects
            .iter()
            .any(|e| matches!(e, Effect::Toast { kind: ToastKind::Info, .. })));
    }
}
