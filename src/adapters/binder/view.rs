//! Render model - what the page should look like after an event.
//!
//! Class sets mirror the toolkit's stylesheet: selected cards are blue,
//! the active nav link is white with an underline, the active horizon
//! toggle carries a purple underline.

use serde::Serialize;

use crate::domain::architecture::ArchitectureAdvisor;
use crate::domain::assessment::AssessmentScorer;
use crate::domain::foundation::{Choice, Score, ToolKind};
use crate::domain::report::ReportBody;
use crate::domain::roi::RoiCalculator;
use crate::domain::toolkit::ToolkitState;

use super::element::{ElementId, PageRegistry};

pub const SELECTED_CLASSES: &[&str] = &["selected", "border-blue-500", "bg-blue-50"];
pub const UNSELECTED_CLASSES: &[&str] = &["border-gray-200", "hover:bg-gray-50"];
pub const NAV_ACTIVE_CLASSES: &[&str] = &["nav-item", "text-white"];
pub const NAV_INACTIVE_CLASSES: &[&str] = &["nav-item", "text-gray-200"];
pub const TOGGLE_ACTIVE_CLASSES: &[&str] = &["toggle-btn", "active"];
pub const TOGGLE_INACTIVE_CLASSES: &[&str] = &["toggle-btn", "text-gray-500"];
pub const TOGGLE_ACTIVE_BORDER: &str = "2px solid #7e22ce";
pub const RESULTS_SECTION_ID: &str = "results-section";

pub const PRINT_INSTRUCTIONS: &str = "The page will now open the print dialog. To save as PDF:\n\n\
1. Select \"Save as PDF\" or \"Microsoft Print to PDF\" as your printer\n\
2. Click \"Print\" or \"Save\"";
pub const PDF_UNAVAILABLE: &str =
    "PDF export is not available. Use Download to save the report as JSON.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavLinkView {
    pub dom_id: String,
    pub tool: ToolKind,
    pub href: &'static str,
    pub classes: &'static [&'static str],
    pub underline: bool,
    pub complete: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionView {
    pub dom_id: String,
    pub selected: bool,
    pub classes: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToggleView {
    pub dom_id: String,
    pub active: bool,
    pub classes: &'static [&'static str],
    pub border_bottom: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputView {
    pub dom_id: String,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    pub dom_id: String,
    pub visible: bool,
}

/// A progress bar with its caption.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorView {
    pub dom_id: String,
    pub width_percent: f64,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollTarget {
    Top,
    Results,
}

/// One-shot side effects the page performs after rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    Toast { kind: ToastKind, message: String },
    ScrollTo { target: ScrollTarget },
    Alert { message: String },
    Download {
        filename: String,
        content_type: String,
        content: String,
    },
    Navigate { href: &'static str },
}

impl Effect {
    pub fn toast(kind: ToastKind, message: impl Into<String>) -> Self {
        Effect::Toast {
            kind,
            message: message.into(),
        }
    }

    pub fn alert(message: impl Into<String>) -> Self {
        Effect::Alert {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub tool: ToolKind,
    pub current_step: u8,
    pub total_steps: u8,
    pub complete: bool,
    pub nav: Vec<NavLinkView>,
    pub options: Vec<OptionView>,
    pub toggles: Vec<ToggleView>,
    pub inputs: Vec<InputView>,
    pub sections: Vec<SectionView>,
    pub indicators: Vec<IndicatorView>,
    /// Derived result, when the tool has one.
    pub result: Option<ReportBody>,
    pub effects: Vec<Effect>,
}

impl ViewModel {
    /// Renders `tool`'s page from the current state, with no effects.
    pub fn render(state: &ToolkitState, tool: ToolKind) -> Self {
        let wizard = state.wizard(tool);
        let current_step = wizard.current_step().value();
        let total_steps = wizard.total_steps();
        let complete = state.is_complete(tool);

        let mut view = Self {
            tool,
            current_step,
            total_steps,
            complete,
            nav: Vec::new(),
            options: Vec::new(),
            toggles: Vec::new(),
            inputs: Vec::new(),
            sections: Vec::new(),
            indicators: Vec::new(),
            result: None,
            effects: Vec::new(),
        };

        for element in PageRegistry::for_tool(tool).elements() {
            view.push_element(state, tool, *element);
        }

        view.sections = (1..=total_steps)
            .map(|n| SectionView {
                dom_id: format!("section-{}", n),
                visible: n == current_step,
            })
            .collect();
        view.sections.push(SectionView {
            dom_id: RESULTS_SECTION_ID.to_string(),
            visible: wizard.on_last_step() || complete,
        });

        view.indicators = indicators(state, tool);
        view.result = result(state, tool);
        view
    }

    fn push_element(&mut self, state: &ToolkitState, page: ToolKind, element: ElementId) {
        let data = &state.tool_data;
        let selected = match element {
            ElementId::NavLink(tool) => {
                let active = tool == page;
                self.nav.push(NavLinkView {
                    dom_id: element.dom_id(),
                    tool,
                    href: tool.page_path(),
                    classes: if active {
                        NAV_ACTIVE_CLASSES
                    } else {
                        NAV_INACTIVE_CLASSES
                    },
                    underline: active,
                    complete: state.is_complete(tool),
                });
                return;
            }
            ElementId::HorizonToggle(horizon) => {
                let active = data.roi.horizon == horizon;
                self.toggles.push(ToggleView {
                    dom_id: element.dom_id(),
                    active,
                    classes: if active {
                        TOGGLE_ACTIVE_CLASSES
                    } else {
                        TOGGLE_INACTIVE_CLASSES
                    },
                    border_bottom: active.then_some(TOGGLE_ACTIVE_BORDER),
                });
                return;
            }
            ElementId::RoiFigure(figure) => {
                self.inputs.push(InputView {
                    dom_id: element.dom_id(),
                    value: data.roi.figure(figure),
                });
                return;
            }
            ElementId::Button(_) => return,
            ElementId::Answer { question, value } => {
                data.assessment.answer_for(question) == Some(value)
            }
            ElementId::ArchitectureOption(o) => data.architecture.is_selected(o),
            ElementId::RoadmapOption(o) => data.roadmap.is_selected(o),
            ElementId::RoiOption(o) => data.roi.is_selected(o),
        };

        self.options.push(OptionView {
            dom_id: element.dom_id(),
            selected,
            classes: if selected {
                SELECTED_CLASSES
            } else {
                UNSELECTED_CLASSES
            },
        });
    }

    pub fn option(&self, dom_id: &str) -> Option<&OptionView> {
        self.options.iter().find(|o| o.dom_id == dom_id)
    }

    pub fn section(&self, dom_id: &str) -> Option<&SectionView> {
        self.sections.iter().find(|s| s.dom_id == dom_id)
    }

    pub fn indicator(&self, dom_id: &str) -> Option<&IndicatorView> {
        self.indicators.iter().find(|i| i.dom_id == dom_id)
    }
}

fn score_indicator(dom_id: String, score: Option<Score>) -> IndicatorView {
    match score {
        Some(score) => IndicatorView {
            dom_id,
            width_percent: score.indicator_percent(),
            text: score.to_string(),
        },
        None => IndicatorView {
            dom_id,
            width_percent: 0.0,
            text: "0.0/5.0".to_string(),
        },
    }
}

fn indicators(state: &ToolkitState, tool: ToolKind) -> Vec<IndicatorView> {
    match tool {
        ToolKind::Assessment => {
            let result = AssessmentScorer::evaluate(&state.tool_data.assessment);
            let mut out: Vec<IndicatorView> = result
                .categories
                .iter()
                .map(|c| score_indicator(format!("score-{}", c.category.slug()), c.score))
                .collect();
            out.push(score_indicator("overall-score".to_string(), result.overall));
            out
        }
        ToolKind::Architecture => ArchitectureAdvisor::fit_scores(&state.tool_data.architecture)
            .into_iter()
            .map(|fit| IndicatorView {
                dom_id: format!("fit-{}", fit.pattern.slug()),
                width_percent: f64::from(fit.relative_fit),
                text: format!("{}%", fit.relative_fit),
            })
            .collect(),
        ToolKind::Roadmap | ToolKind::Roi => Vec::new(),
    }
}

fn result(state: &ToolkitState, tool: ToolKind) -> Option<ReportBody> {
    match tool {
        ToolKind::Assessment => Some(ReportBody::Assessment(AssessmentScorer::evaluate(
            &state.tool_data.assessment,
        ))),
        ToolKind::Architecture => {
            ArchitectureAdvisor::recommend(&state.tool_data.architecture).map(ReportBody::Architecture)
        }
        ToolKind::Roadmap => state.roadmap_plan().map(ReportBody::Roadmap),
        ToolKind::Roi => RoiCalculator::calculate(&state.tool_data.roi).map(ReportBody::Roi),
    }
}
