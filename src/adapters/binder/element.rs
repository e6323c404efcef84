//! Typed element identifiers and the per-page registry.
//!
//! Every interactive element on a page has one `ElementId`. The textual DOM
//! id is derived from it, and each page's full set of ids is enumerated once
//! into a static registry. Incoming ids are resolved against that registry,
//! so a page never reacts to an id it does not render.

use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::domain::architecture::ArchitectureOption;
use crate::domain::assessment::{Category, QuestionId};
use crate::domain::foundation::{AnswerValue, Choice, ToolKind, SCALE_MAX, SCALE_MIN};
use crate::domain::roadmap::RoadmapOption;
use crate::domain::roi::{RoiFigure, RoiHorizon, RoiOption};

/// Page buttons shared by every wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Next,
    Back,
    Calculate,
    Download,
    SavePdf,
    Reset,
}

impl Button {
    pub fn all() -> &'static [Button] {
        &[
            Button::Next,
            Button::Back,
            Button::Calculate,
            Button::Download,
            Button::SavePdf,
            Button::Reset,
        ]
    }

    fn slug(&self) -> &'static str {
        match self {
            Button::Next => "next",
            Button::Back => "back",
            Button::Calculate => "calculate",
            Button::Download => "download",
            Button::SavePdf => "pdf",
            Button::Reset => "reset",
        }
    }
}

/// An interactive element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    NavLink(ToolKind),
    Answer {
        question: QuestionId,
        value: AnswerValue,
    },
    ArchitectureOption(ArchitectureOption),
    RoadmapOption(RoadmapOption),
    RoiOption(RoiOption),
    RoiFigure(RoiFigure),
    HorizonToggle(RoiHorizon),
    Button(Button),
}

impl ElementId {
    /// Textual DOM id, e.g. `answer-governance-2-4` or
    /// `option-content_types-video`.
    pub fn dom_id(&self) -> String {
        match self {
            ElementId::NavLink(tool) => format!("nav-{}", tool.slug()),
            ElementId::Answer { question, value } => format!(
                "answer-{}-{}-{}",
                question.category().slug(),
                question.number(),
                value.value()
            ),
            ElementId::ArchitectureOption(o) => {
                format!("option-{}-{}", o.question().slug(), o.option_slug())
            }
            ElementId::RoadmapOption(o) => {
                format!("option-{}-{}", o.question().slug(), o.option_slug())
            }
            ElementId::RoiOption(o) => {
                format!("option-{}-{}", o.question().slug(), o.option_slug())
            }
            ElementId::RoiFigure(f) => format!("input-{}", f.slug()),
            ElementId::HorizonToggle(h) => format!("toggle-{}", h.slug()),
            ElementId::Button(b) => format!("btn-{}", b.slug()),
        }
    }

    /// Whether this element accepts `Change` events.
    pub fn is_input(&self) -> bool {
        matches!(self, ElementId::RoiFigure(_))
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dom_id())
    }
}

/// Ids rendered on one page, keyed by DOM id, in page order.
#[derive(Debug)]
pub struct PageRegistry {
    tool: ToolKind,
    order: Vec<ElementId>,
    by_dom_id: HashMap<String, ElementId>,
}

impl PageRegistry {
    fn build(tool: ToolKind) -> Self {
        let mut order: Vec<ElementId> = ToolKind::all().iter().map(|t| ElementId::NavLink(*t)).collect();

        match tool {
            ToolKind::Assessment => {
                for category in Category::all() {
                    for question in QuestionId::all_in(*category) {
                        for v in SCALE_MIN..=SCALE_MAX {
                            if let Ok(value) = AnswerValue::try_new(v) {
                                order.push(ElementId::Answer { question, value });
                            }
                        }
                    }
                }
            }
            ToolKind::Architecture => {
                order.extend(ArchitectureOption::all().into_iter().map(ElementId::ArchitectureOption));
            }
            ToolKind::Roadmap => {
                order.extend(RoadmapOption::all().into_iter().map(ElementId::RoadmapOption));
            }
            ToolKind::Roi => {
                order.extend(RoiOption::all().into_iter().map(ElementId::RoiOption));
                order.extend(RoiFigure::all().iter().map(|f| ElementId::RoiFigure(*f)));
                order.extend(RoiHorizon::all().iter().map(|h| ElementId::HorizonToggle(*h)));
            }
        }

        order.extend(Button::all().iter().map(|b| ElementId::Button(*b)));

        let by_dom_id = order.iter().map(|id| (id.dom_id(), *id)).collect();
        Self {
            tool,
            order,
            by_dom_id,
        }
    }

    /// The registry bound for `tool`'s page.
    pub fn for_tool(tool: ToolKind) -> &'static PageRegistry {
        &REGISTRIES[&tool]
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Resolves a DOM id; `None` when the page has no such element.
    pub fn resolve(&self, dom_id: &str) -> Option<ElementId> {
        self.by_dom_id.get(dom_id).copied()
    }

    pub fn elements(&self) -> &[ElementId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

static REGISTRIES: Lazy<BTreeMap<ToolKind, PageRegistry>> = Lazy::new(|| {
    ToolKind::all()
        .iter()
        .map(|tool| (*tool, PageRegistry::build(*tool)))
        .collect()
});
