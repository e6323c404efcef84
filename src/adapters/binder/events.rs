//! Page events and their binding to typed element ids.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::ToolKind;

use super::element::{ElementId, PageRegistry};

/// An event as the page reports it, with a raw DOM id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    Click { element: String },
    Change { element: String, value: String },
    VisibilityHidden,
    PageUnload,
}

/// An event whose element has been resolved on the page registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundEvent {
    Click(ElementId),
    Change(ElementId, String),
    VisibilityHidden,
    PageUnload,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BinderError {
    #[error("Unknown element '{element}' on the {tool} page")]
    UnknownElement { tool: ToolKind, element: String },

    #[error("Element '{0}' does not accept input")]
    NotAnInput(String),
}

impl UiEvent {
    /// Resolves the event's element against `tool`'s page.
    pub fn bind(self, tool: ToolKind) -> Result<BoundEvent, BinderError> {
        let registry = PageRegistry::for_tool(tool);
        let resolve = |element: String| {
            registry
                .resolve(&element)
                .ok_or(BinderError::UnknownElement { tool, element })
        };

        match self {
            UiEvent::Click { element } => resolve(element).map(BoundEvent::Click),
            UiEvent::Change { element, value } => {
                let id = resolve(element)?;
                if !id.is_input() {
                    return Err(BinderError::NotAnInput(id.dom_id()));
                }
                Ok(BoundEvent::Change(id, value))
            }
            UiEvent::VisibilityHidden => Ok(BoundEvent::VisibilityHidden),
            UiEvent::PageUnload => Ok(BoundEvent::PageUnload),
        }
    }
}
