//! DOM binder - Maps page element ids onto toolkit state.
//!
//! Pages report clicks and input changes with raw DOM ids. The binder
//! resolves them against a static per-page registry, applies them to the
//! owning wizard and returns a `ViewModel` describing what the page shows:
//! selection classes, visible sections, score bars and one-shot effects.
//!
//! - `element` - typed element ids and per-page registries
//! - `events` - raw page events and their binding
//! - `view` - rendered view model and effects
//! - `dom_binder` - event dispatch and persistence

mod dom_binder;
mod element;
mod events;
mod view;

pub use dom_binder::{BinderSettings, DomBinder, SAVE_FAILED};
pub use element::{Button, ElementId, PageRegistry};
pub use events::{BinderError, BoundEvent, UiEvent};
pub use view::{
    Effect, IndicatorView, InputView, NavLinkView, OptionView, ScrollTarget, SectionView,
    ToastKind, ToggleView, ViewModel, PDF_UNAVAILABLE, PRINT_INSTRUCTIONS, RESULTS_SECTION_ID,
};
