//! MediaAI Toolkit - Linked planning wizards for media organizations
//!
//! Four wizards share one persisted state record: a readiness assessment,
//! an architecture recommender, an implementation roadmap generator and an
//! ROI calculator. This crate holds their scoring rules, the state
//! coordinator, report export and the binder that maps page element ids
//! onto state changes, served over a small HTTP API.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
