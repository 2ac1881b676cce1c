//! grants-admin - create grant projects and batch-submit their milestones
//!
//! The library holds the form logic of the grants admin tool: editing
//! milestone drafts, validating them, creating them concurrently against the
//! grants API and turning the outcome into one notification plus a
//! navigation decision.

pub mod api;
pub mod config;
pub mod drafts;
pub mod error;
pub mod project;
pub mod report;
pub mod submit;
pub mod types;
