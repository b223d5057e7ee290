//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the heading, the individual form controls, and the
//! read-only echo panel. State is passed in as signals by the owning page.

pub mod display_panel;
pub mod field_control;
pub mod header;
