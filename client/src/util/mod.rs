//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure, framework-free logic lives here so it can be tested without a
//! browser or a reactive runtime.

pub mod validation;
