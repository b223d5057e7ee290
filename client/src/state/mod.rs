//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `form` holds the editable per-field state and submit lifecycle; `display`
//! holds the read-only snapshot of the last accepted submission. The two have
//! independent lifetimes and only meet in the form page's submit handler.

pub mod display;
pub mod form;
