//! Pure business logic
//!
//! Side-effect-free functions over the model: search filtering, sort
//! comparisons, the sectioning pipeline, time formatting, and selection
//! movement. Everything here is deterministic given its inputs; the
//! wall clock is always passed in explicitly.

pub mod search;
pub mod sections;
pub mod sorting;
pub mod time;
pub mod ui;
