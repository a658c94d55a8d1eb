//! App orchestration methods, split by domain.
//!
//! Each submodule extends `impl App` with the handlers for one concern:
//!
//! - **items**: snapshot loads, mark-as-found, the add-item form, and
//!   dispatch of store service responses
//! - **navigation**: screen changes and grid selection movement
//! - **preview**: background photo decoding for the detail screen
//! - **search**: search input state and query edits
//! - **sorting**: sort mode cycling and preference persistence

pub mod items;
pub mod navigation;
pub mod preview;
pub mod search;
pub mod sorting;
