//! ECS resources.
//!
//! Overview
//! - `calibrationconfig` – constants of the sort-key formula, loadable from INI
//! - `calibrationsummary` – counts reported by a pass and the last one run
//! - `editorstate` – authoritative and pending editor/runtime state
pub mod calibrationconfig;
pub mod calibrationsummary;
pub mod editorstate;
