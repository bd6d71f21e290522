//! Event types and observers.
//!
//! Submodules:
//! - [`calibrate`] – request a calibration pass on demand
//! - [`editorstate`] – editor/runtime transitions; entering play calibrates
pub mod calibrate;
pub mod editorstate;
