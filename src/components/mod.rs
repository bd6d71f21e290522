//! ECS components describing scene nodes.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned physical footprint
//! - [`dynamicsort`] – marker for nodes ordered by the runtime sorter
//! - [`label`] – free-text category label used for classification
//! - [`mapposition`] – world-space position (pivot) of a node
//! - [`occluder`] – marker for nodes that take part in proximity fading
//! - [`sprite`] – renderable sprite and its visual bounds
//! - [`zindex`] – draw order written by calibration

pub mod boxcollider;
pub mod dynamicsort;
pub mod label;
pub mod mapposition;
pub mod occluder;
pub mod sprite;
pub mod zindex;
