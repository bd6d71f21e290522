//! Calibration systems and the helpers they are built from.
//!
//! Submodules overview
//! - [`bounds`] – resolve the reference Y of a node
//! - [`calibrate`] – the full pass: cleanup, filter, compute, write
//! - [`classify`] – label-based shadow/glow classification
//! - [`cleanup`] – remove degenerate sprites from occluders
//! - [`editorstate`] – pending-transition check and play-state run condition
//! - [`nodes`] – read-only scene graph access
//! - [`ownership`] – exclude dynamically sorted subtrees
//! - [`sortkey`] – turn a reference Y into an order

pub mod bounds;
pub mod calibrate;
pub mod classify;
pub mod cleanup;
pub mod editorstate;
pub mod nodes;
pub mod ownership;
pub mod sortkey;
