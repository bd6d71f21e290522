//! Static draw-order calibration for top-down 2D scenes.
//!
//! The scene graph is a `bevy_ecs` [`World`](bevy_ecs::world::World): nodes are
//! entities linked with `ChildOf`. One calibration pass computes an integer
//! [`ZIndex`](components::zindex::ZIndex) for every static sprite from its
//! world height, delegating shadows and glows to their owner and skipping
//! anything the runtime sorter owns.
//!
//! Entry points:
//! - [`systems::calibrate::calibrate`] – run a pass directly
//! - [`events::calibrate::CalibrateEvent`] – run a pass through an observer
//! - [`events::editorstate::EditorStateChangedEvent`] – run a pass when play starts

pub mod components;
pub mod events;
pub mod resources;
pub mod scene;
pub mod systems;
