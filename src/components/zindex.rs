//! Z-index component for render ordering.
//!
//! The [`ZIndex`] component is the only value the calibration pass writes.
//! Entities with lower z-index values are painted first (behind those with
//! higher values).

use bevy_ecs::prelude::Component;

/// Rendering order for 2D drawing.
///
/// Lower values are drawn earlier (behind). A renderer can sort by
/// `ZIndex` to achieve a painter's algorithm. Values at or below
/// [`CalibrationConfig::reserved_threshold`] are hand-placed and are never
/// overwritten by calibration.
///
/// [`CalibrationConfig::reserved_threshold`]: crate::resources::calibrationconfig::CalibrationConfig::reserved_threshold
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZIndex(pub i32);
