//! On-demand calibration event.
//!
//! Hosts that drive the world through events trigger a [`CalibrateEvent`]
//! instead of calling [`calibrate`](crate::systems::calibrate::calibrate)
//! directly. The pass is queued and runs with exclusive world access once the
//! observer's commands are applied.
use crate::systems::calibrate::calibrate;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

/// Request a calibration pass. Carries no data.
#[derive(Event, Debug, Clone, Copy)]
pub struct CalibrateEvent {}

/// Observer that queues a calibration pass.
///
/// The summary ends up in [`LastCalibration`](crate::resources::calibrationsummary::LastCalibration).
pub fn calibrate_observer(_trigger: On<CalibrateEvent>, mut commands: Commands) {
    debug!("CalibrateEvent triggered");
    commands.queue(|world: &mut World| {
        calibrate(world);
    });
}
