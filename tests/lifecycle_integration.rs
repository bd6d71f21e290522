//! Integration tests for event-driven calibration.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test lifecycle_integration
//! ```

use bevy_ecs::prelude::*;

use ysortcal::components::mapposition::MapPosition;
use ysortcal::components::sprite::Sprite;
use ysortcal::components::zindex::ZIndex;
use ysortcal::events::calibrate::{CalibrateEvent, calibrate_observer};
use ysortcal::events::editorstate::{EditorStateChangedEvent, observe_editor_state_change_event};
use ysortcal::resources::calibrationsummary::LastCalibration;
use ysortcal::resources::editorstate::{EditorState, EditorStates, NextEditorState, NextEditorStates};
use ysortcal::systems::editorstate::{check_pending_editor_state, state_is_playing};

fn editor_world() -> (World, Entity) {
    let mut world = World::new();
    world.insert_resource(EditorState::new());
    world.insert_resource(NextEditorState::new());
    world.add_observer(observe_editor_state_change_event);
    world.add_observer(calibrate_observer);
    world.flush();

    let rock = world
        .spawn((MapPosition::new(0.0, 3.0), Sprite::new("rock", 1.0, 1.0)))
        .id();
    (world, rock)
}

fn request(world: &mut World, state: EditorStates) {
    world.resource_mut::<NextEditorState>().set(state);
    world.trigger(EditorStateChangedEvent {});
    world.flush();
}

#[test]
fn calibrate_event_runs_pass() {
    let (mut world, rock) = editor_world();

    world.trigger(CalibrateEvent {});
    world.flush();

    assert_eq!(world.get::<ZIndex>(rock).unwrap().0, -300);
    assert_eq!(world.resource::<LastCalibration>().0.calibrated, 1);
}

#[test]
fn entering_play_calibrates() {
    let (mut world, rock) = editor_world();

    request(&mut world, EditorStates::Playing);

    assert_eq!(world.resource::<EditorState>().get(), EditorStates::Playing);
    assert_eq!(world.resource::<NextEditorState>().get(), NextEditorStates::Unchanged);
    assert_eq!(world.get::<ZIndex>(rock).unwrap().0, -300);
}

#[test]
fn returning_to_editing_does_not_calibrate() {
    let (mut world, rock) = editor_world();
    request(&mut world, EditorStates::Playing);

    world.get_mut::<MapPosition>(rock).unwrap().pos.y = 9.0;
    request(&mut world, EditorStates::Editing);

    assert_eq!(world.resource::<EditorState>().get(), EditorStates::Editing);
    assert_eq!(world.get::<ZIndex>(rock).unwrap().0, -300);

    request(&mut world, EditorStates::Playing);
    assert_eq!(world.get::<ZIndex>(rock).unwrap().0, -900);
}

#[test]
fn event_without_pending_change_is_noop() {
    let (mut world, rock) = editor_world();

    world.trigger(EditorStateChangedEvent {});
    world.flush();

    assert_eq!(world.resource::<EditorState>().get(), EditorStates::Editing);
    assert_eq!(world.get::<ZIndex>(rock).unwrap().0, 0);
    assert!(world.get_resource::<LastCalibration>().is_none());
}

#[test]
fn missing_resources_are_tolerated() {
    let mut world = World::new();
    world.add_observer(observe_editor_state_change_event);
    world.flush();

    world.trigger(EditorStateChangedEvent {});
    world.flush();

    assert!(world.get_resource::<LastCalibration>().is_none());
}

#[test]
fn pending_state_is_picked_up_by_schedule() {
    let (mut world, rock) = editor_world();
    world.resource_mut::<NextEditorState>().set(EditorStates::Playing);

    let mut schedule = Schedule::default();
    schedule.add_systems(check_pending_editor_state);
    schedule.run(&mut world);
    world.flush();

    assert_eq!(world.get::<ZIndex>(rock).unwrap().0, -300);

    let mut playing = Schedule::default();
    playing.add_systems(
        (|mut flag: ResMut<PlayedFrames>| flag.0 += 1).run_if(state_is_playing),
    );
    world.insert_resource(PlayedFrames(0));
    playing.run(&mut world);
    assert_eq!(world.resource::<PlayedFrames>().0, 1);
}

#[derive(Resource)]
struct PlayedFrames(u32);
