//! Integration tests for calibrating scenes loaded from JSON files.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test scene_integration
//! ```

use bevy_ecs::prelude::*;
use std::path::PathBuf;

use ysortcal::components::zindex::ZIndex;
use ysortcal::scene::SceneData;
use ysortcal::systems::calibrate::calibrate;

const GROVE: &str = r#"{
  "nodes": [
    { "id": "oak", "position": [4.0, 5.25] },
    { "id": "oak_top", "parent": "oak", "position": [4.0, 6.0],
      "sprite": { "texture": "oak.png", "width": 2.0, "height": 3.0 } },
    { "id": "oak_shadow", "parent": "oak_top", "position": [4.0, 5.0],
      "sprite": { "texture": "shadow.png", "width": 2.0, "height": 1.0 } },
    { "id": "rock", "position": [1.0, 3.0],
      "sprite": { "texture": "rock.png", "width": 1.0, "height": 1.0 } },
    { "id": "path", "position": [0.0, 0.0],
      "sprite": { "texture": "path.png", "width": 8.0, "height": 1.0, "sort_order": -10000 } },
    { "id": "window", "occluder": true, "position": [2.0, 2.0],
      "sprite": { "width": 1.0, "height": 1.0 } },
    { "id": "player", "dynamic": true, "position": [0.0, 1.0],
      "sprite": { "texture": "hero.png", "width": 1.0, "height": 2.0, "sort_order": 5 } },
    { "id": "sword_glow", "parent": "player", "position": [0.0, 1.0],
      "sprite": { "texture": "glow.png", "width": 1.0, "height": 1.0, "sort_order": 6 } }
  ]
}"#;

fn temp_scene(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("ysortcal_{}_{}.json", name, std::process::id()));
    std::fs::write(&path, GROVE).unwrap();
    path
}

fn order(scene: &SceneData, id: &str) -> Option<i32> {
    scene
        .nodes
        .iter()
        .find(|n| n.id == id)
        .and_then(|n| n.sprite.as_ref())
        .map(|s| s.sort_order)
}

#[test]
fn grove_scene_calibrates() {
    let scene: SceneData = serde_json::from_str(GROVE).unwrap();
    let mut world = World::new();
    let index = scene.spawn_into(&mut world).unwrap();

    let summary = calibrate(&mut world);

    assert_eq!(world.get::<ZIndex>(index["oak_top"]).unwrap().0, -525);
    assert_eq!(world.get::<ZIndex>(index["oak_shadow"]).unwrap().0, -526);
    assert_eq!(world.get::<ZIndex>(index["rock"]).unwrap().0, -300);
    assert_eq!(world.get::<ZIndex>(index["path"]).unwrap().0, -10000);
    assert_eq!(world.get::<ZIndex>(index["player"]).unwrap().0, 5);
    assert_eq!(world.get::<ZIndex>(index["sword_glow"]).unwrap().0, 6);
    assert_eq!(summary.removed, 1);
    assert_eq!(summary.excluded, 2);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.calibrated, 3);
}

#[test]
fn calibrated_scene_round_trips_through_file() {
    let path = temp_scene("roundtrip");

    let mut scene = SceneData::load_from_file(&path).unwrap();
    let mut world = World::new();
    let index = scene.spawn_into(&mut world).unwrap();
    calibrate(&mut world);
    scene.sync_from_world(&world, &index);
    scene.save_to_file(&path).unwrap();

    let saved = SceneData::load_from_file(&path).unwrap();
    assert_eq!(order(&saved, "oak_top"), Some(-525));
    assert_eq!(order(&saved, "rock"), Some(-300));
    assert_eq!(order(&saved, "player"), Some(5));
    assert_eq!(order(&saved, "window"), None, "Removed sprite must be dropped");

    // Reloading the written scene and calibrating again changes nothing.
    let mut world = World::new();
    saved.spawn_into(&mut world).unwrap();
    let summary = calibrate(&mut world);
    assert_eq!(summary.calibrated, 0);
    assert_eq!(summary.removed, 0);

    std::fs::remove_file(&path).ok();
}

#[test]
fn missing_scene_file_is_error() {
    let path = std::env::temp_dir().join("ysortcal_does_not_exist.json");
    assert!(SceneData::load_from_file(path).is_err());
}
