//! Integration tests for the pointer web effect

#![cfg(feature = "web")]

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use spidr_form::testing::{RecordingSpawner, SpawnerEvent};
use spidr_form::web::{Layout, Point, Rect, WebConfig, WebEffects};

fn page() -> Layout {
    Layout::new(Rect::new(0.0, 0.0, 1280.0, 900.0)).with_form(Rect::new(440.0, 80.0, 400.0, 740.0))
}

#[test]
fn sweeping_the_pointer_spawns_only_outside_the_form() {
    let config = WebConfig::default().with_trigger_chance(1.0);
    let mut effects = WebEffects::new(config, RecordingSpawner::new());
    let mut rng = StdRng::seed_from_u64(42);
    let start = Instant::now();

    for step in 0..128u32 {
        let now = start + Duration::from_millis(u64::from(step) * 50);
        let pointer = Point::new(f64::from(step) * 10.0, 450.0);
        if let Some(id) = effects.pointer_moved(&mut rng, pointer, &page(), now) {
            let keep_out = page().form().map(|f| f.expanded(30.0));
            assert!(!keep_out.is_some_and(|r| r.contains(pointer)), "{id:?} at {pointer:?}");
        }
        effects.animation_frame();
        effects.tick(now);
    }

    assert!(effects.spawner().spawn_count() > 0);
}

#[test]
fn spawns_respect_the_throttle() {
    let config = WebConfig::default().with_trigger_chance(1.0);
    let mut effects = WebEffects::new(config, RecordingSpawner::new());
    let mut rng = StdRng::seed_from_u64(7);
    let start = Instant::now();

    // one move every 10ms for one second
    for step in 0..100u64 {
        let now = start + Duration::from_millis(step * 10);
        effects.pointer_moved(&mut rng, Point::new(100.0, 100.0), &page(), now);
        effects.animation_frame();
    }

    assert_eq!(effects.spawner().spawn_count(), 5);
}

#[test]
fn every_spawned_web_is_eventually_removed() {
    let config = WebConfig::default().with_trigger_chance(1.0);
    let mut effects = WebEffects::new(config, RecordingSpawner::new());
    let mut rng = StdRng::seed_from_u64(3);
    let start = Instant::now();

    for step in 0..4u64 {
        let now = start + Duration::from_millis(step * 300);
        effects.pointer_moved(&mut rng, Point::new(1200.0, 850.0), &page(), now);
        effects.animation_frame();
    }
    assert_eq!(effects.active_count(), 4);

    effects.tick(start + Duration::from_secs(10));
    assert_eq!(effects.active_count(), 0);

    let events = effects.spawner().events();
    let spawned = events.iter().filter(|e| matches!(e, SpawnerEvent::Spawn(..))).count();
    let removed = events.iter().filter(|e| matches!(e, SpawnerEvent::Remove(_))).count();
    assert_eq!(spawned, removed);
}

#[test]
fn spawned_patterns_stay_in_the_container() {
    let config = WebConfig::default().with_trigger_chance(1.0);
    let mut effects = WebEffects::new(config, RecordingSpawner::new());
    let mut rng = StdRng::seed_from_u64(99);
    let start = Instant::now();
    let corners = [
        Point::new(0.0, 0.0),
        Point::new(1280.0, 0.0),
        Point::new(0.0, 900.0),
        Point::new(1280.0, 900.0),
    ];

    for (i, corner) in corners.into_iter().enumerate() {
        let now = start + Duration::from_millis(i as u64 * 250);
        effects.pointer_moved(&mut rng, corner, &page(), now);
        effects.animation_frame();
    }

    for event in effects.spawner().events() {
        if let SpawnerEvent::Spawn(_, pattern) = event {
            for node in pattern.outer_nodes() {
                assert!((10.0..=1270.0).contains(&node.at.x), "{:?}", node.at);
                assert!((10.0..=890.0).contains(&node.at.y), "{:?}", node.at);
            }
        }
    }
    assert_eq!(effects.spawner().spawn_count(), 4);
}
