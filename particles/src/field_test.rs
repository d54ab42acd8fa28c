#![allow(clippy::float_cmp)]

use super::*;
use crate::config::{Motion, Preset};

// =============================================================
// Helpers
// =============================================================

fn constellation() -> FieldConfig {
    FieldConfig::preset(Preset::Constellation)
}

fn rising() -> FieldConfig {
    FieldConfig::preset(Preset::Rising)
}

fn field(config: FieldConfig, w: f64, h: f64) -> ParticleField {
    let mut field = ParticleField::new(config, 0xC0FFEE);
    field.resize(Size::new(w, h));
    field
}

// =============================================================
// population
// =============================================================

#[test]
fn population_uses_longer_side() {
    assert_eq!(population(&rising(), Size::new(800.0, 600.0)), 100);
    assert_eq!(population(&rising(), Size::new(200.0, 400.0)), 50);
}

#[test]
fn population_rounds_to_nearest() {
    // 300 / 8 = 37.5 → 38
    assert_eq!(population(&rising(), Size::new(300.0, 200.0)), 38);
    // 100 / 8 = 12.5 → 13; 99 / 8 = 12.375 → 12
    assert_eq!(population(&rising(), Size::new(100.0, 50.0)), 13);
    assert_eq!(population(&rising(), Size::new(99.0, 50.0)), 12);
}

#[test]
fn population_is_capped() {
    assert_eq!(population(&rising(), Size::new(4000.0, 2000.0)), 100);
    assert_eq!(population(&constellation(), Size::new(1920.0, 972.0)), 120);
}

#[test]
fn population_constellation_below_cap() {
    assert_eq!(population(&constellation(), Size::new(1000.0, 500.0)), 100);
}

#[test]
fn population_of_empty_surface_is_zero() {
    assert_eq!(population(&constellation(), Size::new(0.0, 0.0)), 0);
    assert_eq!(population(&constellation(), Size::new(1200.0, 0.0)), 0);
    assert_eq!(population(&constellation(), Size::new(-5.0, 300.0)), 0);
}

#[test]
fn population_of_tiny_surface_can_round_to_zero() {
    assert_eq!(population(&constellation(), Size::new(4.0, 3.0)), 0);
}

#[test]
fn population_respects_zero_cap() {
    let mut config = constellation();
    config.max_particles = 0;
    assert_eq!(population(&config, Size::new(800.0, 600.0)), 0);
}

// =============================================================
// Construction and resize
// =============================================================

#[test]
fn new_field_is_empty() {
    let field = ParticleField::new(constellation(), 1);
    assert!(field.particles().is_empty());
    assert!(field.size().is_empty());
    assert!(field.pointer().is_none());
    assert_eq!(field.frame_count(), 0);
}

#[test]
fn resize_generates_population() {
    let field = field(rising(), 800.0, 600.0);
    assert_eq!(field.particles().len(), 100);
    assert_eq!(field.size(), Size::new(800.0, 600.0));
}

#[test]
fn initial_positions_lie_on_surface() {
    let field = field(constellation(), 1024.0, 691.0);
    let size = field.size();
    assert!(field.particles().iter().all(|p| size.contains(p.pos)));
}

#[test]
fn colors_come_from_palette() {
    let field = field(constellation(), 1200.0, 800.0);
    let palette = &field.config().palette;
    assert!(field.particles().iter().all(|p| palette.contains(&p.color)));
}

#[test]
fn resize_to_empty_surface_drops_all_particles() {
    let mut field = field(constellation(), 800.0, 600.0);
    field.resize(Size::new(0.0, 600.0));
    assert!(field.particles().is_empty());
    field.step();
    assert!(field.particles().is_empty());
}

#[test]
fn resize_discards_old_set() {
    let mut field = field(rising(), 800.0, 600.0);
    assert_eq!(field.particles().len(), 100);
    field.resize(Size::new(300.0, 200.0));
    assert_eq!(field.particles().len(), 38);
    let size = field.size();
    assert!(field.particles().iter().all(|p| size.contains(p.pos)));
}

#[test]
fn resize_to_same_size_regenerates() {
    let mut field = field(constellation(), 800.0, 600.0);
    let before = field.particles().to_vec();
    field.resize(Size::new(800.0, 600.0));
    assert_eq!(field.particles().len(), before.len());
    assert_ne!(field.particles(), before.as_slice());
}

#[test]
fn same_seed_same_field() {
    let a = field(constellation(), 640.0, 480.0);
    let b = field(constellation(), 640.0, 480.0);
    assert_eq!(a.particles(), b.particles());
}

// =============================================================
// Stepping
// =============================================================

#[test]
fn population_is_invariant_across_frames() {
    for config in [constellation(), rising()] {
        let mut field = field(config, 400.0, 300.0);
        let count = field.particles().len();
        for _ in 0..2_000 {
            field.step();
            assert_eq!(field.particles().len(), count);
        }
        assert_eq!(field.frame_count(), 2_000);
    }
}

#[test]
fn particles_stay_near_surface_over_time() {
    let mut field = field(constellation(), 400.0, 300.0);
    for _ in 0..3_000 {
        field.step();
        for p in field.particles() {
            assert!(!p.is_out_of_bounds(field.size(), Motion::Drift));
        }
    }
}

#[test]
fn rising_particle_crossing_top_reenters_at_bottom() {
    let mut field = field(rising(), 800.0, 600.0);
    let size = field.size();
    let mut p = field.particles[0].clone();
    p.pos.y = -p.size + 0.01;
    p.speed = 0.5;
    field.particles[0] = p;

    field.step();

    let q = &field.particles()[0];
    assert_eq!(q.pos.y, size.height + q.size);
    assert!((0.0..size.width).contains(&q.pos.x));
}

#[test]
fn rising_particles_move_up() {
    let mut field = field(rising(), 800.0, 600.0);
    let before = field.particles().to_vec();
    field.step();
    for (a, b) in before.iter().zip(field.particles()) {
        if b.pos.y < a.pos.y {
            assert!((a.pos.y - b.pos.y - a.speed).abs() < 1e-9);
            assert_eq!(a.pos.x, b.pos.x);
        }
    }
}

// =============================================================
// Pointer
// =============================================================

#[test]
fn pointer_is_recorded() {
    let mut field = field(constellation(), 800.0, 600.0);
    field.set_pointer(Point::new(10.0, 20.0));
    assert_eq!(field.pointer(), Some(Point::new(10.0, 20.0)));
    field.set_pointer(Point::new(30.0, 40.0));
    assert_eq!(field.pointer(), Some(Point::new(30.0, 40.0)));
}

#[test]
fn pointer_pulls_nearby_particle() {
    let mut with_pointer = field(constellation(), 800.0, 600.0);
    let mut without = field(constellation(), 800.0, 600.0);

    let target = {
        let p = &with_pointer.particles()[0].pos;
        Point::new(p.x + 50.0, p.y)
    };
    with_pointer.set_pointer(target);
    with_pointer.step();
    without.step();

    let pulled = with_pointer.particles()[0].pos;
    let free = without.particles()[0].pos;
    assert!(pulled.x > free.x, "pulled={pulled:?} free={free:?}");
}

#[test]
fn pointer_ignored_when_pull_disabled() {
    let mut with_pointer = field(rising(), 800.0, 600.0);
    let mut without = field(rising(), 800.0, 600.0);
    let p = with_pointer.particles()[0].pos;
    with_pointer.set_pointer(Point::new(p.x + 10.0, p.y));
    with_pointer.step();
    without.step();
    assert_eq!(with_pointer.particles(), without.particles());
}

#[test]
fn rising_particles_pulled_below_surface_are_respawned() {
    let config = FieldConfig::from_json(r#"{"preset":"rising","pointer":{"radius":200,"strength":1}}"#).unwrap();
    let mut field = ParticleField::new(config, 5);
    field.resize(Size::new(800.0, 600.0));
    // Pointer in the part of the window below the canvas.
    field.set_pointer(Point::new(400.0, 700.0));
    for _ in 0..5_000 {
        field.step();
        for p in field.particles() {
            assert!(!p.is_out_of_bounds(field.size(), Motion::Rise), "{:?} left the surface", p.pos);
        }
    }
    assert_eq!(field.particles().len(), 100);
}

#[test]
fn pointer_survives_resize() {
    let mut field = field(constellation(), 800.0, 600.0);
    field.set_pointer(Point::new(1.0, 1.0));
    field.resize(Size::new(400.0, 300.0));
    assert_eq!(field.pointer(), Some(Point::new(1.0, 1.0)));
}

// =============================================================
// Frames
// =============================================================

#[test]
fn tick_composes_before_stepping() {
    let mut field = field(constellation(), 800.0, 600.0);
    let expected = field.compose();
    let frame = field.tick();
    assert_eq!(frame, expected);
    assert_eq!(field.frame_count(), 1);
}

#[test]
fn composed_frame_has_one_disc_per_particle() {
    let field = field(constellation(), 800.0, 600.0);
    let frame = field.compose();
    let discs = frame.ops.iter().filter(|op| matches!(op, frame::DrawOp::Disc { .. })).count();
    assert_eq!(discs, field.particles().len());
}
