// Host-side tests for the per-frame animation update.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod config {
    include!("../src/core/config.rs");
}
mod pointer {
    include!("../src/core/pointer.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}
mod registry {
    include!("../src/core/registry.rs");
}
mod animation {
    include!("../src/core/animation.rs");
}

use animation::*;
use config::*;
use glam::Vec3;
use pointer::PointerState;
use scene::*;
use std::f64::consts::PI;

fn rigged() -> (AnimationContext, SceneGraph, FigureRig) {
    let mut scene = SceneGraph::new();
    let root = scene.add_node("figurine", None, Transform::default(), Shape::Group, None);
    let head = scene.add_node(
        "head",
        Some(root),
        Transform::at(Vec3::new(0.0, 2.5, 0.0)),
        Shape::Sphere { radius: 0.3 },
        None,
    );
    let neck = scene.add_node(
        "neck",
        Some(root),
        Transform::at(Vec3::new(0.0, 2.15, 0.0)),
        Shape::Group,
        None,
    );
    let eye = scene.add_node(
        "eye",
        Some(head),
        Transform::at(Vec3::new(0.1, 0.05, 0.25)),
        Shape::Sphere { radius: 0.05 },
        None,
    );
    let rig = FigureRig {
        root: Some(root),
        head: Some(head),
        neck: Some(neck),
        eyes: smallvec::smallvec![eye],
    };
    let mut ctx = AnimationContext::new(AnimationConfig::default()).unwrap();
    ctx.attach_rig(&scene, rig.clone());
    (ctx, scene, rig)
}

fn rotation(scene: &SceneGraph, id: Option<NodeId>) -> Vec3 {
    scene.transform(id.unwrap()).unwrap().rotation
}

#[test]
fn damp_moves_a_fixed_fraction_toward_target() {
    assert!((damp(0.5, 0.0, 0.08) - 0.46).abs() < 1e-6);
    assert_eq!(damp(1.0, 1.0, 0.08), 1.0);
    assert_eq!(damp(0.0, 2.0, 1.0), 2.0);
}

#[test]
fn centered_pointer_decays_head_yaw_by_damping() {
    let (mut ctx, mut scene, rig) = rigged();
    scene.transform_mut(rig.head.unwrap()).unwrap().rotation.y = 0.5;
    ctx.set_pointer(PointerState::new(0.0, 0.0));

    let targets = look_targets(ctx.pointer(), ctx.config());
    assert_eq!(targets.head_yaw, 0.0);
    assert_eq!(targets.head_pitch, 0.0);

    ctx.tick(&mut scene, 0.0);
    assert!((rotation(&scene, rig.head).y - 0.46).abs() < 1e-6);
}

#[test]
fn far_right_pointer_after_ten_ticks() {
    let (mut ctx, mut scene, rig) = rigged();
    ctx.set_pointer(PointerState::new(1.0, 0.0));
    assert!((look_targets(ctx.pointer(), ctx.config()).head_yaw - 0.6).abs() < 1e-6);

    for i in 0..10 {
        ctx.tick(&mut scene, i as f64 / 60.0);
    }
    let expected = 0.6 * (1.0 - 0.92_f32.powi(10));
    let yaw = rotation(&scene, rig.head).y;
    assert!((yaw - expected).abs() < 1e-5, "yaw {yaw} expected {expected}");
}

#[test]
fn damping_converges_monotonically() {
    let (mut ctx, mut scene, rig) = rigged();
    ctx.set_pointer(PointerState::new(0.7, -0.4));
    let t = look_targets(ctx.pointer(), ctx.config());

    let errors = |scene: &SceneGraph| {
        let head = rotation(scene, rig.head);
        let neck = rotation(scene, rig.neck);
        let body = rotation(scene, rig.root);
        [
            (t.head_yaw - head.y).abs(),
            (t.head_pitch - head.x).abs(),
            (t.neck_yaw - neck.y).abs(),
            (t.neck_pitch - neck.x).abs(),
            (t.body_yaw - body.y).abs(),
        ]
    };

    let mut prev = errors(&scene);
    // Slowest joint is the body: 0.14 * 0.95^n < 1e-4 needs ~142 ticks.
    for i in 0..200 {
        ctx.tick(&mut scene, i as f64 / 60.0);
        let cur = errors(&scene);
        for (c, p) in cur.iter().zip(prev.iter()) {
            assert!(c <= p, "error grew at tick {i}: {c} > {p}");
        }
        prev = cur;
    }
    for e in prev {
        assert!(e < 1e-4, "did not converge: {e}");
    }
}

#[test]
fn neck_follows_a_fraction_of_the_head() {
    let cfg = AnimationConfig::default();
    let t = look_targets(PointerState::new(1.0, 1.0), &cfg);
    assert!((t.neck_yaw - t.head_yaw * 0.3).abs() < 1e-6);
    assert!((t.neck_pitch - t.head_pitch * 0.2).abs() < 1e-6);
    assert!((t.body_yaw - 0.2).abs() < 1e-6);
}

#[test]
fn head_turns_toward_the_cursor() {
    let cfg = AnimationConfig::default();

    let right = look_targets(PointerState::new(1.0, 0.0), &cfg);
    let facing = Transform::default()
        .with_rotation(Vec3::new(right.head_pitch, right.head_yaw, 0.0))
        .matrix()
        .transform_vector3(Vec3::Z);
    assert!(facing.x > 0.0, "pointer right should face +x, got {facing:?}");

    let up = look_targets(PointerState::new(0.0, 1.0), &cfg);
    let facing = Transform::default()
        .with_rotation(Vec3::new(up.head_pitch, up.head_yaw, 0.0))
        .matrix()
        .transform_vector3(Vec3::Z);
    assert!(facing.y > 0.0, "pointer up should tilt up, got {facing:?}");
}

#[test]
fn out_of_range_pointer_extrapolates() {
    let cfg = AnimationConfig::default();
    let t = look_targets(PointerState::new(2.0, 0.0), &cfg);
    assert!((t.head_yaw - 1.2).abs() < 1e-6);
}

#[test]
fn idle_breathing_peaks_at_quarter_cycle() {
    let (mut ctx, mut scene, rig) = rigged();
    let now = PI / 3.0;
    ctx.tick(&mut scene, now);
    let y = scene.transform(rig.root.unwrap()).unwrap().position.y;
    assert!((y - 0.02).abs() < 1e-6, "got {y}");
    assert!((idle_offset(now, ctx.config()) - 0.02).abs() < 1e-6);
}

#[test]
fn idle_breathing_is_centered_on_authored_height() {
    let (mut ctx, mut scene, rig) = rigged();
    let root = rig.root.unwrap();
    scene.transform_mut(root).unwrap().position.y = 1.0;
    ctx.begin_scene();
    ctx.attach_rig(&scene, rig.clone());

    for i in 0..500 {
        ctx.tick(&mut scene, i as f64 * 0.037);
        let y = scene.transform(root).unwrap().position.y;
        assert!((y - 1.0).abs() <= 0.02 + 1e-6);
    }
    ctx.tick(&mut scene, 0.0);
    assert_eq!(scene.transform(root).unwrap().position.y, 1.0);
}

#[test]
fn reattach_while_running_keeps_resting_height() {
    let (mut ctx, mut scene, rig) = rigged();
    let root = rig.root.unwrap();
    let base = scene.transform(root).unwrap().position.y;
    ctx.tick(&mut scene, PI / 3.0);
    assert!((scene.transform(root).unwrap().position.y - (base + 0.02)).abs() < 1e-6);

    // Root now sits at the idle peak; attaching again must not adopt it.
    ctx.attach_rig(&scene, rig.clone());
    ctx.tick(&mut scene, 0.0);
    assert_eq!(scene.transform(root).unwrap().position.y, base);
}

#[test]
fn eyes_pulse_uniformly() {
    let (mut ctx, mut scene, rig) = rigged();
    let now = PI / 4.0; // sin(2 * pi/4) = 1
    ctx.tick(&mut scene, now);
    let scale = scene.transform(rig.eyes[0]).unwrap().scale;
    assert!((scale.x - 1.12).abs() < 1e-6);
    assert_eq!(scale.x, scale.y);
    assert_eq!(scale.y, scale.z);
    assert_eq!(eye_scale(now, ctx.config()), scale.x);
}

#[test]
fn same_time_and_state_give_identical_output() {
    let (mut a, mut scene_a, _) = rigged();
    let (mut b, mut scene_b, _) = rigged();
    a.set_pointer(PointerState::new(0.3, -0.8));
    b.set_pointer(PointerState::new(0.3, -0.8));

    for now in [0.0, 0.5, 0.5, 12.25, 3600.0] {
        a.tick(&mut scene_a, now);
        b.tick(&mut scene_b, now);
    }
    for ((_, na), (_, nb)) in scene_a.nodes().zip(scene_b.nodes()) {
        assert_eq!(na.transform, nb.transform, "node {}", na.name);
    }
}

#[test]
fn oscillations_depend_on_absolute_time_only() {
    let (mut ctx, mut scene, rig) = rigged();
    ctx.tick(&mut scene, 7.5);
    let first_y = scene.transform(rig.root.unwrap()).unwrap().position.y;
    let first_eye = scene.transform(rig.eyes[0]).unwrap().scale;

    for i in 0..37 {
        ctx.tick(&mut scene, 100.0 + i as f64);
    }
    ctx.tick(&mut scene, 7.5);
    assert_eq!(scene.transform(rig.root.unwrap()).unwrap().position.y, first_y);
    assert_eq!(scene.transform(rig.eyes[0]).unwrap().scale, first_eye);
}

#[test]
fn tick_before_attach_is_a_no_op() {
    let (_, mut scene, rig) = rigged();
    let mut ctx = AnimationContext::new(AnimationConfig::default()).unwrap();
    assert_eq!(ctx.phase(), Phase::Uninitialized);
    ctx.set_pointer(PointerState::new(1.0, 1.0));
    let before: Vec<Transform> = scene.nodes().map(|(_, n)| n.transform).collect();
    ctx.tick(&mut scene, 1.0);
    let after: Vec<Transform> = scene.nodes().map(|(_, n)| n.transform).collect();
    assert_eq!(before, after);

    ctx.attach_rig(&scene, rig);
    assert_eq!(ctx.phase(), Phase::Running);
    ctx.begin_scene();
    assert_eq!(ctx.phase(), Phase::Uninitialized);
    assert_eq!(ctx.rig(), &FigureRig::default());
}

#[test]
fn missing_rig_nodes_are_skipped() {
    let (mut ctx, mut scene, rig) = rigged();
    let partial = FigureRig {
        root: None,
        head: rig.head,
        neck: None,
        eyes: Default::default(),
    };
    ctx.attach_rig(&scene, partial);
    ctx.set_pointer(PointerState::new(1.0, 0.0));
    ctx.tick(&mut scene, 1.0);
    assert!(rotation(&scene, rig.head).y > 0.0);
    assert_eq!(rotation(&scene, rig.neck), Vec3::ZERO);
    assert_eq!(rotation(&scene, rig.root), Vec3::ZERO);
}

#[test]
fn invalid_config_is_rejected() {
    let mut cfg = AnimationConfig::default();
    cfg.head.damping = 0.0;
    assert!(matches!(
        AnimationContext::new(cfg),
        Err(ConfigError::Damping { name: "head.damping", .. })
    ));
}
