use super::animation::{AnimationContext, FigureRig};
use super::config::{Axis, ConfigError, PulseConfig, SwayConfig};
use super::constants::{rgb, EYE_GLOW_RGB, GROUND_RGB, SILVER_RGB};
use super::registry::PulseTarget;
use super::scene::{Light, LightKind, Material, SceneGraph, Shape, Transform};
use glam::Vec3;
use smallvec::smallvec;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_6, PI};

fn light(name: &str, kind: LightKind, hex: u32, intensity: f32, position: Vec3) -> Light {
    Light {
        name: name.to_owned(),
        kind,
        color: rgb(hex),
        intensity,
        position,
    }
}

/// Reset `ctx` and `scene`, build the figurine and start the animation.
pub fn rebuild(ctx: &mut AnimationContext, scene: &mut SceneGraph) -> Result<FigureRig, ConfigError> {
    ctx.begin_scene();
    scene.clear();
    let rig = build(ctx, scene)?;
    ctx.attach_rig(scene, rig.clone());
    log::info!(
        "[scene] figurine built nodes={} lights={} pulses={} sways={}",
        scene.node_count(),
        scene.lights().len(),
        ctx.registries().pulses().len(),
        ctx.registries().sways().len()
    );
    Ok(rig)
}

/// Add the figurine, ground, lights and their registrations to `scene`.
pub fn build(ctx: &mut AnimationContext, scene: &mut SceneGraph) -> Result<FigureRig, ConfigError> {
    // Lights
    scene.add_light(light("ambient", LightKind::Ambient, 0xffffff, 0.3, Vec3::ZERO));
    scene.add_light(light(
        "main",
        LightKind::Directional,
        0xffffff,
        1.5,
        Vec3::new(5.0, 8.0, 5.0),
    ));
    scene.add_light(light(
        "fill",
        LightKind::Directional,
        0x4a9eff,
        0.8,
        Vec3::new(-5.0, 3.0, -5.0),
    ));
    scene.add_light(light(
        "rim",
        LightKind::Directional,
        0xffa500,
        0.6,
        Vec3::new(0.0, 2.0, -8.0),
    ));
    scene.add_light(light(
        "sky",
        LightKind::Hemisphere {
            ground_color: rgb(0x1a1a2e),
        },
        0x87ceeb,
        0.25,
        Vec3::Y,
    ));
    let key_point = scene.add_light(light(
        "point-key",
        LightKind::Point { range: 20.0 },
        0xffffff,
        1.0,
        Vec3::new(3.0, 5.0, 3.0),
    ));
    let cool_point = scene.add_light(light(
        "point-cool",
        LightKind::Point { range: 20.0 },
        0x88ccff,
        0.8,
        Vec3::new(-3.0, 3.0, -2.0),
    ));

    // Materials
    let silver = scene.add_material(Material::standard("silver", rgb(SILVER_RGB), 1.0, 0.2));
    let mut eye = Material::standard("eye", Vec3::ZERO, 0.9, 0.1);
    eye.emissive = rgb(EYE_GLOW_RGB);
    eye.emissive_intensity = 1.0;
    let eye = scene.add_material(eye);
    let ground = scene.add_material(Material::standard("ground", rgb(GROUND_RGB), 0.3, 0.7));

    // Figure
    let root = scene.add_node("figurine", None, Transform::default(), Shape::Group, None);
    let body = Some(root);
    let m = Some(silver);

    let head = scene.add_node(
        "head",
        body,
        Transform::at(Vec3::new(0.0, 2.5, 0.0)),
        Shape::Sphere { radius: 0.3 },
        m,
    );
    let eye_shape = Shape::Sphere { radius: 0.05 };
    let left_eye = scene.add_node(
        "eye-left",
        Some(head),
        Transform::at(Vec3::new(-0.1, 0.05, 0.25)),
        eye_shape,
        Some(eye),
    );
    let right_eye = scene.add_node(
        "eye-right",
        Some(head),
        Transform::at(Vec3::new(0.1, 0.05, 0.25)),
        eye_shape,
        Some(eye),
    );
    let neck = scene.add_node(
        "neck",
        body,
        Transform::at(Vec3::new(0.0, 2.15, 0.0)),
        Shape::Cylinder {
            radius_top: 0.15,
            radius_bottom: 0.2,
            height: 0.3,
        },
        m,
    );
    scene.add_node(
        "torso",
        body,
        Transform::at(Vec3::new(0.0, 1.5, 0.0)),
        Shape::Capsule {
            radius: 0.4,
            length: 1.0,
        },
        m,
    );

    let arm = Shape::Capsule {
        radius: 0.12,
        length: 0.8,
    };
    let left_arm = scene.add_node(
        "arm-left",
        body,
        Transform::at(Vec3::new(-0.55, 1.7, 0.0)).with_rotation(Vec3::new(0.0, 0.0, FRAC_PI_6)),
        arm,
        m,
    );
    let right_arm = scene.add_node(
        "arm-right",
        body,
        Transform::at(Vec3::new(0.55, 1.7, 0.0)).with_rotation(Vec3::new(0.0, 0.0, -FRAC_PI_6)),
        arm,
        m,
    );

    let hand = Shape::Sphere { radius: 0.15 };
    let leg = Shape::Capsule {
        radius: 0.15,
        length: 0.9,
    };
    let foot = Shape::Capsule {
        radius: 0.12,
        length: 0.25,
    };
    for (side, x) in [("left", -1.0_f32), ("right", 1.0)] {
        scene.add_node(
            &format!("hand-{side}"),
            body,
            Transform::at(Vec3::new(0.75 * x, 1.2, 0.0)),
            hand,
            m,
        );
        scene.add_node(
            &format!("leg-{side}"),
            body,
            Transform::at(Vec3::new(0.25 * x, 0.5, 0.0)),
            leg,
            m,
        );
        scene.add_node(
            &format!("foot-{side}"),
            body,
            Transform::at(Vec3::new(0.25 * x, 0.05, 0.1)).with_rotation(Vec3::new(FRAC_PI_2, 0.0, 0.0)),
            foot,
            m,
        );
    }

    scene.add_node(
        "ground",
        None,
        Transform::default().with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0)),
        Shape::Plane {
            width: 30.0,
            depth: 30.0,
        },
        Some(ground),
    );

    // Registrations
    ctx.register_pulse_emitter(
        scene,
        Some(PulseTarget::Light(key_point)),
        PulseConfig {
            base_intensity: 1.0,
            amplitude: 0.2,
            speed: 1.2,
            phase_offset: 0.0,
        },
    )?;
    ctx.register_pulse_emitter(
        scene,
        Some(PulseTarget::Light(cool_point)),
        PulseConfig {
            base_intensity: 0.8,
            amplitude: 0.15,
            speed: 0.9,
            phase_offset: FRAC_PI_2,
        },
    )?;
    ctx.register_pulse_emitter(
        scene,
        Some(PulseTarget::Material(eye)),
        PulseConfig {
            base_intensity: 1.0,
            amplitude: 0.5,
            speed: 3.0,
            phase_offset: 0.0,
        },
    )?;
    let arm_sway = SwayConfig {
        axis: Axis::Z,
        amplitude: 0.1,
        speed: 1.0,
        phase_offset: 0.0,
    };
    ctx.register_sway_target(scene, Some(left_arm), arm_sway)?;
    // Half a cycle behind so the arms swing in mirror.
    ctx.register_sway_target(
        scene,
        Some(right_arm),
        SwayConfig {
            phase_offset: PI,
            ..arm_sway
        },
    )?;

    Ok(FigureRig {
        root: Some(root),
        head: Some(head),
        neck: Some(neck),
        eyes: smallvec![left_eye, right_eye],
    })
}
