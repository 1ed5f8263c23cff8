// Host-side tests for constants and default configuration.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod config {
    include!("../src/core/config.rs");
}

use config::*;
use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn damping_factors_are_fractions() {
    for d in [HEAD_DAMPING, NECK_DAMPING, BODY_DAMPING] {
        assert!(d > 0.0 && d <= 1.0);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // The head leads, the neck and body trail behind it.
    assert!(NECK_DAMPING < HEAD_DAMPING);
    assert!(BODY_DAMPING < HEAD_DAMPING);
    assert!(NECK_YAW_FRACTION < 1.0 && NECK_PITCH_FRACTION < 1.0);
    assert!(BODY_YAW_SCALE < HEAD_YAW_SCALE);

    // Oscillations must never flip the sign of what they modulate.
    assert!(EYE_PULSE_AMPLITUDE < 1.0);
    assert!(DEFAULT_PULSE_AMPLITUDE < DEFAULT_PULSE_BASE);
    assert!(IDLE_AMPLITUDE > 0.0 && IDLE_SPEED > 0.0);

    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZFAR > CAMERA_ZNEAR);
}

#[test]
fn rgb_unpacks_hex_channels() {
    let c = rgb(0xff8000);
    assert_eq!(c.x, 1.0);
    assert!((c.y - 128.0 / 255.0).abs() < 1e-6);
    assert_eq!(c.z, 0.0);
}

#[test]
fn default_configs_validate() {
    assert!(AnimationConfig::default().validate().is_ok());
    assert!(PulseConfig::default().validate().is_ok());
    assert!(SwayConfig::default().validate().is_ok());
}

#[test]
fn config_errors_name_the_field() {
    let mut cfg = AnimationConfig::default();
    cfg.body_damping = 1.5;
    let err = cfg.clone().validated().unwrap_err();
    assert_eq!(
        err,
        ConfigError::Damping {
            name: "body_damping",
            value: 1.5
        }
    );
    assert_eq!(
        err.to_string(),
        "damping `body_damping` must lie in (0, 1], got 1.5"
    );

    cfg.body_damping = BODY_DAMPING;
    cfg.idle_amplitude = -0.01;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::Negative {
            name: "idle_amplitude",
            ..
        })
    ));

    cfg.idle_amplitude = IDLE_AMPLITUDE;
    cfg.head.yaw_scale = f32::INFINITY;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NonFinite {
            name: "head.yaw_scale",
            ..
        })
    ));
}

#[test]
fn sway_allows_mirrored_amplitude() {
    let cfg = SwayConfig {
        amplitude: -0.1,
        ..SwayConfig::default()
    };
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.axis, Axis::Z);
}
