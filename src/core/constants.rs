use glam::Vec3;

// Shared animation/scene tuning constants.

// Look-at mapping (radians per unit of normalized pointer travel)
pub const HEAD_YAW_SCALE: f32 = 0.6;
pub const HEAD_PITCH_SCALE: f32 = 0.3;
pub const NECK_YAW_FRACTION: f32 = 0.3; // neck follows 30% of the head yaw
pub const NECK_PITCH_FRACTION: f32 = 0.2; // and 20% of the head pitch
pub const BODY_YAW_SCALE: f32 = 0.2;

// Per-tick damping factors (not time-scaled)
pub const HEAD_DAMPING: f32 = 0.08;
pub const NECK_DAMPING: f32 = 0.06;
pub const BODY_DAMPING: f32 = 0.05;

// Idle breathing
pub const IDLE_SPEED: f32 = 1.5;
pub const IDLE_AMPLITUDE: f32 = 0.02;

// Eye pulse
pub const EYE_PULSE_SPEED: f32 = 2.0;
pub const EYE_PULSE_AMPLITUDE: f32 = 0.12;

// Registry defaults
pub const DEFAULT_PULSE_BASE: f32 = 1.0;
pub const DEFAULT_PULSE_AMPLITUDE: f32 = 0.5;
pub const DEFAULT_PULSE_SPEED: f32 = 2.0;
pub const DEFAULT_SWAY_AMPLITUDE: f32 = 0.1;
pub const DEFAULT_SWAY_SPEED: f32 = 1.0;

// Camera
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 1.5, 5.0);
pub const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 1.5, 0.0);
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Orbit controls (drag to orbit around CAMERA_TARGET, wheel to zoom)
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_MIN_DISTANCE: f32 = 3.0;
pub const ORBIT_MAX_DISTANCE: f32 = 10.0;
pub const ORBIT_ROTATE_SPEED: f32 = 0.005; // radians per CSS pixel dragged
pub const ORBIT_ZOOM_SPEED: f32 = 0.001; // distance scale per wheel delta unit
pub const ORBIT_MAX_PITCH: f32 = 1.4; // keeps the view off the poles

// Depth fog toward the background color (eased between near and far)
pub const FOG_NEAR: f32 = 10.0;
pub const FOG_FAR: f32 = 50.0;

// Palette
pub const BACKGROUND_RGB: u32 = 0x1a1a2e;
pub const SILVER_RGB: u32 = 0xc0c0c0;
pub const GROUND_RGB: u32 = 0x16213e;
pub const EYE_GLOW_RGB: u32 = 0x00e5ff;

#[inline]
pub fn rgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}
