use super::constants::*;
use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("`{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },
    #[error("`{name}` must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("damping `{name}` must lie in (0, 1], got {value}")]
    Damping { name: &'static str, value: f32 },
}

fn finite(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(name, value)?;
    if value < 0.0 {
        return Err(ConfigError::Negative { name, value });
    }
    Ok(())
}

fn damping(name: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(name, value)?;
    if value <= 0.0 || value > 1.0 {
        return Err(ConfigError::Damping { name, value });
    }
    Ok(())
}

/// Rotation axis selector for sway targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    pub fn get(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    #[inline]
    pub fn set(self, v: &mut Vec3, value: f32) {
        match self {
            Axis::X => v.x = value,
            Axis::Y => v.y = value,
            Axis::Z => v.z = value,
        }
    }
}

/// Pointer-to-rotation mapping for one joint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LookConfig {
    pub yaw_scale: f32,
    pub pitch_scale: f32,
    pub damping: f32,
}

/// Tuning for the per-frame update. Build with `Default` and override fields,
/// then call [`AnimationConfig::validated`].
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationConfig {
    pub head: LookConfig,
    pub neck_yaw_fraction: f32,
    pub neck_pitch_fraction: f32,
    pub neck_damping: f32,
    pub body_yaw_scale: f32,
    pub body_damping: f32,
    pub idle_speed: f32,
    pub idle_amplitude: f32,
    pub eye_pulse_speed: f32,
    pub eye_pulse_amplitude: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            head: LookConfig {
                yaw_scale: HEAD_YAW_SCALE,
                pitch_scale: HEAD_PITCH_SCALE,
                damping: HEAD_DAMPING,
            },
            neck_yaw_fraction: NECK_YAW_FRACTION,
            neck_pitch_fraction: NECK_PITCH_FRACTION,
            neck_damping: NECK_DAMPING,
            body_yaw_scale: BODY_YAW_SCALE,
            body_damping: BODY_DAMPING,
            idle_speed: IDLE_SPEED,
            idle_amplitude: IDLE_AMPLITUDE,
            eye_pulse_speed: EYE_PULSE_SPEED,
            eye_pulse_amplitude: EYE_PULSE_AMPLITUDE,
        }
    }
}

impl AnimationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("head.yaw_scale", self.head.yaw_scale)?;
        finite("head.pitch_scale", self.head.pitch_scale)?;
        damping("head.damping", self.head.damping)?;
        finite("neck_yaw_fraction", self.neck_yaw_fraction)?;
        finite("neck_pitch_fraction", self.neck_pitch_fraction)?;
        damping("neck_damping", self.neck_damping)?;
        finite("body_yaw_scale", self.body_yaw_scale)?;
        damping("body_damping", self.body_damping)?;
        finite("idle_speed", self.idle_speed)?;
        non_negative("idle_amplitude", self.idle_amplitude)?;
        finite("eye_pulse_speed", self.eye_pulse_speed)?;
        non_negative("eye_pulse_amplitude", self.eye_pulse_amplitude)?;
        Ok(())
    }

    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }
}

/// Options for a pulse emitter registration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseConfig {
    pub base_intensity: f32,
    pub amplitude: f32,
    pub speed: f32,
    pub phase_offset: f32,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            base_intensity: DEFAULT_PULSE_BASE,
            amplitude: DEFAULT_PULSE_AMPLITUDE,
            speed: DEFAULT_PULSE_SPEED,
            phase_offset: 0.0,
        }
    }
}

impl PulseConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("pulse.base_intensity", self.base_intensity)?;
        non_negative("pulse.amplitude", self.amplitude)?;
        finite("pulse.speed", self.speed)?;
        finite("pulse.phase_offset", self.phase_offset)
    }
}

/// Options for a sway target registration. A negative amplitude mirrors the swing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwayConfig {
    pub axis: Axis,
    pub amplitude: f32,
    pub speed: f32,
    pub phase_offset: f32,
}

impl Default for SwayConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Z,
            amplitude: DEFAULT_SWAY_AMPLITUDE,
            speed: DEFAULT_SWAY_SPEED,
            phase_offset: 0.0,
        }
    }
}

impl SwayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("sway.amplitude", self.amplitude)?;
        finite("sway.speed", self.speed)?;
        finite("sway.phase_offset", self.phase_offset)
    }
}
