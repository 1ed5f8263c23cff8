use super::config::{Axis, ConfigError, PulseConfig, SwayConfig};
use super::scene::{LightId, MaterialId, NodeId, SceneTargets};

/// `sin(now * speed + phase)`, evaluated in f64 so long-running clocks keep their phase.
#[inline]
pub fn oscillate(now: f64, speed: f32, phase_offset: f32) -> f32 {
    (now * speed as f64 + phase_offset as f64).sin() as f32
}

/// What a pulse emitter drives: a light's intensity or a material's emission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PulseTarget {
    Light(LightId),
    Material(MaterialId),
}

impl PulseTarget {
    /// Current intensity of the target, `None` if the scene does not know the handle.
    #[inline]
    pub fn intensity<S: SceneTargets + ?Sized>(self, scene: &S) -> Option<f32> {
        match self {
            PulseTarget::Light(id) => scene.light_intensity(id),
            PulseTarget::Material(id) => scene.emissive_intensity(id),
        }
    }

    /// Write `value` into the target's intensity field. Unknown handles are ignored.
    #[inline]
    pub fn apply_intensity<S: SceneTargets + ?Sized>(self, scene: &mut S, value: f32) {
        let slot = match self {
            PulseTarget::Light(id) => scene.light_intensity_mut(id),
            PulseTarget::Material(id) => scene.emissive_intensity_mut(id),
        };
        if let Some(intensity) = slot {
            *intensity = value;
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PulseEmitter {
    target: PulseTarget,
    base_intensity: f32,
    amplitude: f32,
    speed: f32,
    phase_offset: f32,
}

impl PulseEmitter {
    pub fn target(&self) -> PulseTarget {
        self.target
    }

    pub fn base_intensity(&self) -> f32 {
        self.base_intensity
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    #[inline]
    pub fn value_at(&self, now: f64) -> f32 {
        self.base_intensity + oscillate(now, self.speed, self.phase_offset) * self.amplitude
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwayTarget {
    target: NodeId,
    axis: Axis,
    amplitude: f32,
    speed: f32,
    phase_offset: f32,
    base_rotation: f32,
}

impl SwayTarget {
    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn base_rotation(&self) -> f32 {
        self.base_rotation
    }

    #[inline]
    pub fn value_at(&self, now: f64) -> f32 {
        self.base_rotation + oscillate(now, self.speed, self.phase_offset) * self.amplitude
    }
}

/// Build-time populated, read-only during playback.
#[derive(Clone, Debug, Default)]
pub struct Registries {
    pulses: Vec<PulseEmitter>,
    sways: Vec<SwayTarget>,
}

impl Registries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.pulses.clear();
        self.sways.clear();
    }

    pub fn pulses(&self) -> &[PulseEmitter] {
        &self.pulses
    }

    pub fn sways(&self) -> &[SwayTarget] {
        &self.sways
    }

    /// Returns `Ok(false)` when `target` is absent, unknown to `scene`, or already
    /// registered. An absent target is skipped before the config is looked at.
    pub fn register_pulse_emitter<S: SceneTargets + ?Sized>(
        &mut self,
        scene: &S,
        target: Option<PulseTarget>,
        cfg: PulseConfig,
    ) -> Result<bool, ConfigError> {
        let Some(target) = target else {
            log::debug!("[registry] pulse emitter skipped: no target");
            return Ok(false);
        };
        cfg.validate()?;
        if target.intensity(scene).is_none() {
            log::debug!("[registry] pulse emitter {:?} not in scene", target);
            return Ok(false);
        }
        if self.pulses.iter().any(|p| p.target == target) {
            log::debug!("[registry] pulse emitter {:?} already registered", target);
            return Ok(false);
        }
        self.pulses.push(PulseEmitter {
            target,
            base_intensity: cfg.base_intensity,
            amplitude: cfg.amplitude,
            speed: cfg.speed,
            phase_offset: cfg.phase_offset,
        });
        Ok(true)
    }

    /// Captures the node's current rotation on `cfg.axis` as the swing center.
    ///
    /// Returns `Ok(false)` when `target` is absent, unknown to `scene`, or already
    /// registered on the same axis.
    pub fn register_sway_target<S: SceneTargets + ?Sized>(
        &mut self,
        scene: &S,
        target: Option<NodeId>,
        cfg: SwayConfig,
    ) -> Result<bool, ConfigError> {
        let Some(target) = target else {
            log::debug!("[registry] sway target skipped: no target");
            return Ok(false);
        };
        cfg.validate()?;
        let Some(transform) = scene.transform(target) else {
            log::debug!("[registry] sway target {:?} not in scene", target);
            return Ok(false);
        };
        if self
            .sways
            .iter()
            .any(|s| s.target == target && s.axis == cfg.axis)
        {
            log::debug!("[registry] sway target {:?} already registered", target);
            return Ok(false);
        }
        self.sways.push(SwayTarget {
            target,
            axis: cfg.axis,
            amplitude: cfg.amplitude,
            speed: cfg.speed,
            phase_offset: cfg.phase_offset,
            base_rotation: cfg.axis.get(transform.rotation),
        });
        Ok(true)
    }

    pub(crate) fn apply<S: SceneTargets + ?Sized>(&self, scene: &mut S, now: f64) {
        for pulse in &self.pulses {
            pulse.target.apply_intensity(scene, pulse.value_at(now));
        }
        for sway in &self.sways {
            if let Some(t) = scene.transform_mut(sway.target) {
                sway.axis.set(&mut t.rotation, sway.value_at(now));
            }
        }
    }
}
