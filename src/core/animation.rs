use super::config::{AnimationConfig, ConfigError, PulseConfig, SwayConfig};
use super::pointer::PointerState;
use super::registry::{oscillate, PulseTarget, Registries};
use super::scene::{NodeId, SceneTargets, Transform};
use glam::Vec3;
use smallvec::SmallVec;

/// One-pole low-pass step: `current + (target - current) * factor`.
///
/// Applied once per tick with a fixed factor, so the apparent follow speed
/// depends on the display refresh rate.
#[inline]
pub fn damp(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Rotation targets derived from the pointer for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LookTargets {
    pub head_yaw: f32,
    pub head_pitch: f32,
    pub neck_yaw: f32,
    pub neck_pitch: f32,
    pub body_yaw: f32,
}

/// The figure faces +Z. Positive yaw turns its front toward +X (screen right);
/// a negative X rotation tilts it up, hence the sign flip on pitch.
#[inline]
pub fn look_targets(pointer: PointerState, cfg: &AnimationConfig) -> LookTargets {
    let head_yaw = pointer.x * cfg.head.yaw_scale;
    let head_pitch = -pointer.y * cfg.head.pitch_scale;
    LookTargets {
        head_yaw,
        head_pitch,
        neck_yaw: head_yaw * cfg.neck_yaw_fraction,
        neck_pitch: head_pitch * cfg.neck_pitch_fraction,
        body_yaw: pointer.x * cfg.body_yaw_scale,
    }
}

#[inline]
pub fn idle_offset(now: f64, cfg: &AnimationConfig) -> f32 {
    oscillate(now, cfg.idle_speed, 0.0) * cfg.idle_amplitude
}

#[inline]
pub fn eye_scale(now: f64, cfg: &AnimationConfig) -> f32 {
    1.0 + oscillate(now, cfg.eye_pulse_speed, 0.0) * cfg.eye_pulse_amplitude
}

/// Named nodes the update loop drives directly. Any of them may be absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FigureRig {
    pub root: Option<NodeId>,
    pub head: Option<NodeId>,
    pub neck: Option<NodeId>,
    pub eyes: SmallVec<[NodeId; 2]>,
}

#[inline]
fn node_mut<S: SceneTargets + ?Sized>(scene: &mut S, id: Option<NodeId>) -> Option<&mut Transform> {
    match id {
        Some(id) => scene.transform_mut(id),
        None => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Running,
}

/// Owns everything the per-frame update reads and writes besides the scene itself.
pub struct AnimationContext {
    config: AnimationConfig,
    pointer: PointerState,
    registries: Registries,
    rig: FigureRig,
    root_base_y: f32,
    phase: Phase,
}

impl AnimationContext {
    pub fn new(config: AnimationConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            config: config.validated()?,
            pointer: PointerState::CENTER,
            registries: Registries::new(),
            rig: FigureRig::default(),
            root_base_y: 0.0,
            phase: Phase::Uninitialized,
        })
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn set_pointer(&mut self, pointer: PointerState) {
        self.pointer = pointer;
    }

    pub fn registries(&self) -> &Registries {
        &self.registries
    }

    pub fn rig(&self) -> &FigureRig {
        &self.rig
    }

    /// Drop all registrations and the rig ahead of (re)building a scene.
    pub fn begin_scene(&mut self) {
        self.registries.clear();
        self.rig = FigureRig::default();
        self.root_base_y = 0.0;
        self.phase = Phase::Uninitialized;
    }

    pub fn register_pulse_emitter<S: SceneTargets + ?Sized>(
        &mut self,
        scene: &S,
        target: Option<PulseTarget>,
        cfg: PulseConfig,
    ) -> Result<bool, ConfigError> {
        self.registries.register_pulse_emitter(scene, target, cfg)
    }

    pub fn register_sway_target<S: SceneTargets + ?Sized>(
        &mut self,
        scene: &S,
        target: Option<NodeId>,
        cfg: SwayConfig,
    ) -> Result<bool, ConfigError> {
        self.registries.register_sway_target(scene, target, cfg)
    }

    /// Finish scene construction and start ticking.
    ///
    /// The root's resting height is captured only on the first attach after
    /// [`begin_scene`](Self::begin_scene). Once running, `position.y` already
    /// carries the idle offset, so a re-attach keeps the captured base.
    pub fn attach_rig<S: SceneTargets + ?Sized>(&mut self, scene: &S, rig: FigureRig) {
        if self.phase == Phase::Uninitialized {
            self.root_base_y = rig
                .root
                .and_then(|id| scene.transform(id))
                .map(|t| t.position.y)
                .unwrap_or(0.0);
        }
        self.rig = rig;
        self.phase = Phase::Running;
        log::debug!(
            "[anim] running pulses={} sways={}",
            self.registries.pulses().len(),
            self.registries.sways().len()
        );
    }

    /// Advance all time-varying state to absolute time `now` (seconds).
    pub fn tick<S: SceneTargets + ?Sized>(&mut self, scene: &mut S, now: f64) {
        if self.phase == Phase::Uninitialized {
            log::trace!("[anim] tick before scene build ignored");
            return;
        }
        let cfg = &self.config;
        let targets = look_targets(self.pointer, cfg);

        if let Some(head) = node_mut(scene, self.rig.head) {
            head.rotation.y = damp(head.rotation.y, targets.head_yaw, cfg.head.damping);
            head.rotation.x = damp(head.rotation.x, targets.head_pitch, cfg.head.damping);
        }
        if let Some(neck) = node_mut(scene, self.rig.neck) {
            neck.rotation.y = damp(neck.rotation.y, targets.neck_yaw, cfg.neck_damping);
            neck.rotation.x = damp(neck.rotation.x, targets.neck_pitch, cfg.neck_damping);
        }
        if let Some(root) = node_mut(scene, self.rig.root) {
            root.rotation.y = damp(root.rotation.y, targets.body_yaw, cfg.body_damping);
            root.position.y = self.root_base_y + idle_offset(now, cfg);
        }

        let s = eye_scale(now, cfg);
        for &eye in &self.rig.eyes {
            if let Some(t) = scene.transform_mut(eye) {
                t.scale = Vec3::splat(s);
            }
        }

        self.registries.apply(scene, now);
    }
}
