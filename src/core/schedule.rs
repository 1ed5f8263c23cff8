use super::animation::AnimationContext;
use super::scene::SceneTargets;
use std::cell::Cell;

/// Monotonic time source, in seconds since an arbitrary origin.
pub trait Clock {
    fn now_secs(&self) -> f64;
}

/// Wall clock backed by `instant::Instant` (performance.now() on the web).
pub struct InstantClock {
    origin: instant::Instant,
}

impl Default for InstantClock {
    fn default() -> Self {
        Self {
            origin: instant::Instant::now(),
        }
    }
}

impl Clock for InstantClock {
    fn now_secs(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Clock that only moves when told to.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, now: f64) {
        self.now.set(now);
    }

    pub fn advance(&self, secs: f64) {
        self.now.set(self.now.get() + secs);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> f64 {
        self.now.get()
    }
}

/// Receives the scene once per frame after the update pass.
pub trait FrameSink<S: ?Sized> {
    fn present(&mut self, scene: &S) -> anyhow::Result<()>;
}

/// Drives one update + present per call; the host decides when to call it.
pub struct FrameLoop<C: Clock> {
    clock: C,
    frames: u64,
}

impl<C: Clock> FrameLoop<C> {
    pub fn new(clock: C) -> Self {
        Self { clock, frames: 0 }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn step<S, R>(
        &mut self,
        ctx: &mut AnimationContext,
        scene: &mut S,
        sink: &mut R,
    ) -> anyhow::Result<()>
    where
        S: SceneTargets + ?Sized,
        R: FrameSink<S> + ?Sized,
    {
        let now = self.clock.now_secs();
        ctx.tick(scene, now);
        sink.present(scene)?;
        self.frames += 1;
        Ok(())
    }
}
