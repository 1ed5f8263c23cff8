use glam::Vec2;

/// Normalized cursor position: +x right, +y up, [-1, 1] across the surface.
///
/// Values outside the range (pointer beyond the surface) are kept as-is.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub const CENTER: PointerState = PointerState { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Map CSS pixel coordinates relative to a surface of `width` x `height`.
    #[inline]
    pub fn from_surface_px(px: f32, py: f32, width: f32, height: f32) -> Self {
        if width > 0.0 && height > 0.0 {
            Self {
                x: (px / width) * 2.0 - 1.0,
                y: -(py / height) * 2.0 + 1.0,
            }
        } else {
            Self::CENTER
        }
    }
}

/// Orbit drag and wheel input gathered between frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub last: Vec2,
    pub pending: Vec2,
    pub zoom: f32,
}

impl DragState {
    pub fn begin(&mut self, at: Vec2) {
        self.active = true;
        self.last = at;
    }

    /// Accumulate movement since the last sample; ignored unless a drag is active.
    pub fn moved(&mut self, at: Vec2) {
        if self.active {
            self.pending += at - self.last;
            self.last = at;
        }
    }

    pub fn end(&mut self) {
        self.active = false;
    }

    pub fn wheel(&mut self, delta: f32) {
        self.zoom += delta;
    }

    /// Hand over the accumulated drag and zoom, leaving both at zero.
    pub fn take(&mut self) -> (Vec2, f32) {
        let out = (self.pending, self.zoom);
        self.pending = Vec2::ZERO;
        self.zoom = 0.0;
        out
    }
}
