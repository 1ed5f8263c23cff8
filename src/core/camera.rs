use super::constants::{
    CAMERA_EYE, CAMERA_FOVY_DEG, CAMERA_TARGET, CAMERA_ZFAR, CAMERA_ZNEAR, ORBIT_DAMPING,
    ORBIT_MAX_DISTANCE, ORBIT_MAX_PITCH, ORBIT_MIN_DISTANCE, ORBIT_ROTATE_SPEED, ORBIT_ZOOM_SPEED,
};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Damped orbit around the camera target.
///
/// Input moves the `goal_*` values; [`OrbitControls::update`] eases the current
/// spherical coordinates toward them once per frame. Yaw is measured from +Z
/// toward +X, pitch from the horizontal plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitControls {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub goal_yaw: f32,
    pub goal_pitch: f32,
    pub goal_distance: f32,
}

impl OrbitControls {
    pub fn looking_at(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length().clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
        let (yaw, pitch) = if offset.length_squared() > 1e-12 {
            let dir = offset.normalize();
            (
                dir.x.atan2(dir.z),
                dir.y.asin().clamp(-ORBIT_MAX_PITCH, ORBIT_MAX_PITCH),
            )
        } else {
            (0.0, 0.0)
        };
        Self {
            yaw,
            pitch,
            distance,
            goal_yaw: yaw,
            goal_pitch: pitch,
            goal_distance: distance,
        }
    }

    /// Drag by `(dx, dy)` CSS pixels. Dragging right swings the eye to the left.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.goal_yaw -= dx * ORBIT_ROTATE_SPEED;
        self.goal_pitch =
            (self.goal_pitch + dy * ORBIT_ROTATE_SPEED).clamp(-ORBIT_MAX_PITCH, ORBIT_MAX_PITCH);
    }

    /// Positive `delta` (wheel down) moves away from the target.
    pub fn zoom(&mut self, delta: f32) {
        let factor = (1.0 + delta * ORBIT_ZOOM_SPEED).max(0.1);
        self.goal_distance =
            (self.goal_distance * factor).clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }

    pub fn update(&mut self) {
        self.yaw += (self.goal_yaw - self.yaw) * ORBIT_DAMPING;
        self.pitch += (self.goal_pitch - self.pitch) * ORBIT_DAMPING;
        self.distance += (self.goal_distance - self.distance) * ORBIT_DAMPING;
    }

    /// Eye position relative to the target.
    pub fn offset(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(sy * cp, sp, cy * cp) * self.distance
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    pub orbit: OrbitControls,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: CAMERA_EYE,
            target: CAMERA_TARGET,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
            orbit: OrbitControls::looking_at(CAMERA_EYE, CAMERA_TARGET),
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// Advance the orbit one frame and place the eye on it.
    pub fn update_orbit(&mut self) {
        self.orbit.update();
        self.eye = self.target + self.orbit.offset();
    }

    /// Distance of `p` in front of the eye along the view direction.
    pub fn view_depth(&self, p: Vec3) -> f32 {
        -self.view_matrix().transform_point3(p).z
    }

    /// Normalized device coordinates of `p`, or `None` if it is behind the eye.
    pub fn world_to_ndc(&self, p: Vec3) -> Option<Vec3> {
        let clip = self.projection_matrix() * self.view_matrix() * Vec4::new(p.x, p.y, p.z, 1.0);
        if clip.w <= 1e-6 {
            return None;
        }
        Some(clip.truncate() / clip.w)
    }

    /// Project a planar world-space polygon to pixels, cut at the near plane.
    ///
    /// Returns fewer than three points when nothing of it is in front of the eye.
    pub fn project_polygon(&self, world: &[Vec3], width: f32, height: f32) -> Vec<Vec2> {
        let view = self.view_matrix();
        let in_view: Vec<Vec3> = world.iter().map(|&p| view.transform_point3(p)).collect();
        let proj = self.projection_matrix();
        clip_near(&in_view, -self.znear)
            .into_iter()
            .map(|p| Self::ndc_to_pixels(proj.project_point3(p), width, height))
            .collect()
    }

    #[inline]
    pub fn ndc_to_pixels(ndc: Vec3, width: f32, height: f32) -> Vec2 {
        Vec2::new((ndc.x + 1.0) * 0.5 * width, (1.0 - ndc.y) * 0.5 * height)
    }
}

/// Cut a view-space polygon to the half-space `z <= near_z` (in front of the eye).
pub fn clip_near(poly: &[Vec3], near_z: f32) -> Vec<Vec3> {
    let inside = |p: Vec3| p.z <= near_z;
    let crossing = |a: Vec3, b: Vec3| {
        let t = (near_z - a.z) / (b.z - a.z);
        let mut p = a + (b - a) * t;
        p.z = near_z;
        p
    };
    let mut out = Vec::with_capacity(poly.len() + 1);
    let Some(&last) = poly.last() else {
        return out;
    };
    let mut prev = last;
    for &cur in poly {
        match (inside(prev), inside(cur)) {
            (true, true) => out.push(cur),
            (true, false) => out.push(crossing(prev, cur)),
            (false, true) => {
                out.push(crossing(prev, cur));
                out.push(cur);
            }
            (false, false) => {}
        }
        prev = cur;
    }
    out
}

/// Fog blend weight for a view depth: 0 up to `near`, 1 from `far`, smooth between.
#[inline]
pub fn fog_factor(depth: f32, near: f32, far: f32) -> f32 {
    let t = ((depth - near) / (far - near).max(1e-6)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
