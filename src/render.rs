use crate::core::constants::{rgb, BACKGROUND_RGB, FOG_FAR, FOG_NEAR};
use crate::core::{fog_factor, Camera, FrameSink, Light, LightKind, SceneGraph, Shape};
use anyhow::anyhow;
use glam::{Mat4, Vec2, Vec3};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

// Rough weights that turn the light rig into a flat shading factor.
const DIRECTIONAL_WEIGHT: f32 = 0.35;
const HEMISPHERE_WEIGHT: f32 = 0.5;
const POINT_WEIGHT: f32 = 0.5;

enum Shape2d {
    Disc { center: Vec2, radius: f32 },
    Stroke { a: Vec2, b: Vec2, width: f32 },
    Polygon(Vec<Vec2>),
}

struct DrawItem {
    depth: f32,
    shape: Shape2d,
    color: Vec3,
}

/// Flat-shaded 2D canvas projection of the scene graph.
///
/// Stands in for a full 3D renderer: every primitive is projected through
/// [`Camera`] and painted back to front.
pub struct CanvasRenderer {
    canvas: web::HtmlCanvasElement,
    ctx2d: web::CanvasRenderingContext2d,
    camera: Camera,
    draw_list: Vec<DrawItem>,
}

impl CanvasRenderer {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx2d = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("get_context: {:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self {
            canvas,
            ctx2d,
            camera: Camera::default(),
            draw_list: Vec::new(),
        })
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    fn collect(&mut self, scene: &SceneGraph, width: f32, height: f32) {
        self.draw_list.clear();
        let right = (self.camera.target - self.camera.eye)
            .cross(self.camera.up)
            .normalize();
        for (id, node) in scene.nodes() {
            let Some(world) = scene.world_matrix(id) else {
                continue;
            };
            let center = world.transform_point3(Vec3::ZERO);
            // Planes are clipped against the near plane instead of culled by their center.
            let ndc = self.camera.world_to_ndc(center);
            if ndc.is_none() && !matches!(node.shape, Shape::Plane { .. }) {
                continue;
            }
            let center_px = ndc.map(|n| Camera::ndc_to_pixels(n, width, height));
            let px = |p: Vec3| {
                self.camera
                    .world_to_ndc(p)
                    .map(|n| Camera::ndc_to_pixels(n, width, height))
            };
            let scale = world.to_scale_rotation_translation().0.max_element();
            let pixel_radius =
                |r: f32| Some(px(center + right * r * scale)?.distance(center_px?));
            let shape = match node.shape {
                Shape::Group => continue,
                Shape::Sphere { radius } => {
                    let (Some(center), Some(radius)) = (center_px, pixel_radius(radius)) else {
                        continue;
                    };
                    Shape2d::Disc { center, radius }
                }
                Shape::Capsule { radius, length } => {
                    match segment(&world, length, radius, &px, &pixel_radius) {
                        Some(s) => s,
                        None => continue,
                    }
                }
                Shape::Cylinder {
                    radius_top,
                    radius_bottom,
                    height: h,
                } => {
                    let radius = 0.5 * (radius_top + radius_bottom);
                    match segment(&world, h, radius, &px, &pixel_radius) {
                        Some(s) => s,
                        None => continue,
                    }
                }
                Shape::Plane { width: w, depth: d } => {
                    let (hw, hd) = (0.5 * w, 0.5 * d);
                    let corners = [
                        Vec3::new(-hw, -hd, 0.0),
                        Vec3::new(hw, -hd, 0.0),
                        Vec3::new(hw, hd, 0.0),
                        Vec3::new(-hw, hd, 0.0),
                    ]
                    .map(|c| world.transform_point3(c));
                    let outline = self.camera.project_polygon(&corners, width, height);
                    if outline.len() < 3 {
                        continue;
                    }
                    Shape2d::Polygon(outline)
                }
            };
            let lit = node
                .material
                .and_then(|m| scene.material(m))
                .map(|m| {
                    m.color * light_factor(scene.lights(), center)
                        + m.emissive * m.emissive_intensity
                })
                .unwrap_or(Vec3::ONE);
            let fog = fog_factor(self.camera.view_depth(center), FOG_NEAR, FOG_FAR);
            // Planes span the view; paint them under everything else.
            let depth = if matches!(shape, Shape2d::Polygon(_)) {
                f32::INFINITY
            } else {
                center.distance(self.camera.eye)
            };
            self.draw_list.push(DrawItem {
                depth,
                shape,
                color: lit.lerp(rgb(BACKGROUND_RGB), fog),
            });
        }
        // Painter's order: farthest first.
        self.draw_list
            .sort_by(|a, b| b.depth.total_cmp(&a.depth));
    }

    fn paint(&self, width: f64, height: f64) -> anyhow::Result<()> {
        let c = &self.ctx2d;
        c.set_fill_style_str(&css_color(rgb(BACKGROUND_RGB)));
        c.fill_rect(0.0, 0.0, width, height);
        c.set_line_cap("round");
        for item in &self.draw_list {
            let style = css_color(item.color);
            c.begin_path();
            match &item.shape {
                &Shape2d::Disc { center, radius } => {
                    c.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
                        .map_err(|e| anyhow!("arc: {:?}", e))?;
                    c.set_fill_style_str(&style);
                    c.fill();
                }
                &Shape2d::Stroke { a, b, width } => {
                    c.move_to(a.x as f64, a.y as f64);
                    c.line_to(b.x as f64, b.y as f64);
                    c.set_line_width(width as f64);
                    c.set_stroke_style_str(&style);
                    c.stroke();
                }
                Shape2d::Polygon(q) => {
                    c.move_to(q[0].x as f64, q[0].y as f64);
                    for p in &q[1..] {
                        c.line_to(p.x as f64, p.y as f64);
                    }
                    c.close_path();
                    c.set_fill_style_str(&style);
                    c.fill();
                }
            }
        }
        Ok(())
    }
}

impl FrameSink<SceneGraph> for CanvasRenderer {
    fn present(&mut self, scene: &SceneGraph) -> anyhow::Result<()> {
        let w = self.canvas.width();
        let h = self.canvas.height();
        self.camera.set_viewport(w, h);
        self.collect(scene, w as f32, h as f32);
        self.paint(w as f64, h as f64)
    }
}

/// Project a local-Y aligned segment of `length` into a round-capped stroke.
fn segment(
    world: &Mat4,
    length: f32,
    radius: f32,
    px: &impl Fn(Vec3) -> Option<Vec2>,
    pixel_radius: &impl Fn(f32) -> Option<f32>,
) -> Option<Shape2d> {
    let half = 0.5 * length;
    let a = px(world.transform_point3(Vec3::new(0.0, -half, 0.0)))?;
    let b = px(world.transform_point3(Vec3::new(0.0, half, 0.0)))?;
    let width = 2.0 * pixel_radius(radius)?;
    Some(Shape2d::Stroke { a, b, width })
}

fn light_factor(lights: &[Light], at: Vec3) -> Vec3 {
    lights.iter().fold(Vec3::ZERO, |acc, l| {
        let weight = match l.kind {
            LightKind::Ambient => 1.0,
            LightKind::Directional => DIRECTIONAL_WEIGHT,
            LightKind::Hemisphere { .. } => HEMISPHERE_WEIGHT,
            LightKind::Point { range } => {
                let falloff = (1.0 - l.position.distance(at) / range.max(1e-3)).clamp(0.0, 1.0);
                POINT_WEIGHT * falloff
            }
        };
        acc + l.color * l.intensity * weight
    })
}

fn css_color(c: Vec3) -> String {
    let c = (c.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
    format!("rgb({},{},{})", c.x as u8, c.y as u8, c.z as u8)
}
