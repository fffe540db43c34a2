//! Ambient background: a fixed batch of floating wireframe primitives
//!
//! The scene is created once on activation, advanced once per displayed frame
//! and painted with `egui`'s painter as projected line segments. The frame
//! schedule is an explicit handle: while it is held the background keeps
//! asking for repaints, once released (`deactivate`, or drop) nothing mutates
//! the shapes and no further frames are requested on its behalf.

use crate::constants::*;
use crate::utils::hsl_to_rgb;
use eframe::egui;
use rand::Rng;
use std::f32::consts::{PI, TAU};
use tracing::debug;

// ============================================================================
// GEOMETRY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Cube,
    Sphere,
    Torus,
    Octahedron,
}

impl GeometryKind {
    pub const ALL: [GeometryKind; 4] = [
        GeometryKind::Cube,
        GeometryKind::Sphere,
        GeometryKind::Torus,
        GeometryKind::Octahedron,
    ];

    fn slot(self) -> usize {
        match self {
            GeometryKind::Cube => 0,
            GeometryKind::Sphere => 1,
            GeometryKind::Torus => 2,
            GeometryKind::Octahedron => 3,
        }
    }

    /// Build the wireframe in local space.
    pub fn wireframe(self) -> Wireframe {
        match self {
            GeometryKind::Cube => {
                let h = 0.25;
                let vertices = (0..8)
                    .map(|i| {
                        [
                            if i & 1 == 0 { -h } else { h },
                            if i & 2 == 0 { -h } else { h },
                            if i & 4 == 0 { -h } else { h },
                        ]
                    })
                    .collect();
                // Connect corners that differ in exactly one bit
                let mut edges = Vec::with_capacity(12);
                for a in 0..8u16 {
                    for bit in [1u16, 2, 4] {
                        let b = a | bit;
                        if b != a {
                            edges.push([a, b]);
                        }
                    }
                }
                Wireframe { vertices, edges }
            }
            GeometryKind::Sphere => {
                let (radius, rings, segments) = (0.3, 12, 16);
                lattice(rings + 1, segments, false, |r, s| {
                    let phi = PI * r as f32 / rings as f32;
                    let theta = TAU * s as f32 / segments as f32;
                    [
                        radius * phi.sin() * theta.cos(),
                        radius * phi.cos(),
                        radius * phi.sin() * theta.sin(),
                    ]
                })
            }
            GeometryKind::Torus => {
                let (major, tube, tubular, radial) = (0.3, 0.1, 32, 8);
                lattice(tubular, radial, true, |u, v| {
                    let u = TAU * u as f32 / tubular as f32;
                    let v = TAU * v as f32 / radial as f32;
                    [
                        (major + tube * v.cos()) * u.cos(),
                        (major + tube * v.cos()) * u.sin(),
                        tube * v.sin(),
                    ]
                })
            }
            GeometryKind::Octahedron => {
                let r = 0.3;
                let vertices = vec![
                    [r, 0.0, 0.0],
                    [-r, 0.0, 0.0],
                    [0.0, r, 0.0],
                    [0.0, -r, 0.0],
                    [0.0, 0.0, r],
                    [0.0, 0.0, -r],
                ];
                // Every pair of non-opposite vertices is an edge
                let mut edges = Vec::with_capacity(12);
                for a in 0..6u16 {
                    for b in (a + 1)..6 {
                        if a / 2 != b / 2 {
                            edges.push([a, b]);
                        }
                    }
                }
                Wireframe { vertices, edges }
            }
        }
    }
}

/// Vertices plus index pairs, shared by every shape of the same kind.
#[derive(Debug, Clone)]
pub struct Wireframe {
    pub vertices: Vec<[f32; 3]>,
    pub edges: Vec<[u16; 2]>,
}

/// Grid of `rings x segments` points; segments always wrap, rings optionally.
fn lattice(
    rings: usize,
    segments: usize,
    close_rings: bool,
    point: impl Fn(usize, usize) -> [f32; 3],
) -> Wireframe {
    let idx = |r: usize, s: usize| (r * segments + s) as u16;
    let mut vertices = Vec::with_capacity(rings * segments);
    let mut edges = Vec::with_capacity(rings * segments * 2);
    for r in 0..rings {
        for s in 0..segments {
            vertices.push(point(r, s));
            edges.push([idx(r, s), idx(r, (s + 1) % segments)]);
            if r + 1 < rings {
                edges.push([idx(r, s), idx(r + 1, s)]);
            } else if close_rings {
                edges.push([idx(r, s), idx(0, s)]);
            }
        }
    }
    Wireframe { vertices, edges }
}

// ============================================================================
// SHAPES & CAMERA
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub kind: GeometryKind,
    pub hue: f32,
    pub color: egui::Color32,
    pub position: [f32; 3],
    pub rotation: [f32; 3],
}

impl Shape {
    fn random(rng: &mut impl Rng) -> Self {
        let kind = GeometryKind::ALL[rng.random_range(0..GeometryKind::ALL.len())];
        let hue: f32 = rng.random();
        let (r, g, b) = hsl_to_rgb(hue, SHAPE_SATURATION, SHAPE_LIGHTNESS);
        let mut spread = || (rng.random::<f32>() - 0.5) * SHAPE_SPREAD;
        let position = [spread(), spread(), spread()];
        let rotation = [
            rng.random::<f32>() * PI,
            rng.random::<f32>() * PI,
            rng.random::<f32>() * PI,
        ];
        Self {
            kind,
            hue,
            color: egui::Color32::from_rgba_unmultiplied(r, g, b, (SHAPE_OPACITY * 255.0) as u8),
            position,
            rotation,
        }
    }

    /// Rotation step per frame, derived from creation order only.
    pub fn spin(index: usize) -> [f32; 2] {
        [0.01 * (index % 3 + 1) as f32, 0.01 * (index % 2 + 1) as f32]
    }

    /// Local point -> world point (Euler XYZ, then translate).
    fn transform(&self, p: [f32; 3]) -> [f32; 3] {
        let [rx, ry, rz] = self.rotation;
        let (sx, cx) = rx.sin_cos();
        let (sy, cy) = ry.sin_cos();
        let (sz, cz) = rz.sin_cos();

        let [x, y, z] = p;
        // Rz
        let (x, y) = (x * cz - y * sz, x * sz + y * cz);
        // Ry
        let (x, z) = (x * cy + z * sy, -x * sy + z * cy);
        // Rx
        let (y, z) = (y * cx - z * sx, y * sx + z * cx);

        [
            x + self.position[0],
            y + self.position[1],
            z + self.position[2],
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub fov_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub z: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            fov_deg: CAMERA_FOV_DEG,
            aspect,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            z: CAMERA_Z,
        }
    }

    /// Project a world point onto `surface`. `None` when outside the depth range.
    pub fn project(&self, p: [f32; 3], surface: egui::Rect) -> Option<egui::Pos2> {
        let depth = self.z - p[2];
        if depth < self.near || depth > self.far {
            return None;
        }
        let f = 1.0 / (self.fov_deg.to_radians() * 0.5).tan();
        let ndc_x = f / self.aspect * p[0] / depth;
        let ndc_y = f * p[1] / depth;
        let c = surface.center();
        Some(egui::pos2(
            c.x + ndc_x * surface.width() * 0.5,
            c.y - ndc_y * surface.height() * 0.5,
        ))
    }
}

fn aspect_of(size: egui::Vec2) -> f32 {
    if size.y > 0.0 {
        size.x / size.y
    } else {
        1.0
    }
}

// ============================================================================
// RENDERER
// ============================================================================

/// Held while the background is live. Dropping it stops the frame loop.
#[derive(Debug)]
pub struct FrameSchedule {
    activated_at: f64,
    frames: u64,
}

pub struct AmbientBackground {
    shapes: Vec<Shape>,
    camera: Camera,
    surface: egui::Vec2,
    geometry: Option<Vec<Wireframe>>,
    /// Projected vertices of the shape being painted, reused across frames
    projected: Vec<Option<egui::Pos2>>,
    schedule: Option<FrameSchedule>,
}

impl AmbientBackground {
    pub fn activate(count: usize, surface: egui::Vec2, now: f64, rng: &mut impl Rng) -> Self {
        let shapes: Vec<Shape> = (0..count).map(|_| Shape::random(&mut *rng)).collect();
        let geometry: Vec<Wireframe> = GeometryKind::ALL.iter().map(|k| k.wireframe()).collect();
        let widest = geometry.iter().map(|w| w.vertices.len()).max().unwrap_or(0);
        debug!(count, width = surface.x, height = surface.y, "Ambient background activated");
        Self {
            shapes,
            camera: Camera::new(aspect_of(surface)),
            surface,
            geometry: Some(geometry),
            projected: Vec::with_capacity(widest),
            schedule: Some(FrameSchedule {
                activated_at: now,
                frames: 0,
            }),
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[cfg(test)]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[cfg(test)]
    pub fn surface(&self) -> egui::Vec2 {
        self.surface
    }

    pub fn is_scheduled(&self) -> bool {
        self.schedule.is_some()
    }

    #[cfg(test)]
    pub fn has_resources(&self) -> bool {
        self.geometry.is_some()
    }

    #[cfg(test)]
    pub fn projection_capacity(&self) -> usize {
        self.projected.capacity()
    }

    #[cfg(test)]
    pub fn frames(&self) -> u64 {
        self.schedule.as_ref().map_or(0, |s| s.frames)
    }

    /// Advance every shape by one frame. Returns false once deactivated.
    pub fn tick(&mut self, now: f64) -> bool {
        let Some(schedule) = self.schedule.as_mut() else {
            return false;
        };
        schedule.frames += 1;
        let t = (now - schedule.activated_at) as f32;

        for (i, shape) in self.shapes.iter_mut().enumerate() {
            let [dx, dy] = Shape::spin(i);
            shape.rotation[0] += dx;
            shape.rotation[1] += dy;
            shape.position[1] += (t + i as f32).sin() * 0.002;
        }
        true
    }

    pub fn resize(&mut self, surface: egui::Vec2) {
        if self.surface == surface {
            return;
        }
        self.surface = surface;
        self.camera.aspect = aspect_of(surface);
    }

    /// Stop the frame loop and release render resources. Idempotent.
    pub fn deactivate(&mut self) {
        if let Some(schedule) = self.schedule.take() {
            debug!(frames = schedule.frames, "Ambient background deactivated");
        }
        self.geometry = None;
        self.projected = Vec::new();
    }

    pub fn paint(&mut self, painter: &egui::Painter, rect: egui::Rect) {
        let Self {
            shapes,
            camera,
            geometry,
            projected,
            ..
        } = self;
        let Some(geometry) = geometry.as_ref() else {
            return;
        };
        for shape in shapes.iter() {
            let mesh = &geometry[shape.kind.slot()];
            let stroke = egui::Stroke::new(1.0, shape.color);
            projected.clear();
            projected.extend(
                mesh.vertices
                    .iter()
                    .map(|v| camera.project(shape.transform(*v), rect)),
            );
            for [a, b] in &mesh.edges {
                if let (Some(pa), Some(pb)) = (projected[*a as usize], projected[*b as usize]) {
                    painter.line_segment([pa, pb], stroke);
                }
            }
        }
    }

    /// One displayed frame: follow the surface size, advance, paint, reschedule.
    pub fn show(&mut self, ui: &egui::Ui, rect: egui::Rect) {
        if !self.is_scheduled() {
            return;
        }
        self.resize(rect.size());
        let now = ui.input(|i| i.time);
        self.tick(now);
        self.paint(&ui.painter_at(rect), rect);
        ui.ctx().request_repaint();
    }
}

impl Drop for AmbientBackground {
    fn drop(&mut self) {
        self.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scene(count: usize) -> AmbientBackground {
        let mut rng = StdRng::seed_from_u64(7);
        AmbientBackground::activate(count, egui::vec2(1600.0, 900.0), 0.0, &mut rng)
    }

    #[test]
    fn activation_creates_configured_batch() {
        let bg = scene(DEFAULT_SHAPE_COUNT);
        assert_eq!(bg.shapes().len(), 15);
        assert!(bg.is_scheduled());
        assert!(bg.has_resources());
        assert!((bg.camera().aspect - 16.0 / 9.0).abs() < 1e-5);
    }

    #[test]
    fn shapes_start_inside_bounds() {
        let bg = scene(200);
        let half = SHAPE_SPREAD / 2.0;
        for shape in bg.shapes() {
            for axis in 0..3 {
                assert!(shape.position[axis] >= -half && shape.position[axis] <= half);
                assert!(shape.rotation[axis] >= 0.0 && shape.rotation[axis] <= PI);
            }
            assert!((0.0..1.0).contains(&shape.hue));
            assert_eq!(shape.color.a(), (SHAPE_OPACITY * 255.0) as u8);
        }
    }

    #[test]
    fn every_kind_is_reachable() {
        let bg = scene(200);
        for kind in GeometryKind::ALL {
            assert!(bg.shapes().iter().any(|s| s.kind == kind), "{kind:?} never chosen");
        }
    }

    #[test]
    fn count_is_stable_across_frames_and_resizes() {
        let mut bg = scene(15);
        for frame in 0..120 {
            bg.tick(frame as f64 / 60.0);
            if frame % 30 == 0 {
                bg.resize(egui::vec2(800.0 + frame as f32, 600.0));
            }
        }
        assert_eq!(bg.shapes().len(), 15);
        assert_eq!(bg.frames(), 120);
    }

    #[test]
    fn tick_spins_by_index() {
        let mut bg = scene(6);
        let before: Vec<Shape> = bg.shapes().to_vec();
        bg.tick(0.0);
        for (i, (old, new)) in before.iter().zip(bg.shapes()).enumerate() {
            let [dx, dy] = Shape::spin(i);
            assert!((new.rotation[0] - old.rotation[0] - dx).abs() < 1e-5);
            assert!((new.rotation[1] - old.rotation[1] - dy).abs() < 1e-5);
            assert_eq!(new.rotation[2], old.rotation[2]);
            let bob = (i as f32).sin() * 0.002;
            assert!((new.position[1] - old.position[1] - bob).abs() < 1e-5);
            assert_eq!(new.position[0], old.position[0]);
        }
        let [x5, y5] = Shape::spin(5);
        assert!((x5 - 0.03).abs() < 1e-6 && (y5 - 0.02).abs() < 1e-6);
        assert_eq!(Shape::spin(0), Shape::spin(6));
    }

    #[test]
    fn resize_only_touches_camera_and_surface() {
        let mut bg = scene(15);
        let before: Vec<Shape> = bg.shapes().to_vec();
        bg.resize(egui::vec2(400.0, 800.0));
        assert_eq!(bg.surface(), egui::vec2(400.0, 800.0));
        assert!((bg.camera().aspect - 0.5).abs() < 1e-6);
        assert_eq!(bg.shapes(), before.as_slice());
    }

    #[test]
    fn zero_height_surface_keeps_finite_aspect() {
        let mut bg = scene(1);
        bg.resize(egui::vec2(300.0, 0.0));
        assert!(bg.camera().aspect.is_finite());
    }

    #[test]
    fn deactivation_stops_updates_and_releases_resources() {
        let mut bg = scene(15);
        bg.tick(0.016);
        bg.deactivate();
        assert!(!bg.is_scheduled());
        assert!(!bg.has_resources());

        let frozen: Vec<Shape> = bg.shapes().to_vec();
        for frame in 0..10 {
            assert!(!bg.tick(1.0 + frame as f64));
        }
        assert_eq!(bg.shapes(), frozen.as_slice());
        assert_eq!(bg.frames(), 0);

        // Second teardown is harmless
        bg.deactivate();
        assert!(!bg.is_scheduled());
    }

    #[test]
    fn wireframes_have_expected_edge_counts() {
        assert_eq!(GeometryKind::Cube.wireframe().edges.len(), 12);
        assert_eq!(GeometryKind::Cube.wireframe().vertices.len(), 8);
        assert_eq!(GeometryKind::Octahedron.wireframe().edges.len(), 12);
        for kind in GeometryKind::ALL {
            let wf = kind.wireframe();
            assert!(wf
                .edges
                .iter()
                .all(|[a, b]| (*a as usize) < wf.vertices.len() && (*b as usize) < wf.vertices.len()));
        }
    }

    #[test]
    fn camera_projects_origin_to_centre_and_culls_behind() {
        let cam = Camera::new(1.0);
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(200.0, 200.0));
        let p = cam.project([0.0, 0.0, 0.0], rect).expect("origin is in front of the camera");
        assert!((p.x - 100.0).abs() < 1e-4 && (p.y - 100.0).abs() < 1e-4);
        assert!(cam.project([0.0, 0.0, 6.0], rect).is_none());
        let up = cam.project([0.0, 1.0, 0.0], rect).expect("visible");
        assert!(up.y < 100.0);
    }

    /// Run one headless frame that shows `bg` across the whole panel and
    /// return the repaint delay egui reports for it.
    fn show_frame(ctx: &egui::Context, bg: &mut AmbientBackground) -> std::time::Duration {
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let rect = ui.max_rect();
                bg.show(ui, rect);
            });
        });
        output.viewport_output[&egui::ViewportId::ROOT].repaint_delay
    }

    /// A fresh context repaints its first frame regardless; burn it.
    fn warmed_context() -> egui::Context {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |_| {});
        ctx
    }

    #[test]
    fn live_background_keeps_requesting_frames() {
        let ctx = warmed_context();
        let mut bg = scene(6);
        let delay = show_frame(&ctx, &mut bg);
        assert_eq!(delay, std::time::Duration::ZERO);
        assert_eq!(bg.frames(), 1);
    }

    #[test]
    fn show_after_deactivate_neither_moves_shapes_nor_repaints() {
        let ctx = warmed_context();
        let mut bg = scene(6);
        bg.deactivate();
        let frozen: Vec<Shape> = bg.shapes().to_vec();

        let delay = show_frame(&ctx, &mut bg);
        assert_eq!(delay, std::time::Duration::MAX);
        assert_eq!(bg.shapes(), frozen.as_slice());
        assert!(!ctx.has_requested_repaint());
    }

    #[test]
    fn painting_reuses_the_projection_buffer() {
        let ctx = warmed_context();
        let mut bg = scene(15);
        let capacity = bg.projection_capacity();
        assert!(capacity > 0);
        for _ in 0..3 {
            show_frame(&ctx, &mut bg);
        }
        assert_eq!(bg.projection_capacity(), capacity);

        bg.deactivate();
        assert_eq!(bg.projection_capacity(), 0);
    }
}
