//! Interactive wind-tree viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the tree factory, the
//! current [`Tree`], and the camera, and implements [`eframe::App`] to
//! drive one [`Tree::render_frame`] per repaint through a painter-backed
//! [`Canvas`].

use eframe::App;
use glam::Vec2;
use rand::rng;
use tree_core::{
    canvas::Canvas,
    config::FactoryRanges,
    factory::TreeFactory,
    tree::Tree,
    types::Rgba,
};

/// Logical drawing surface the tree is generated for; the root sits at
/// its bottom-center. The camera maps this surface into the window.
const SURFACE: Vec2 = Vec2::new(800.0, 600.0);

/// World-to-screen mapping: uniform zoom plus a pixel pan, centered on
/// the drawing area. World y already grows downward (the core's screen
/// convention), so no axis flip is needed.
#[derive(Clone, Copy, Debug)]
struct Camera {
    zoom: f32,
    pan: egui::Vec2,
}

impl Camera {
    fn world_to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        let center = rect.center();
        egui::pos2(
            center.x + (p.x - SURFACE.x / 2.0) * self.zoom + self.pan.x,
            center.y + (p.y - SURFACE.y / 2.0) * self.zoom + self.pan.y,
        )
    }

    fn screen_to_world(&self, p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let center = rect.center();
        Vec2::new(
            (p.x - center.x - self.pan.x) / self.zoom + SURFACE.x / 2.0,
            (p.y - center.y - self.pan.y) / self.zoom + SURFACE.y / 2.0,
        )
    }
}

/// [`Canvas`] implementation that maps the core's polygons through the
/// camera and paints them as filled convex shapes.
struct PainterCanvas<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
    camera: Camera,
}

impl PainterCanvas<'_> {
    fn color32(c: Rgba) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
    }
}

impl Canvas for PainterCanvas<'_> {
    fn fill_triangle(&mut self, vertices: [Vec2; 3], color: Rgba) {
        let pts = vertices
            .iter()
            .map(|&p| self.camera.world_to_screen(p, self.rect))
            .collect();
        self.painter.add(egui::Shape::convex_polygon(
            pts,
            Self::color32(color),
            egui::Stroke::NONE,
        ));
    }

    fn fill_quad(&mut self, vertices: [Vec2; 4], color: Rgba) {
        let pts = vertices
            .iter()
            .map(|&p| self.camera.world_to_screen(p, self.rect))
            .collect();
        self.painter.add(egui::Shape::convex_polygon(
            pts,
            Self::color32(color),
            egui::Stroke::NONE,
        ));
    }
}

/// Main application state for the interactive viewer.
///
/// The per-frame update is:
/// 1. Advance the simulation clock by the real frame delta while
///    `running` (pausing freezes the clock, so growth freezes too).
/// 2. Render the tree through a [`PainterCanvas`].
/// 3. Handle pan/zoom and the Regenerate/Pause controls.
pub struct Viewer {
    factory: TreeFactory,
    tree: Tree,

    rng: rand::rngs::ThreadRng,

    running: bool,
    camera: Camera,

    /// Simulation clock in time-units (milliseconds of run time).
    sim_time: f64,
    last_frame_time: Option<f64>,
}

impl Viewer {
    /// Creates a viewer with a freshly generated tree and a default
    /// camera framing the whole surface.
    pub fn new() -> Self {
        let mut rng = rng();
        // Default ranges are statically valid, so this cannot fail.
        let factory = TreeFactory::new(FactoryRanges::default(), SURFACE)
            .expect("default factory ranges are valid");
        let tree = factory.regenerate(0.0, &mut rng);

        Self {
            factory,
            tree,
            rng,
            running: true,
            camera: Camera {
                zoom: 1.0,
                pan: egui::vec2(0.0, 0.0),
            },
            sim_time: 0.0,
            last_frame_time: None,
        }
    }

    /// Discards the current tree and grows a new one from scratch.
    fn regenerate(&mut self) {
        self.tree = self.factory.regenerate(self.sim_time, &mut self.rng);
        log::info!(
            "regenerated tree: max depth {}, max length {:.0}, leaf color {:?}",
            self.tree.params.max_depth,
            self.tree.params.max_branch_length,
            self.tree.params.leaf_color,
        );
    }

    /// Builds the top panel UI (run controls, regenerate, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                if ui.button("🌱 Regenerate").clicked() {
                    self.regenerate();
                }

                ui.separator();
                ui.add(egui::Slider::new(&mut self.camera.zoom, 0.1..=10.0).text("Zoom"));
            });
        });
    }

    /// Builds the bottom status bar (sim time, node counts).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("t = {:.0}", self.sim_time));
                ui.separator();
                ui.label(format!("branches = {}", self.tree.branch_count()));
                ui.label(format!("leaves = {}", self.tree.leaf_count()));
                ui.label(format!("depth limit = {}", self.tree.params.max_depth));
            });
        });
    }

    /// Builds the central panel where the tree is drawn each frame.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            // Pan with drag.
            if response.dragged() {
                self.camera.pan += response.drag_delta();
            }

            // Zoom around the mouse cursor.
            let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                let pointer_screen = response.hover_pos().unwrap_or(rect.center());
                let world_before = self.camera.screen_to_world(pointer_screen, rect);

                let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
                self.camera.zoom = (self.camera.zoom * factor).clamp(0.1, 10.0);

                let screen_after = self.camera.world_to_screen(world_before, rect);
                self.camera.pan += pointer_screen - screen_after;
            }

            // One synchronous growth-and-draw pass for this frame.
            let mut canvas = PainterCanvas {
                painter: &painter,
                rect,
                camera: self.camera,
            };
            self.tree
                .render_frame(self.sim_time, &mut self.rng, &mut canvas);

            if self.running {
                ctx.request_repaint();
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that advances the clock and builds all panels.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        if let Some(last) = self.last_frame_time
            && self.running
        {
            self.sim_time += (now - last) * 1000.0;
        }
        self.last_frame_time = Some(now);

        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use tree_core::branch::BranchStage;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn world_to_screen_and_back_is_roundtrip() {
        let camera = Camera {
            zoom: 2.0,
            pan: egui::vec2(15.0, -7.0),
        };
        let rect = test_rect();

        let world_points = [
            Vec2::new(400.0, 600.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(-3.5, 8.25),
        ];

        let eps = 1e-3;
        for p in world_points {
            let screen = camera.world_to_screen(p, rect);
            let back = camera.screen_to_world(screen, rect);
            assert!(
                (back.x - p.x).abs() < eps && (back.y - p.y).abs() < eps,
                "roundtrip mismatch: p={:?}, back={:?}",
                p,
                back
            );
        }
    }

    #[test]
    fn root_anchor_maps_to_bottom_center_at_identity() {
        let camera = Camera {
            zoom: 1.0,
            pan: egui::vec2(0.0, 0.0),
        };
        let rect = test_rect();

        // The surface and the rect are the same size here, so the
        // bottom-center of the surface lands at the rect's bottom-center.
        let screen = camera.world_to_screen(Vec2::new(400.0, 600.0), rect);
        assert_eq!(screen, egui::pos2(400.0, 600.0));
    }

    #[test]
    fn regenerate_swaps_in_a_fresh_tree() {
        let mut viewer = Viewer::new();
        viewer.sim_time = 5_000.0;

        viewer.regenerate();

        assert_eq!(viewer.tree.branch_count(), 1);
        assert_eq!(viewer.tree.leaf_count(), 0);
        assert_eq!(viewer.tree.root.stage, BranchStage::Growing);
        assert_eq!(viewer.tree.root.spawn_time, 5_000.0);
        assert_eq!(viewer.tree.root.anchor, viewer.factory.root_anchor());
    }
}
