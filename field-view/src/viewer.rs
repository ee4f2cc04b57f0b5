//! Ambient particle field viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the simulation state
//! ([`FieldSim`], [`FrameClock`]) and implements [`eframe::App`] to
//! paint the drifting field and a small control strip each frame.

use eframe::App;
use field_core::{bounds::Bounds, clock::FrameClock, config::Config, sim::FieldSim};
use glam::Vec2;

/// Background fill behind the field.
const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0x08, 0x0c, 0x14);
/// Hue shared by particles and their connecting lines; each is faded
/// by its own opacity when painted.
const PARTICLE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x63, 0xb3, 0xed);

/// Field bounds used until the first frame reports the real panel size.
const INITIAL_SIZE: Vec2 = Vec2::new(1280.0, 720.0);

/// Main application state for the viewer.
///
/// [`Viewer`] glues together:
/// - The simulation core: [`FieldSim`] (particles, links, bounds, config).
/// - Frame pacing: [`FrameClock`] fed with egui time.
/// - eframe/egui callbacks for drawing and the control strip.
///
/// The per-frame update is:
/// 1. Forward the central panel's current size to the simulation.
/// 2. If `running` and the clock says a step is due, call [`FieldSim::step`].
/// 3. Paint the background, the links, and the particles, and request
///    the next repaint so the loop stays vsync-aligned.
pub struct Viewer {
    sim: FieldSim,
    clock: FrameClock,

    rng: rand::rngs::ThreadRng,

    running: bool,

    /// Last size forwarded to [`FieldSim::resize`].
    viewport: Vec2,
}

impl Viewer {
    /// Creates a viewer with a freshly spawned default field.
    ///
    /// The field starts at a placeholder size and snaps to the real
    /// panel size on the first frame; the default [`Config`] carries
    /// the spawn ranges and link falloff. The clock interval starts at
    /// zero, i.e. one simulation step per display refresh.
    pub fn new() -> Self {
        let mut rng = rand::rng();
        let sim = FieldSim::new(
            Config::default(),
            Bounds::new(INITIAL_SIZE.x, INITIAL_SIZE.y),
            &mut rng,
        );

        Self {
            sim,
            clock: FrameClock::new(0.0),
            rng,
            running: true,
            viewport: INITIAL_SIZE,
        }
    }

    /// Forwards a viewport size change to the simulation.
    ///
    /// Positions are left to the simulation's lazy boundary correction;
    /// only the bounds change here.
    fn apply_viewport(&mut self, size: egui::Vec2) {
        let size = Vec2::new(size.x, size.y);
        if size != self.viewport {
            self.viewport = size;
            self.sim.resize(size.x, size.y);
        }
    }

    /// Maps a field position to screen-space.
    ///
    /// The field uses a top-left origin at one unit per pixel, so this
    /// is a plain translation by the panel rect's origin.
    fn field_to_screen(p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        egui::pos2(rect.min.x + p.x, rect.min.y + p.y)
    }

    /// Helper to draw a labeled `usize` [`egui::DragValue`].
    fn labeled_drag_usize(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut usize,
        range: std::ops::RangeInclusive<usize>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top control strip (run/step/respawn, pacing, field knobs).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                if ui.button("Step").clicked() {
                    self.sim.step();
                }

                if ui.button("Respawn").clicked() {
                    self.sim.respawn(&mut self.rng);
                }

                ui.separator();

                let mut interval = self.clock.interval();
                ui.add(
                    egui::DragValue::new(&mut interval)
                        .prefix("dt target = ")
                        .range(0.0..=1.0)
                        .speed(0.01),
                );
                self.clock.set_interval(interval);

                ui.separator();

                // Changing the count respawns the field immediately.
                let mut count = self.sim.config().count;
                Self::labeled_drag_usize(ui, "particles:", &mut count, 2..=500, 1.0);
                if count != self.sim.config().count {
                    self.sim.config_mut().count = count;
                    self.sim.respawn(&mut self.rng);
                }

                let cfg = self.sim.config_mut();
                Self::labeled_drag_f32(ui, "link radius:", &mut cfg.link_radius, 0.0..=400.0, 1.0);
            });
        });
    }

    /// Builds the bottom status bar (step delta, link and particle counts).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("dt last = {:.3} s", self.clock.last_delta()));
                ui.separator();
                ui.label(format!("links = {}", self.sim.links().len()));
                ui.label(format!("particles = {}", self.sim.particles().len()));
            });
        });
    }

    /// Builds the central panel where the field is stepped and painted.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;
                let painter = ui.painter_at(rect);

                painter.rect_filled(rect, egui::CornerRadius::ZERO, BACKGROUND);

                self.apply_viewport(rect.size());

                // Advance the field when the clock says a step is due;
                // the repaint request keeps the loop vsync-aligned and
                // pauses with the window.
                if self.running {
                    let now = ctx.input(|i| i.time);
                    if self.clock.tick(now) {
                        self.sim.step();
                    }
                    ctx.request_repaint();
                }

                // Links first so particles draw on top of them.
                let link_width = self.sim.config().link_width;
                for link in self.sim.links() {
                    let a = Self::field_to_screen(self.sim.particles()[link.a].pos, rect);
                    let b = Self::field_to_screen(self.sim.particles()[link.b].pos, rect);
                    painter.line_segment(
                        [a, b],
                        egui::Stroke::new(link_width, PARTICLE_COLOR.gamma_multiply(link.alpha)),
                    );
                }

                for p in self.sim.particles() {
                    painter.circle_filled(
                        Self::field_to_screen(p.pos, rect),
                        p.radius,
                        PARTICLE_COLOR.gamma_multiply(p.opacity),
                    );
                }
            });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}
