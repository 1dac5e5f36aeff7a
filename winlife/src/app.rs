// app.rs - eframe shell: timer, input dispatch, rendering, resize glue

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Rect, Vec2};
use life_engine::{
    cells_for_client, hit_cell, quantize, FrameSize, Grid, PaintDrag, RectPx, ResizeHandle,
    CELL_FILL, CELL_SIZE,
};

/// Startup grid is 20x20 cells.
const INITIAL_CELLS: usize = 20;
/// Client size that exactly fits the startup grid (20 * 12 - 2).
pub const INITIAL_CLIENT: f32 = (INITIAL_CELLS as i32 * CELL_SIZE - 2) as f32;

const STEP_INTERVAL: Duration = Duration::from_millis(200);

const BACKGROUND: Color32 = Color32::LIGHT_GRAY;
const LIVE: Color32 = Color32::BLACK;
const DEAD: Color32 = Color32::WHITE;

pub struct LifeApp {
    grid: Grid,
    running: bool,
    last_step: Instant,
    drag: Option<PaintDrag>,
    // Window chrome size, captured at first show. eframe reports the
    // client size directly, so this stays zero; kept for the quantizer
    // contract.
    frame: FrameSize,
    last_client: Option<(i32, i32)>,
}

impl Default for LifeApp {
    fn default() -> Self {
        Self {
            grid: Grid::new(INITIAL_CELLS, INITIAL_CELLS),
            running: false,
            last_step: Instant::now(),
            drag: None,
            frame: FrameSize::default(),
            last_client: None,
        }
    }
}

struct InputSnapshot {
    pressed: bool,
    released: bool,
    pos: Option<egui::Pos2>,
    randomize: bool,
    clear: bool,
}

impl LifeApp {
    /// There is no pre-commit hook into the native resize drag, so the
    /// shell corrects after the fact: snap the observed client size to
    /// whole cells, push the corrected size back to the window, and
    /// rebuild the grid. Snapping is idempotent, so this settles in one
    /// correction.
    fn handle_resize(&mut self, ctx: &egui::Context) {
        let client = ctx.screen_rect().size();
        let (cw, ch) = (client.x.round() as i32, client.y.round() as i32);
        if self.last_client == Some((cw, ch)) {
            return;
        }

        let mut rect = RectPx {
            left: 0,
            top: 0,
            right: cw + self.frame.width,
            bottom: ch + self.frame.height,
        };
        quantize(ResizeHandle::BottomRight, &mut rect, self.frame);
        let snapped = (
            rect.right - rect.left - self.frame.width,
            rect.bottom - rect.top - self.frame.height,
        );
        if snapped != (cw, ch) {
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(Vec2::new(
                snapped.0 as f32,
                snapped.1 as f32,
            )));
        }

        let (w, h) = (cells_for_client(cw), cells_for_client(ch));
        if (w, h) != (self.grid.cell_width(), self.grid.cell_height()) {
            log::debug!("client {cw}x{ch} -> grid {w}x{h}");
            self.grid.resize(w, h);
        }
        self.last_client = Some((cw, ch));
    }

    fn handle_pointer(&mut self, input: &InputSnapshot, origin: egui::Pos2) {
        if input.pressed {
            if let Some(pos) = input.pos {
                let local = pos - origin;
                if let Some((x, y)) = hit_cell(local.x as i32, local.y as i32, &self.grid) {
                    self.grid.toggle(x, y);
                }
                self.drag = Some(PaintDrag::begin(local.x, local.y));
            }
        }
        if let (Some(drag), Some(pos)) = (self.drag.as_mut(), input.pos) {
            let local = pos - origin;
            drag.move_to(local.x, local.y, &mut self.grid);
        }
        if input.released {
            self.drag = None;
        }
    }

    fn draw_grid(&self, painter: &egui::Painter, origin: egui::Pos2) {
        for y in 0..self.grid.cell_height() {
            for x in 0..self.grid.cell_width() {
                let min = origin
                    + Vec2::new(
                        (x as i32 * CELL_SIZE) as f32,
                        (y as i32 * CELL_SIZE) as f32,
                    );
                let rect = Rect::from_min_size(min, Vec2::splat(CELL_FILL as f32));
                let color = if self.grid.get(x, y) { LIVE } else { DEAD };
                painter.rect_filled(rect, 0.0, color);
            }
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_resize(ctx);

        if self.running && self.last_step.elapsed() >= STEP_INTERVAL {
            self.grid.step();
            self.last_step = Instant::now();
        }

        let input = ctx.input(|i| InputSnapshot {
            pressed: i.pointer.primary_pressed(),
            released: i.pointer.primary_released(),
            pos: i.pointer.interact_pos(),
            randomize: i.key_pressed(egui::Key::R),
            clear: i.key_pressed(egui::Key::C),
        });

        if input.randomize {
            self.grid.randomize(0.2);
        }
        if input.clear {
            self.grid.clear();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| {
                let size = ui.available_size();
                let (response, painter) =
                    ui.allocate_painter(size, egui::Sense::click_and_drag());
                let origin = response.rect.min;

                if response.secondary_clicked() {
                    self.running = !self.running;
                    if self.running {
                        self.last_step = Instant::now();
                    }
                    log::debug!("simulation {}", if self.running { "on" } else { "off" });
                }

                self.handle_pointer(&input, origin);
                self.draw_grid(&painter, origin);
            });

        if self.running {
            ctx.request_repaint();
        }
    }
}
