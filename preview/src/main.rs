//! Desktop preview app for neotext-matrix
//!
//! Renders a chain of 8x8 tiles in a window with interactive controls.
//! The frame is read back in wiring order and placed on screen through the
//! same address mapping the hardware uses.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use neotext_matrix::{
    ChainBounds, CursorMode, Duration, FrameSink, Instant, MAX_LEDS, MatrixConfig, Orientation,
    OutputDriver, Rgb, ScrollConfig, ScrollDirection, TextMatrix, map_led,
};

/// Size of each LED square in pixels
const LED_SIZE: f32 = 14.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Extra gap between tiles
const TILE_GAP: f32 = 6.0;

const DEFAULT_TEXT: &str = "Hello!";

/// Driver that only keeps the frame in memory
struct ScreenDriver;

impl OutputDriver for ScreenDriver {
    fn write(&mut self, _colors: &[Rgb]) {}
}

type PreviewMatrix = TextMatrix<FrameSink<ScreenDriver, MAX_LEDS>>;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 420.0])
            .with_title("Text Matrix Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "neotext-matrix-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// The matrix instance
    matrix: PreviewMatrix,

    // UI state (tracked to detect changes and rebuild the matrix)
    text: String,
    tiles: u8,
    orientation: Orientation,
    wrap_cursor: bool,
    /// Text color (RGB)
    color: [u8; 3],
    /// Text intensity (0-100)
    intensity: u8,
    /// Background color (RGB)
    background: [u8; 3],
    /// Background intensity (0-100)
    background_intensity: u8,
    scroll_direction: ScrollDirection,
    scroll_period_ms: u64,
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether scrolling is running
    playing: bool,
}

impl PreviewApp {
    fn new() -> Self {
        let tiles = 4;
        let orientation = Orientation::Serpentine;
        let mut app = Self {
            matrix: Self::build_matrix(tiles, orientation, false, [0, 0, 0], 0),
            text: DEFAULT_TEXT.to_owned(),
            tiles,
            orientation,
            wrap_cursor: false,
            color: [255, 180, 100],
            intensity: 100,
            background: [0, 0, 40],
            background_intensity: 50,
            scroll_direction: ScrollDirection::Left,
            scroll_period_ms: 120,
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: false,
        };
        app.rebuild();
        app
    }

    fn build_matrix(
        tiles: u8,
        orientation: Orientation,
        wrap_cursor: bool,
        background: [u8; 3],
        background_intensity: u8,
    ) -> PreviewMatrix {
        let config = MatrixConfig {
            tiles,
            orientation,
            background: Rgb {
                r: background[0],
                g: background[1],
                b: background[2],
            },
            background_intensity,
            cursor_mode: if wrap_cursor {
                CursorMode::Wrap
            } else {
                CursorMode::Unbounded
            },
        };
        let len = ChainBounds::new(tiles).num_pixels();
        TextMatrix::new(FrameSink::new(ScreenDriver, len), &config)
    }

    /// Recreate the matrix from the UI state and write the text again
    fn rebuild(&mut self) {
        self.matrix = Self::build_matrix(
            self.tiles,
            self.orientation,
            self.wrap_cursor,
            self.background,
            self.background_intensity,
        );
        self.write_text();
        if self.playing {
            self.start_scroll();
        }
    }

    fn write_text(&mut self) {
        let color = Rgb {
            r: self.color[0],
            g: self.color[1],
            b: self.color[2],
        };
        self.matrix.write(&self.text, color, self.intensity);
    }

    fn start_scroll(&mut self) {
        let config = ScrollConfig {
            direction: self.scroll_direction,
            period: Duration::from_millis(self.scroll_period_ms),
        };
        self.matrix
            .start_scroll(&config, Instant::from_millis(self.t_ms));
    }

    /// Toggle scrolling
    fn toggle_playing(&mut self) {
        self.playing = !self.playing;
        if self.playing {
            self.start_scroll();
        } else {
            self.matrix.stop_scroll();
        }
    }

    /// Update synthetic time based on wall clock
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        #[allow(clippy::cast_possible_truncation)]
        let delta_ms = delta.as_millis() as u64;
        self.t_ms = self.t_ms.wrapping_add(delta_ms);
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        let _ = self.matrix.tick(Instant::from_millis(self.t_ms));

        // Request continuous repaint for animation
        ctx.request_repaint();

        let mut needs_rebuild = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <TextControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Text:");
                        needs_rebuild |= ui.text_edit_singleline(&mut self.text).changed();
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Color:");
                        needs_rebuild |= ui.color_edit_button_srgb(&mut self.color).changed();
                        ui.label("Intensity:");
                        needs_rebuild |= ui
                            .add(egui::Slider::new(&mut self.intensity, 0..=100))
                            .changed();
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Background:");
                        needs_rebuild |=
                            ui.color_edit_button_srgb(&mut self.background).changed();
                        ui.label("Intensity:");
                        needs_rebuild |= ui
                            .add(egui::Slider::new(&mut self.background_intensity, 0..=100))
                            .changed();
                    });
                });
                // </TextControls>
                ui.add_space(16.0);
                // <ChainControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Tiles:");
                        needs_rebuild |= ui
                            .add(egui::Slider::new(&mut self.tiles, 1..=4))
                            .changed();
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Wiring:");
                        let old_orientation = self.orientation;
                        ui.selectable_value(
                            &mut self.orientation,
                            Orientation::Line,
                            Orientation::Line.as_str(),
                        );
                        ui.selectable_value(
                            &mut self.orientation,
                            Orientation::Serpentine,
                            Orientation::Serpentine.as_str(),
                        );
                        needs_rebuild |= old_orientation != self.orientation;
                    });

                    ui.add_space(4.0);

                    needs_rebuild |= ui
                        .checkbox(&mut self.wrap_cursor, "Wrap cursor")
                        .changed();
                });
                // </ChainControls>
                ui.add_space(16.0);
                // <ScrollControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui
                            .button(if self.playing {
                                "⏸ Stop"
                            } else {
                                "▶ Scroll"
                            })
                            .clicked()
                        {
                            self.toggle_playing();
                        }
                        if ui.button("⏮ Reset").clicked() {
                            needs_rebuild = true;
                        }
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Direction:");
                        let old_direction = self.scroll_direction;
                        ui.selectable_value(
                            &mut self.scroll_direction,
                            ScrollDirection::Left,
                            ScrollDirection::Left.as_str(),
                        );
                        ui.selectable_value(
                            &mut self.scroll_direction,
                            ScrollDirection::Right,
                            ScrollDirection::Right.as_str(),
                        );
                        if old_direction != self.scroll_direction && self.playing {
                            self.start_scroll();
                        }
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Period (ms):");
                        if ui
                            .add(egui::Slider::new(&mut self.scroll_period_ms, 20..=1000))
                            .changed()
                            && self.playing
                        {
                            self.start_scroll();
                        }
                    });
                });
                // </ScrollControls>
            });

            ui.add_space(8.0);
            ui.label(format!(
                "Cursor: {}   Lit: {}",
                self.matrix.cursor(),
                self.matrix.canvas().len()
            ));
            ui.add_space(8.0);

            // === LED Display ===
            let bounds = self.matrix.bounds();
            let orientation = self.matrix.orientation();
            let frame = self.matrix.sink().frame();
            let led_pitch = LED_SIZE + LED_GAP;

            let width = f32::from(bounds.visible_width()) * led_pitch
                + f32::from(bounds.tiles()) * TILE_GAP;
            let height = 8.0 * led_pitch;

            let (response, painter) =
                ui.allocate_painter(egui::vec2(width, height), egui::Sense::hover());
            let origin = response.rect.min;

            for x in 0..bounds.visible_width() {
                let tile = x / 8;
                for y in 0..8u8 {
                    let index = map_led(x, y, orientation);
                    let Some(pixel) = frame.get(index) else {
                        continue;
                    };

                    let left = origin.x + f32::from(x) * led_pitch + f32::from(tile) * TILE_GAP;
                    let top = origin.y + f32::from(y) * led_pitch;
                    let rect = egui::Rect::from_min_size(
                        egui::pos2(left, top),
                        egui::vec2(LED_SIZE, LED_SIZE),
                    );
                    let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                    painter.rect_filled(rect, 3.0, color);
                }
            }
        });

        if needs_rebuild {
            self.rebuild();
        }
    }
}
