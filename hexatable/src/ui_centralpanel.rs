use crate::app::{ViewSession, colors};
use crate::ui_scrollarea::StepScroll;
use eframe::egui;
use hexatablelib::{LINE_WIDTH, Row};
use std::ops::Range;

/// Fixed size of one hex cell
const HEX_CELL_SIZE: egui::Vec2 = egui::Vec2::new(21.0, 18.0);

impl ViewSession {
    /// Displays the central panel of the UI with the hex/ASCII table content.
    /// Only the rows inside the scroll window are materialized as widgets;
    /// the table model itself is already built.
    pub(crate) fn show_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let total_rows = self.table.row_count();

            // Get row height in pixels (depends on font size)
            let font_height = ui.text_style_height(&egui::TextStyle::Monospace);

            // Scroll state is keyed by the table identity
            StepScroll::new(egui::Id::new(self.table.id()), font_height).show_rows(
                ui,
                total_rows,
                |ui, row_range| {
                    self.draw_visible_rows(ui, row_range);
                },
            );
        });
    }

    fn draw_visible_rows(&mut self, ui: &mut egui::Ui, row_range: Range<usize>) {
        // The hover recorded on the previous frame drives this frame's
        // highlight; this frame's hover is collected into a fresh slot
        let hovered = self.hovered.take();
        let mut next_hover = None;

        for row in &self.table.rows()[row_range] {
            draw_row(ui, row, hovered, &mut next_hover);
        }

        self.hovered = next_hover;
    }
}

/// Paint one fixed-size hex cell and return its response for hover tracking.
/// Cells are display-only, so they sense nothing beyond hover.
fn hex_cell(ui: &mut egui::Ui, text: &str, text_color: egui::Color32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(HEX_CELL_SIZE, egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::monospace(12.0),
            text_color,
        );
    }

    response
}

fn draw_row(ui: &mut egui::Ui, row: &Row, hovered: Option<usize>, next_hover: &mut Option<usize>) {
    ui.horizontal(|ui| {
        // Display address (fixed width, monospaced)
        ui.monospace(row.label());

        // Add space before hex block
        ui.add_space(16.0);

        // Hex bytes representation row
        for cell in row.hex_cells() {
            // Remove spacing between cells
            ui.spacing_mut().item_spacing.x = 0.0;

            // Change color of every other byte for better readability
            let text_color = if cell.offset() % 2 == 0 {
                colors::GRAY_210
            } else {
                colors::GRAY_160
            };

            let response = hex_cell(ui, cell.text(), text_color);

            if response.hovered() {
                *next_hover = Some(cell.offset());
            }

            // Highlight the hovered byte in both projections
            if hovered == Some(cell.offset()) {
                ui.painter()
                    .rect_filled(response.rect, 0.0, colors::LIGHT_BLUE);
            }

            // Add space every 8 bytes
            if (cell.offset() - row.offset() + 1).is_multiple_of(8) {
                ui.add_space(5.0);
            }
        }

        // Pad the hex block of a short final row so the ASCII block stays aligned
        for position in row.len()..LINE_WIDTH {
            ui.add_space(HEX_CELL_SIZE.x);
            if (position + 1).is_multiple_of(8) {
                ui.add_space(5.0);
            }
        }

        // Add space before ASCII row
        ui.add_space(16.0);

        // ASCII representation row
        for cell in row.ascii_cells() {
            // Spacing between ascii labels
            ui.spacing_mut().item_spacing.x = 1.0;

            let label = ui.add(
                egui::Label::new(
                    egui::RichText::new(cell.text())
                        .color(colors::GRAY_160)
                        .monospace(),
                )
                .selectable(false),
            );

            if label.hovered() {
                *next_hover = Some(cell.offset());
            }

            if hovered == Some(cell.offset()) {
                ui.painter().rect_filled(label.rect, 0.0, colors::LIGHT_BLUE);
            }
        }
    });
}
