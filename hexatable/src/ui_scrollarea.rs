use eframe::egui;

/// Scroll area with discrete row steps: the mouse wheel moves the view by
/// whole rows, so a row is never partially clipped at the top edge.
pub struct StepScroll {
    id: egui::Id,
    row_height: f32,
}

impl StepScroll {
    pub const fn new(id: egui::Id, row_height: f32) -> Self {
        Self { id, row_height }
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn show_rows<R>(
        self,
        ui: &mut egui::Ui,
        total_rows: usize,
        add_contents: impl FnOnce(&mut egui::Ui, std::ops::Range<usize>) -> R,
    ) -> R {
        // Allocate the full available space
        let (rect, _response) = ui.allocate_at_least(ui.available_size(), egui::Sense::click());

        let mut top_row: usize = ui.data_mut(|d| *d.get_temp_mut_or_default(self.id));

        // One wheel notch moves one row; ignore sub-threshold drift
        let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll_delta.abs() > 0.4 {
            top_row = if scroll_delta > 0.0 {
                top_row.saturating_sub(1)
            } else {
                top_row.saturating_add(1)
            };
        }

        // Full row pitch includes the vertical item spacing; the extra margin
        // keeps the last visible row from flickering on resize
        let row_pitch = self.row_height + ui.spacing().item_spacing.y + 2.5;
        let visible_rows = (rect.height() / row_pitch).floor() as usize;

        // Allow 1 empty row at the bottom
        let max_top_row = total_rows.saturating_sub(visible_rows.saturating_sub(1));
        top_row = top_row.min(max_top_row);

        ui.data_mut(|d| d.insert_temp(self.id, top_row));

        self.draw_scrollbar(ui, rect, top_row, total_rows, visible_rows);

        // Render content
        let mut child_ui = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(rect)
                .layout(egui::Layout::top_down(egui::Align::Min)),
        );
        child_ui.set_clip_rect(rect);

        let row_range = top_row..(top_row + visible_rows).min(total_rows);
        add_contents(&mut child_ui, row_range)
    }

    /// Scrollbar with a draggable thumb, drawn over the right edge of the area
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    fn draw_scrollbar(
        &self,
        ui: &egui::Ui,
        rect: egui::Rect,
        top_row: usize,
        total_rows: usize,
        visible_rows: usize,
    ) {
        if total_rows <= visible_rows {
            return;
        }

        let track = egui::Rect::from_min_max(
            egui::pos2(rect.right() - 12.0, rect.top() + 4.0),
            egui::pos2(rect.right() - 4.0, rect.bottom() - 12.0),
        );

        let max_top_row = total_rows.saturating_sub(visible_rows);

        // Thumb height follows the visible fraction, with a floor so it
        // stays grabbable for large payloads
        let thumb_height = (visible_rows as f32 / total_rows as f32 * track.height()).max(20.0);
        let travel = track.height() - thumb_height;
        let thumb_top = track.top() + travel * (top_row as f32 / max_top_row as f32);

        // Click or drag on the track jumps the view, with the thumb
        // centered on the pointer
        let response = ui.interact(track, self.id.with("thumb"), egui::Sense::click_and_drag());
        if (response.clicked() || response.dragged())
            && let Some(pointer) = ui.input(|i| i.pointer.hover_pos())
        {
            let t = ((pointer.y - track.top() - thumb_height / 2.0) / travel).clamp(0.0, 1.0);
            let new_row = (t * max_top_row as f32).round() as usize;
            ui.data_mut(|d| d.insert_temp(self.id, new_row));
        }

        ui.painter()
            .rect_filled(track, 2.0, ui.visuals().extreme_bg_color);

        let thumb = egui::Rect::from_min_size(
            egui::pos2(track.left(), thumb_top),
            egui::vec2(track.width(), thumb_height),
        );
        let thumb_color = if response.dragged() {
            ui.visuals().widgets.active.bg_fill
        } else if response.hovered() {
            ui.visuals().widgets.hovered.bg_fill
        } else {
            ui.visuals().widgets.inactive.bg_fill
        };

        ui.painter().rect_filled(thumb, 2.0, thumb_color);
    }
}
