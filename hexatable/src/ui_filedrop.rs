use crate::app::ViewerApp;
use eframe::egui;

impl ViewerApp {
    /// Handle drag and drop events:
    /// - If a file is dropped, open it as the current session.
    /// - If a file is dragged over the central panel, display a message.
    /// - If the popup is shown, do not handle drag and drop events.
    pub(crate) fn handle_drag_and_drop(&mut self, ctx: &egui::Context) {
        // Return if the popup is shown
        if self.popup.active {
            return;
        }

        // Overwrite the central panel with a message when file is dragged over
        let hovering_files = ctx.input(|i| i.raw.hovered_files.clone());
        if !hovering_files.is_empty() {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.heading("Drop file to inspect");
                });
            });
        }

        // There is a single view, so when several files are dropped at once
        // the last one wins
        if ctx.input(|i| !i.raw.dropped_files.is_empty()) {
            let dropped = ctx.input(|i| i.raw.dropped_files.clone());
            if let Some(path) = dropped.into_iter().filter_map(|f| f.path).next_back() {
                self.load_file(&path);
            }
        }
    }
}
