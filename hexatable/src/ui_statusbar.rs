use crate::app::ViewerApp;
use eframe::egui;

impl ViewerApp {
    /// Show the bottom status bar with payload information of the open session.
    pub(crate) fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("statusbar").show(ctx, |ui| {
            ui.add_space(2.0);

            let Some(session) = self.session.as_ref() else {
                ui.label("No payload loaded");
                ui.add_space(2.0);
                return;
            };

            ui.horizontal(|ui| {
                ui.label(&session.name);
                ui.separator();
                ui.label(session.table.media_type());
                ui.separator();
                ui.label(format!("{} bytes", session.table.byte_len()));
                ui.separator();
                ui.label(format!("{} rows", session.table.row_count()));
            });

            ui.add_space(2.0);
        });
    }
}
