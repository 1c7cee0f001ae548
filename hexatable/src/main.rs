#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
// Tell OS to hide the console window when running.
// This attribute is only applied if the target OS is Windows.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod events;
mod loader;
mod ui_centralpanel;
mod ui_filedrop;
mod ui_menubar;
mod ui_popup;
mod ui_scrollarea;
mod ui_statusbar;

use crate::ui_popup::PopupType;
use app::ViewerApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        vsync: true,
        viewport: egui::ViewportBuilder::default()
            .with_resizable(true)
            .with_inner_size([1024.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Hexatable",
        options,
        Box::new(|_cc| Ok(Box::new(ViewerApp::default()))),
    )
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        #[cfg(debug_assertions)]
        {
            // Track FPS
            let dt = ctx.input(|i| i.stable_dt);
            let fps = if dt > 0.0 { 1.0 / dt } else { 0.0 };
            println!("FPS: {fps:.1}");
        }

        self.show_menu_bar(ctx);

        if self.error.borrow().is_some() {
            self.popup.active = true;
            self.popup.ptype = Some(PopupType::Error);
        }

        self.show_status_bar(ctx);

        self.handle_drag_and_drop(ctx);

        // If pop active - show it and return (don't display the hex bytes)
        if self.popup.active {
            self.show_popup(ctx);
            return;
        }

        // Show the table of the open session
        if let Some(session) = self.session.as_mut() {
            session.show_central_panel(ctx);
        } else {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label("Drop a file or use File > Open to start hexing!");
                });
            });
        }
    }
}
