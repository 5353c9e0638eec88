use eframe::egui::{self, Align, Context, Layout};

use crate::controller::Controller;

use super::super::{FieldBuffers, ViewModel};

impl ViewModel {
    pub(in crate::app) fn new(controller: Controller) -> Self {
        Self {
            fields: FieldBuffers::from_controller(&controller),
            controller,
        }
    }

    pub(in crate::app) fn show(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Projector-Screen Interface");
                    ui.separator();
                    ui.label(format!(
                        "resolution: {}",
                        self.controller.params().resolution.label()
                    ));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(format!("handle: {} px", self.controller.drag_position()));
                    });
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.draw_stage(ui);
                ui.add_space(16.0);
                self.draw_controls(ui);
                ui.add_space(16.0);
                self.draw_results(ui);
            });
        });
    }
}
