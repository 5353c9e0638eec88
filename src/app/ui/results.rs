use eframe::egui::{self, RichText, Ui};

use crate::screen::metric_rows;

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_results(&mut self, ui: &mut Ui) {
        let rows = metric_rows(self.controller.params(), self.controller.metrics());

        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("derived_metrics")
                .num_columns(2)
                .spacing([48.0, 10.0])
                .show(ui, |ui| {
                    for pair in rows.chunks(2) {
                        for row in pair {
                            ui.vertical(|ui| {
                                ui.label(RichText::new(row.label).strong());
                                ui.label(row.value.as_str());
                            });
                        }
                        ui.end_row();
                    }
                });
        });
    }
}
