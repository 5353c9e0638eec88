use eframe::egui::{self, Ui};

use crate::controller::Controller;
use crate::screen::{ParamField, Resolution};
use crate::util::{format_field, parse_field_or_zero};

use super::super::ViewModel;

const INPUT_WIDTH: f32 = 180.0;

fn numeric_input(ui: &mut Ui, controller: &mut Controller, field: ParamField, buffer: &mut String) {
    ui.vertical(|ui| {
        ui.label(field.label());
        let response = ui.add(egui::TextEdit::singleline(buffer).desired_width(INPUT_WIDTH));

        if response.changed() {
            controller.set_field(field, parse_field_or_zero(buffer));
        }

        // Mirror the live value (drag updates, resets) whenever the user is
        // not typing into the box.
        if !response.has_focus() {
            let current = format_field(controller.params().get(field));
            if *buffer != current {
                *buffer = current;
            }
        }
    });
}

fn resolution_input(ui: &mut Ui, controller: &mut Controller) {
    ui.vertical(|ui| {
        ui.label("Resolution");
        let current = controller.params().resolution;
        let mut selected = current;
        egui::ComboBox::from_id_salt("resolution")
            .selected_text(selected.label())
            .width(INPUT_WIDTH)
            .show_ui(ui, |ui| {
                for preset in Resolution::PRESETS {
                    ui.selectable_value(&mut selected, preset, preset.label());
                }
            });

        if selected != current {
            controller.select_resolution(selected.name);
        }
    });
}

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        egui::Grid::new("parameter_inputs")
            .num_columns(2)
            .spacing([32.0, 12.0])
            .show(ui, |ui| {
                numeric_input(
                    ui,
                    &mut self.controller,
                    ParamField::Distance,
                    self.fields.get_mut(ParamField::Distance),
                );
                numeric_input(
                    ui,
                    &mut self.controller,
                    ParamField::Lumens,
                    self.fields.get_mut(ParamField::Lumens),
                );
                ui.end_row();

                resolution_input(ui, &mut self.controller);
                numeric_input(
                    ui,
                    &mut self.controller,
                    ParamField::ThrowRatio,
                    self.fields.get_mut(ParamField::ThrowRatio),
                );
                ui.end_row();
            });

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui
                .button("Apply")
                .on_hover_text("Recompute the results from the current inputs.")
                .clicked()
            {
                self.controller.apply();
            }
            if ui
                .button("Reset")
                .on_hover_text("Restore the default inputs and move the projector home.")
                .clicked()
            {
                self.controller.reset();
            }
        });
    }
}
