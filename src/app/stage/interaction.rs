use eframe::egui::{self, Ui};

use super::super::ViewModel;

impl ViewModel {
    /// Feeds egui's pointer state for the handle into the drag gesture.
    pub(in crate::app) fn handle_projector_drag(&mut self, ui: &Ui, response: &egui::Response) {
        let (press_x, latest_x, has_pointer) = ui.input(|input| {
            (
                input.pointer.press_origin().map(|pos| pos.x),
                input.pointer.latest_pos().map(|pos| pos.x),
                input.pointer.has_pointer(),
            )
        });

        if response.drag_started() {
            if let Some(start_x) = press_x.or(latest_x) {
                self.controller.on_drag_start(start_x);
            }
        }

        if !self.controller.is_dragging() {
            return;
        }

        if !has_pointer {
            self.controller.on_drag_lost();
            return;
        }

        let held = response.dragged() || response.drag_started();
        if held || response.drag_stopped() {
            if let Some(x) = latest_x {
                self.controller.on_drag_move(x);
            }
        }

        if response.drag_stopped() {
            self.controller.on_drag_end();
        } else if !held {
            self.controller.on_drag_lost();
        }
    }
}
