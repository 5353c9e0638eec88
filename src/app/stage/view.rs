use eframe::egui::{CursorIcon, Sense, Ui, vec2};

use super::super::ViewModel;
use super::super::render_utils::{
    STAGE_HEIGHT, draw_beam, draw_projector, draw_stage_background, draw_track_labels,
    projector_rect, screen_strip, stage_width,
};

impl ViewModel {
    pub(in crate::app) fn draw_stage(&mut self, ui: &mut Ui) {
        let width = stage_width(ui.available_width());
        let (rect, _) = ui.allocate_exact_size(vec2(width, STAGE_HEIGHT), Sense::hover());

        let handle_id = ui.id().with("projector_handle");
        let handle = projector_rect(rect, self.controller.drag_position());
        let response = ui.interact(handle, handle_id, Sense::drag());
        self.handle_projector_drag(ui, &response);

        let painter = ui.painter_at(rect);
        let handle = projector_rect(rect, self.controller.drag_position());
        let dragging = self.controller.is_dragging();

        draw_stage_background(&painter, rect);
        draw_beam(&painter, handle, screen_strip(rect));
        draw_projector(&painter, handle, dragging || response.hovered());
        draw_track_labels(&painter, rect, self.controller.params().distance);

        if dragging {
            ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
        } else if response.hovered() {
            ui.ctx().set_cursor_icon(CursorIcon::Grab);
        }
    }
}
