use eframe::egui::Context;

use crate::controller::Controller;
use crate::screen::ParamField;
use crate::util::format_field;

mod render_utils;
mod stage;
mod ui;

pub struct ProjectorScreenApp {
    model: ViewModel,
}

struct ViewModel {
    controller: Controller,
    fields: FieldBuffers,
}

/// Raw text behind the numeric inputs, kept between frames so partially
/// typed values survive until they parse.
struct FieldBuffers {
    distance: String,
    lumens: String,
    throw_ratio: String,
}

impl FieldBuffers {
    fn from_controller(controller: &Controller) -> Self {
        let params = controller.params();
        Self {
            distance: format_field(params.distance),
            lumens: format_field(params.lumens),
            throw_ratio: format_field(params.throw_ratio),
        }
    }

    fn get_mut(&mut self, field: ParamField) -> &mut String {
        match field {
            ParamField::Distance => &mut self.distance,
            ParamField::Lumens => &mut self.lumens,
            ParamField::ThrowRatio => &mut self.throw_ratio,
        }
    }
}

impl ProjectorScreenApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, controller: Controller) -> Self {
        Self {
            model: ViewModel::new(controller),
        }
    }
}

impl eframe::App for ProjectorScreenApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.model.show(ctx);
    }
}

impl Drop for ProjectorScreenApp {
    fn drop(&mut self) {
        self.model.controller.on_drag_end();
    }
}
