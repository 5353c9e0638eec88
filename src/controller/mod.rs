mod drag;

pub use drag::TRACK_LENGTH;

use drag::{DragGesture, DragSession, DragState};

use crate::screen::{DerivedMetrics, InputParameters, ParamField, Report, Resolution, compute};

/// Owns the editable parameters and keeps the derived metrics in step with
/// them. Every mutation swaps in a whole new `InputParameters` value and
/// recomputes before returning.
#[derive(Debug)]
pub struct Controller {
    params: InputParameters,
    metrics: DerivedMetrics,
    drag: DragState,
    gesture: DragGesture,
}

impl Controller {
    pub fn new(params: InputParameters) -> Self {
        let mut controller = Self {
            params,
            metrics: DerivedMetrics::default(),
            drag: DragState::default(),
            gesture: DragGesture::Idle,
        };
        controller.recompute();
        controller
    }

    pub fn params(&self) -> &InputParameters {
        &self.params
    }

    pub fn metrics(&self) -> &DerivedMetrics {
        &self.metrics
    }

    pub fn drag_position(&self) -> i32 {
        self.drag.position()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    pub fn report(&self) -> Report {
        Report::new(self.params, self.metrics, self.drag.position())
    }

    pub fn set_field(&mut self, field: ParamField, value: f64) {
        log::debug!("{} set to {value}", field.label());
        self.replace_params(self.params.with_field(field, value));
    }

    pub fn select_resolution(&mut self, name: &str) {
        let resolution = Resolution::select(name);
        log::debug!("resolution set to {}", resolution.label());
        self.replace_params(self.params.with_resolution(resolution));
    }

    /// Explicit recompute request from the "Apply" button.
    pub fn apply(&mut self) {
        self.recompute();
    }

    pub fn reset(&mut self) {
        log::debug!("restoring default parameters");
        self.gesture = DragGesture::Idle;
        self.drag = DragState::default();
        self.replace_params(InputParameters::default());
    }

    pub fn on_drag_start(&mut self, pointer_x: f32) {
        log::debug!(
            "drag started at x={pointer_x} from position {}",
            self.drag.position()
        );
        self.gesture = DragGesture::begin(self.drag, pointer_x);
    }

    pub fn on_drag_move(&mut self, pointer_x: f32) {
        let Some(drag) = self.gesture.track(pointer_x) else {
            return;
        };
        if drag == self.drag {
            return;
        }

        log::trace!("drag position {}", drag.position());
        self.drag = drag;
        // Dragging drives distance; typed distances do not move the handle.
        self.replace_params(self.params.with_field(ParamField::Distance, drag.distance()));
    }

    pub fn on_drag_end(&mut self) {
        if self.gesture.is_dragging() {
            log::debug!("drag ended at position {}", self.drag.position());
        }
        self.gesture = DragGesture::Idle;
    }

    /// Pointer tracking went away mid-gesture; the handle stays where it is.
    pub fn on_drag_lost(&mut self) {
        if self.gesture.is_dragging() {
            log::debug!("drag tracking lost at position {}", self.drag.position());
        }
        self.gesture = DragGesture::Idle;
    }

    pub fn begin_drag(&mut self, pointer_x: f32) -> DragSession<'_> {
        DragSession::new(self, pointer_x)
    }

    fn replace_params(&mut self, params: InputParameters) {
        self.params = params;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.metrics = compute(&self.params, &self.metrics);
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(InputParameters::default())
    }
}
