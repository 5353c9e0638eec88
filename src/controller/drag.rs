use super::Controller;

/// Travel of the projector handle along the stage, in logical pixels.
pub const TRACK_LENGTH: i32 = 200;
pub const MIN_DRAG_DISTANCE: f64 = 1.0;
pub const MAX_DRAG_DISTANCE: f64 = 10.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragState {
    position: i32,
}

impl DragState {
    pub fn position(self) -> i32 {
        self.position
    }

    /// Linear map of the track onto 1..=10 meters.
    pub fn distance(self) -> f64 {
        MIN_DRAG_DISTANCE
            + (f64::from(self.position) / f64::from(TRACK_LENGTH))
                * (MAX_DRAG_DISTANCE - MIN_DRAG_DISTANCE)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragGesture {
    #[default]
    Idle,
    Dragging {
        start_x: f32,
        start_position: i32,
    },
}

impl DragGesture {
    pub fn begin(drag: DragState, pointer_x: f32) -> Self {
        Self::Dragging {
            start_x: pointer_x,
            start_position: drag.position,
        }
    }

    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Where the handle sits for `pointer_x`, or `None` outside a gesture.
    pub fn track(self, pointer_x: f32) -> Option<DragState> {
        let Self::Dragging {
            start_x,
            start_position,
        } = self
        else {
            return None;
        };

        if !pointer_x.is_finite() {
            return None;
        }

        let delta = pointer_x - start_x;
        let position = (start_position as f32 + delta)
            .round()
            .clamp(0.0, TRACK_LENGTH as f32) as i32;
        Some(DragState { position })
    }
}

/// A drag gesture bound to a scope: the gesture ends when the session drops.
pub struct DragSession<'a> {
    controller: &'a mut Controller,
}

impl<'a> DragSession<'a> {
    pub(super) fn new(controller: &'a mut Controller, pointer_x: f32) -> Self {
        controller.on_drag_start(pointer_x);
        Self { controller }
    }

    pub fn move_to(&mut self, pointer_x: f32) -> &mut Self {
        self.controller.on_drag_move(pointer_x);
        self
    }

    pub fn position(&self) -> i32 {
        self.controller.drag_position()
    }
}

impl Drop for DragSession<'_> {
    fn drop(&mut self) {
        self.controller.on_drag_end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(position: i32) -> DragState {
        DragState { position }
    }

    #[test]
    fn test_distance_mapping_endpoints() {
        assert_eq!(at(0).distance(), 1.0);
        assert_eq!(at(100).distance(), 5.5);
        assert_eq!(at(200).distance(), 10.0);
    }

    #[test]
    fn test_idle_gesture_does_not_track() {
        assert_eq!(DragGesture::Idle.track(50.0), None);
        assert!(!DragGesture::default().is_dragging());
    }

    #[test]
    fn test_track_is_relative_to_gesture_start() {
        let gesture = DragGesture::begin(at(60), 300.0);
        assert!(gesture.is_dragging());
        assert_eq!(gesture.track(300.0), Some(at(60)));
        assert_eq!(gesture.track(340.0), Some(at(100)));
        assert_eq!(gesture.track(250.0), Some(at(10)));
    }

    #[test]
    fn test_track_saturates_at_both_ends() {
        let gesture = DragGesture::begin(at(150), 0.0);
        assert_eq!(gesture.track(10_000.0), Some(at(TRACK_LENGTH)));
        assert_eq!(gesture.track(-10_000.0), Some(at(0)));
        assert_eq!(gesture.track(f32::NAN), None);
    }

    #[test]
    fn test_position_stays_in_range_for_any_move_sequence() {
        let gesture = DragGesture::begin(at(0), 500.0);
        let mut pointer = 500.0_f32;
        for step in [37.0, -410.0, 512.5, 3.25, -0.5, 199.0, -1e6, 1e6, 12.0] {
            pointer += step;
            let state = gesture.track(pointer).unwrap();
            assert!((0..=TRACK_LENGTH).contains(&state.position()));
        }
    }

    #[test]
    fn test_fractional_pointer_rounds_to_whole_pixels() {
        let gesture = DragGesture::begin(at(10), 0.0);
        assert_eq!(gesture.track(4.4), Some(at(14)));
        assert_eq!(gesture.track(4.6), Some(at(15)));
    }
}
