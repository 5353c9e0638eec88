use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2, vec2};

use crate::controller::TRACK_LENGTH;

pub(super) const STAGE_HEIGHT: f32 = 240.0;
pub(super) const PROJECTOR_SIZE: f32 = 64.0;

const STAGE_FILL: Color32 = Color32::from_rgb(229, 231, 235);
const SCREEN_FILL: Color32 = Color32::from_rgb(209, 213, 219);
const PROJECTOR_FILL: Color32 = Color32::from_rgb(59, 130, 246);
const PROJECTOR_ACTIVE_FILL: Color32 = Color32::from_rgb(37, 99, 235);
const LABEL_COLOR: Color32 = Color32::from_rgb(75, 85, 99);

/// The stage must always fit the full handle travel plus the screen strip.
pub(super) fn stage_width(available: f32) -> f32 {
    let minimum = (TRACK_LENGTH as f32 + PROJECTOR_SIZE) * 4.0 / 3.0;
    available.max(minimum)
}

/// Right quarter of the stage.
pub(super) fn screen_strip(stage: Rect) -> Rect {
    Rect::from_min_max(
        Pos2::new(stage.right() - stage.width() * 0.25, stage.top()),
        stage.max,
    )
}

/// Handle box offset from the stage's left edge by the drag position.
pub(super) fn projector_rect(stage: Rect, position: i32) -> Rect {
    Rect::from_min_size(
        Pos2::new(
            stage.left() + position as f32,
            stage.center().y - PROJECTOR_SIZE * 0.5,
        ),
        Vec2::splat(PROJECTOR_SIZE),
    )
}

pub(super) fn draw_stage_background(painter: &Painter, stage: Rect) {
    painter.rect_filled(stage, 8.0, STAGE_FILL);
    painter.rect_filled(screen_strip(stage), 0.0, SCREEN_FILL);
}

pub(super) fn draw_beam(painter: &Painter, projector: Rect, screen: Rect) {
    let inset = screen.height() * 0.18;
    let points = vec![
        projector.right_center() + vec2(-4.0, -6.0),
        Pos2::new(screen.left(), screen.top() + inset),
        Pos2::new(screen.left(), screen.bottom() - inset),
        projector.right_center() + vec2(-4.0, 6.0),
    ];
    painter.add(Shape::convex_polygon(
        points,
        Color32::from_rgba_unmultiplied(253, 224, 71, 70),
        Stroke::new(1.0, Color32::from_rgba_unmultiplied(234, 179, 8, 120)),
    ));
}

pub(super) fn draw_projector(painter: &Painter, projector: Rect, active: bool) {
    let fill = if active {
        PROJECTOR_ACTIVE_FILL
    } else {
        PROJECTOR_FILL
    };
    painter.rect_filled(projector, 8.0, fill);
    painter.text(
        projector.center(),
        Align2::CENTER_CENTER,
        "Projector",
        FontId::proportional(12.0),
        Color32::WHITE,
    );
}

pub(super) fn draw_track_labels(painter: &Painter, stage: Rect, distance: f64) {
    let baseline = stage.bottom() - 14.0;
    let half = PROJECTOR_SIZE * 0.5;
    let start = stage.left() + half;
    let end = start + TRACK_LENGTH as f32;

    painter.line_segment(
        [Pos2::new(start, baseline - 12.0), Pos2::new(end, baseline - 12.0)],
        Stroke::new(1.0, LABEL_COLOR),
    );
    for (x, text) in [(start, "1 m"), (end, "10 m")] {
        painter.text(
            Pos2::new(x, baseline),
            Align2::CENTER_CENTER,
            text,
            FontId::monospace(11.0),
            LABEL_COLOR,
        );
    }

    painter.text(
        Pos2::new(stage.left() + 12.0, stage.top() + 14.0),
        Align2::LEFT_CENTER,
        format!("distance {distance:.2} m"),
        FontId::monospace(12.0),
        LABEL_COLOR,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage() -> Rect {
        Rect::from_min_size(Pos2::new(10.0, 20.0), vec2(800.0, STAGE_HEIGHT))
    }

    #[test]
    fn test_screen_strip_is_right_quarter() {
        let strip = screen_strip(stage());
        assert_eq!(strip.width(), 200.0);
        assert_eq!(strip.right(), stage().right());
        assert_eq!(strip.height(), STAGE_HEIGHT);
    }

    #[test]
    fn test_projector_follows_drag_position() {
        let at_start = projector_rect(stage(), 0);
        let at_end = projector_rect(stage(), TRACK_LENGTH);
        assert_eq!(at_start.left(), 10.0);
        assert_eq!(at_end.left(), 210.0);
        assert_eq!(at_end.center().y, stage().center().y);
        assert_eq!(at_end.size(), Vec2::splat(PROJECTOR_SIZE));
    }

    #[test]
    fn test_stage_never_overlaps_handle_travel() {
        let width = stage_width(100.0);
        let stage = Rect::from_min_size(Pos2::ZERO, vec2(width, STAGE_HEIGHT));
        let furthest = projector_rect(stage, TRACK_LENGTH);
        assert!(furthest.right() <= screen_strip(stage).left());
        assert_eq!(stage_width(1200.0), 1200.0);
    }
}
