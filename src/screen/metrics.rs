use std::f64::consts::PI;

use serde::Serialize;

use super::InputParameters;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct DerivedMetrics {
    /// Meters.
    pub screen_width: f64,
    /// Meters.
    pub screen_height: f64,
    pub lux: f64,
    pub nits: f64,
    /// Millimeters per pixel row.
    pub pixel_size: f64,
}

/// Derives screen geometry and brightness from `params`.
///
/// Degenerate inputs never produce NaN or infinities: a non-positive throw
/// ratio returns `previous` untouched, and a non-positive screen area updates
/// only width and height, carrying the photometric values over.
pub fn compute(params: &InputParameters, previous: &DerivedMetrics) -> DerivedMetrics {
    if params.throw_ratio <= 0.0 {
        log::debug!(
            "throw ratio {} is not positive; keeping previous metrics",
            params.throw_ratio
        );
        return *previous;
    }

    let screen_width = params.distance / params.throw_ratio;
    let screen_height = screen_width * params.resolution.aspect();
    let mut metrics = DerivedMetrics {
        screen_width,
        screen_height,
        ..*previous
    };

    let area = screen_width * screen_height;
    if area <= 0.0 {
        log::debug!("screen area {area} is not positive; brightness left unchanged");
        return metrics;
    }

    metrics.lux = params.lumens / area;
    // Lambertian screen approximation.
    metrics.nits = metrics.lux / PI;
    metrics.pixel_size = (screen_height * 1000.0) / f64::from(params.resolution.height);
    metrics
}
