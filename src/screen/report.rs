use serde::Serialize;

use super::{DerivedMetrics, InputParameters};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MetricRow {
    pub label: &'static str,
    pub value: String,
}

impl MetricRow {
    fn measured(label: &'static str, value: f64, unit: &str) -> Self {
        Self {
            label,
            value: format!("{value:.2} {unit}"),
        }
    }
}

/// The result grid as displayed, in display order.
pub fn metric_rows(params: &InputParameters, metrics: &DerivedMetrics) -> Vec<MetricRow> {
    vec![
        MetricRow::measured("Screen Width", metrics.screen_width, "m"),
        MetricRow::measured("Screen Height", metrics.screen_height, "m"),
        MetricRow::measured("Surface Brightness (Lux)", metrics.lux, "lux"),
        MetricRow::measured("Surface Brightness (Nits)", metrics.nits, "nits"),
        MetricRow::measured("Pixel Size", metrics.pixel_size, "mm"),
        MetricRow {
            label: "Resolution",
            value: params.resolution.dimensions(),
        },
    ]
}

#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub parameters: InputParameters,
    pub metrics: DerivedMetrics,
    pub drag_position: i32,
    pub rows: Vec<MetricRow>,
}

impl Report {
    pub fn new(parameters: InputParameters, metrics: DerivedMetrics, drag_position: i32) -> Self {
        Self {
            rows: metric_rows(&parameters, &metrics),
            parameters,
            metrics,
            drag_position,
        }
    }
}
