mod metrics;
mod params;
mod report;
mod resolution;

pub use metrics::{DerivedMetrics, compute};
pub use params::{InputParameters, ParamField};
pub use report::{Report, metric_rows};
pub use resolution::Resolution;
