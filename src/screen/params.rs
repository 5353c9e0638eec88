use serde::Serialize;

use super::Resolution;

/// Numeric inputs that can be edited directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamField {
    Distance,
    Lumens,
    ThrowRatio,
}

impl ParamField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Distance => "Distance (m)",
            Self::Lumens => "Lumens",
            Self::ThrowRatio => "Throw Ratio",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct InputParameters {
    /// Projector-to-screen distance in meters.
    pub distance: f64,
    pub lumens: f64,
    pub resolution: Resolution,
    pub throw_ratio: f64,
}

impl InputParameters {
    pub fn get(&self, field: ParamField) -> f64 {
        match field {
            ParamField::Distance => self.distance,
            ParamField::Lumens => self.lumens,
            ParamField::ThrowRatio => self.throw_ratio,
        }
    }

    #[must_use]
    pub fn with_field(self, field: ParamField, value: f64) -> Self {
        match field {
            ParamField::Distance => Self {
                distance: value,
                ..self
            },
            ParamField::Lumens => Self {
                lumens: value,
                ..self
            },
            ParamField::ThrowRatio => Self {
                throw_ratio: value,
                ..self
            },
        }
    }

    #[must_use]
    pub fn with_resolution(self, resolution: Resolution) -> Self {
        Self { resolution, ..self }
    }
}

impl Default for InputParameters {
    fn default() -> Self {
        Self {
            distance: 5.0,
            lumens: 3000.0,
            resolution: Resolution::default(),
            throw_ratio: 1.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = InputParameters::default();
        assert_eq!(params.distance, 5.0);
        assert_eq!(params.lumens, 3000.0);
        assert_eq!(params.resolution, Resolution::WUXGA);
        assert_eq!(params.throw_ratio, 1.5);
    }

    #[test]
    fn test_with_field_replaces_only_that_field() {
        let base = InputParameters::default();
        let edited = base.with_field(ParamField::Lumens, 4200.0);
        assert_eq!(edited.lumens, 4200.0);
        assert_eq!(edited.get(ParamField::Lumens), 4200.0);
        assert_eq!(edited.distance, base.distance);
        assert_eq!(edited.throw_ratio, base.throw_ratio);
        assert_eq!(edited.resolution, base.resolution);

        let edited = edited.with_resolution(Resolution::UHD);
        assert_eq!(edited.resolution, Resolution::UHD);
        assert_eq!(edited.lumens, 4200.0);
    }
}
