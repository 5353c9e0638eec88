use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseFieldError {
    #[error("field is empty")]
    Empty,
    #[error("{0:?} is not a number")]
    NotANumber(String),
    #[error("{0:?} is not a finite number")]
    NotFinite(String),
}

pub fn parse_field(text: &str) -> Result<f64, ParseFieldError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseFieldError::Empty);
    }

    let value = trimmed
        .parse::<f64>()
        .map_err(|_| ParseFieldError::NotANumber(trimmed.to_owned()))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseFieldError::NotFinite(trimmed.to_owned()))
    }
}

/// Text-box semantics: anything that does not parse counts as zero.
pub fn parse_field_or_zero(text: &str) -> f64 {
    parse_field(text).unwrap_or_else(|error| {
        log::debug!("coercing numeric input to 0: {error}");
        0.0
    })
}

pub fn format_field(value: f64) -> String {
    format!("{value}")
}
