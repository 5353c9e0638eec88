use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown resolution {0:?} (expected one of WUXGA, FHD, UHD, 4K)")]
pub struct UnknownResolution(pub String);

impl Resolution {
    pub const WUXGA: Self = Self::new("WUXGA", 1920, 1200);
    pub const FHD: Self = Self::new("FHD", 1920, 1080);
    pub const UHD: Self = Self::new("UHD", 3840, 2160);
    pub const DCI_4K: Self = Self::new("4K", 4096, 2160);

    /// Selectable panels, in dropdown order. The first entry is the default.
    pub const PRESETS: [Self; 4] = [Self::WUXGA, Self::FHD, Self::UHD, Self::DCI_4K];

    const fn new(name: &'static str, width: u32, height: u32) -> Self {
        Self {
            name,
            width,
            height,
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::PRESETS
            .iter()
            .copied()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
    }

    /// Dropdown semantics: anything unrecognised lands on the first preset.
    pub fn select(name: &str) -> Self {
        Self::by_name(name).unwrap_or(Self::PRESETS[0])
    }

    /// Height over width of the pixel grid.
    pub fn aspect(self) -> f64 {
        f64::from(self.height) / f64::from(self.width)
    }

    pub fn dimensions(self) -> String {
        format!("{}x{}", self.width, self.height)
    }

    pub fn label(self) -> String {
        format!("{} ({})", self.name, self.dimensions())
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::PRESETS[0]
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl FromStr for Resolution {
    type Err = UnknownResolution;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::by_name(value).ok_or_else(|| UnknownResolution(value.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_order_and_dimensions() {
        let names = Resolution::PRESETS.map(|preset| preset.name);
        assert_eq!(names, ["WUXGA", "FHD", "UHD", "4K"]);
        assert_eq!(Resolution::default(), Resolution::WUXGA);
        assert_eq!(Resolution::DCI_4K.dimensions(), "4096x2160");
        assert_eq!(Resolution::FHD.label(), "FHD (1920x1080)");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(Resolution::by_name("uhd"), Some(Resolution::UHD));
        assert_eq!(Resolution::by_name(" 4k "), Some(Resolution::DCI_4K));
        assert_eq!(Resolution::by_name("8K"), None);
    }

    #[test]
    fn test_select_falls_back_to_first_preset() {
        assert_eq!(Resolution::select("FHD"), Resolution::FHD);
        assert_eq!(Resolution::select("VGA"), Resolution::WUXGA);
    }

    #[test]
    fn test_from_str_reports_unknown_name() {
        assert_eq!("fhd".parse::<Resolution>(), Ok(Resolution::FHD));
        let error = "SVGA".parse::<Resolution>().unwrap_err();
        assert_eq!(error, UnknownResolution("SVGA".to_owned()));
        assert!(error.to_string().contains("SVGA"));
    }
}
