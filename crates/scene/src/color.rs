use serde::{Deserialize, Serialize};

/// 8-bit RGB color shared by bodies, comet tails and nebulae
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    // Tanner Helland blackbody curve fit, valid roughly 1000K-40000K.
    // Reference: https://tannerhelland.com/2012/09/18/convert-temperature-rgb-algorithm-code.html
    const RED_COEFF: f64 = 329.698727446;
    const RED_EXP: f64 = -0.1332047592;
    const GREEN_COOL_COEFF: f64 = 99.4708025861;
    const GREEN_COOL_OFFSET: f64 = -161.1195681661;
    const GREEN_HOT_COEFF: f64 = 288.1221695283;
    const GREEN_HOT_EXP: f64 = -0.0755148492;
    const BLUE_COEFF: f64 = 138.5177312231;
    const BLUE_OFFSET: f64 = -305.0447927307;

    /// Curve break points, in units of temp/100
    const TEMP_HOT_THRESHOLD: f64 = 66.0;
    const TEMP_BLUE_CUTOFF: f64 = 19.0;

    /// Pulls channels toward their mean; stars read whiter than raw blackbody
    const DESATURATION_BLEND: f64 = 0.3;

    const MIN_TEMP: f64 = 1000.0;
    const MAX_TEMP: f64 = 40000.0;

    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Approximate the color of a blackbody at `temperature` Kelvin.
    ///
    /// Temperatures outside 1000K-40000K are clamped.
    pub fn from_temperature(temperature: f64) -> Self {
        let temp = temperature.clamp(Self::MIN_TEMP, Self::MAX_TEMP) / 100.0;

        let r = match temp {
            t if t <= Self::TEMP_HOT_THRESHOLD => 255.0,
            t => (Self::RED_COEFF * (t - 60.0).powf(Self::RED_EXP)).clamp(0.0, 255.0),
        };

        let g = match temp {
            t if t <= Self::TEMP_HOT_THRESHOLD => {
                (Self::GREEN_COOL_COEFF * t.ln() + Self::GREEN_COOL_OFFSET).clamp(0.0, 255.0)
            }
            t => (Self::GREEN_HOT_COEFF * (t - 60.0).powf(Self::GREEN_HOT_EXP)).clamp(0.0, 255.0),
        };

        let b = match temp {
            t if t >= Self::TEMP_HOT_THRESHOLD => 255.0,
            t if t <= Self::TEMP_BLUE_CUTOFF => 0.0,
            t => (Self::BLUE_COEFF * (t - 10.0).ln() + Self::BLUE_OFFSET).clamp(0.0, 255.0),
        };

        let avg = (r + g + b) / 3.0;
        Self::from_channels(
            r + (avg - r) * Self::DESATURATION_BLEND,
            g + (avg - g) * Self::DESATURATION_BLEND,
            b + (avg - b) * Self::DESATURATION_BLEND,
        )
    }

    /// Build a color from float channels, rounding and clamping to `0..=255`.
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        let channel = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }

    /// Linear interpolation; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| a as f64 + (b as f64 - a as f64) * t;
        Self::from_channels(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }

    /// Shift each channel by the given amount, saturating at the bounds.
    pub fn offset(self, dr: f64, dg: f64, db: f64) -> Self {
        Self::from_channels(
            self.r as f64 + dr,
            self.g as f64 + dg,
            self.b as f64 + db,
        )
    }

    /// Returns the color as a hex string (e.g., "#FF9944")
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
