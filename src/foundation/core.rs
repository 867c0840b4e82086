use crate::foundation::error::{ChartError, ChartResult};

pub use kurbo::Rect;

/// Calendar year of an observation.
pub type Year = i32;

/// Inclusive year bounds `[min, max]` of a loaded data set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct YearRange {
    /// First year with data.
    pub min: Year,
    /// Last year with data.
    pub max: Year,
}

impl YearRange {
    /// Create a validated range with `min <= max`.
    pub fn new(min: Year, max: Year) -> ChartResult<Self> {
        if min > max {
            return Err(ChartError::validation("YearRange min must be <= max"));
        }
        Ok(Self { min, max })
    }

    /// Clamp an arbitrary (possibly far out of range) year into `[min, max]`.
    pub fn clamp(self, year: i64) -> Year {
        year.clamp(i64::from(self.min), i64::from(self.max)) as Year
    }

    /// Return `true` when `year` is inside `[min, max]`.
    pub fn contains(self, year: Year) -> bool {
        self.min <= year && year <= self.max
    }

    /// Number of years covered, counting both ends.
    pub fn len_years(self) -> u32 {
        (i64::from(self.max) - i64::from(self.min) + 1) as u32
    }
}

/// Absolute 0-based frame index in an exported video.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> ChartResult<Self> {
        if den == 0 {
            return Err(ChartError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(ChartError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Number of whole frames covering `millis` milliseconds, at least one.
    pub fn frames_for_millis(self, millis: u64) -> u64 {
        ((millis as f64) / 1000.0 * self.as_f64()).round().max(1.0) as u64
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Opaque sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn parse_hex(s: &str) -> ChartResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return Err(ChartError::validation(format!(
                "hex color must be #RRGGBB, got \"{s}\""
            )));
        }

        fn hex_byte(pair: &str) -> ChartResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| ChartError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        Ok(Self {
            r: hex_byte(&s[0..2])?,
            g: hex_byte(&s[2..4])?,
            b: hex_byte(&s[4..6])?,
        })
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn lerp(self, other: Self, t: f64) -> Self {
        fn mix(a: u8, b: u8, t: f64) -> u8 {
            (f64::from(a) + (f64::from(b) - f64::from(a)) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        }
        let t = t.clamp(0.0, 1.0);
        Self {
            r: mix(self.r, other.r, t),
            g: mix(self.g, other.g, t),
            b: mix(self.b, other.b, t),
        }
    }
}

impl serde::Serialize for Rgb8 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgb8 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_range_clamps_far_out_of_range_input() {
        let r = YearRange::new(2000, 2010).unwrap();
        assert_eq!(r.clamp(i64::MIN), 2000);
        assert_eq!(r.clamp(i64::MAX), 2010);
        assert_eq!(r.clamp(2005), 2005);
        assert_eq!(r.len_years(), 11);
        assert!(YearRange::new(2001, 2000).is_err());
    }

    #[test]
    fn fps_frames_for_millis_rounds_and_floors_at_one() {
        let fps = Fps::new(30, 1).unwrap();
        assert_eq!(fps.frames_for_millis(500), 15);
        assert_eq!(fps.frames_for_millis(0), 1);
        assert!(Fps::new(0, 1).is_err());
        assert!(Fps::new(1, 0).is_err());
    }

    #[test]
    fn rgb_hex_parse_and_format() {
        let c = Rgb8::parse_hex("#08306B").unwrap();
        assert_eq!(c, Rgb8::new(0x08, 0x30, 0x6b));
        assert_eq!(c.to_hex(), "#08306b");
        assert!(Rgb8::parse_hex("#fff").is_err());
        assert!(Rgb8::parse_hex("#gg0000").is_err());

        let c: Rgb8 = serde_json::from_str("\"ffffff\"").unwrap();
        assert_eq!(c, Rgb8::new(255, 255, 255));
    }
}
