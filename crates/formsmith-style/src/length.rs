//! Single length values (`12px`, `1.5rem`, `50%`).
//!
//! While editing, magnitude and unit are kept apart so either can change on
//! its own. At the model boundary they collapse back into one string.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Length unit. Units outside the editor's menu are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LengthUnit {
    #[default]
    Px,
    Em,
    Rem,
    Percent,
    Other(String),
}

impl LengthUnit {
    /// Units offered by the spacing editor.
    pub const MENU: [LengthUnit; 4] = [
        LengthUnit::Px,
        LengthUnit::Em,
        LengthUnit::Rem,
        LengthUnit::Percent,
    ];

    pub fn parse(s: &str) -> Self {
        match s {
            "px" => LengthUnit::Px,
            "em" => LengthUnit::Em,
            "rem" => LengthUnit::Rem,
            "%" => LengthUnit::Percent,
            other => LengthUnit::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Em => "em",
            LengthUnit::Rem => "rem",
            LengthUnit::Percent => "%",
            LengthUnit::Other(s) => s,
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A magnitude with its unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Length {
    pub magnitude: f64,
    pub unit: LengthUnit,
}

fn length_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d*\.?\d+)([A-Za-z]+|%)?$").expect("length pattern is valid")
    })
}

impl Length {
    pub fn new(magnitude: f64, unit: LengthUnit) -> Self {
        Self { magnitude, unit }
    }

    pub fn px(magnitude: f64) -> Self {
        Self::new(magnitude, LengthUnit::Px)
    }

    /// Strict parse: numeric prefix plus optional trailing unit.
    ///
    /// A bare number is taken as pixels.
    pub fn try_parse(s: &str) -> Option<Self> {
        let caps = length_pattern().captures(s.trim())?;
        let magnitude: f64 = caps.get(1)?.as_str().parse().ok()?;
        let unit = caps
            .get(2)
            .map(|m| LengthUnit::parse(m.as_str()))
            .unwrap_or_default();
        Some(Self { magnitude, unit })
    }

    /// Lenient parse. Malformed input resolves to `0px`.
    pub fn parse(s: &str) -> Self {
        match Self::try_parse(s) {
            Some(len) => len,
            None => {
                tracing::warn!(value = s, "unparseable length, using 0px");
                Self::default()
            }
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.magnitude), self.unit)
    }
}

/// Format a number. f64's Display already drops `.0` for integers and never
/// switches to exponent notation; only negative zero needs folding.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_large_magnitude_keeps_value() {
        let len = Length::parse("99999999999999999999px");
        assert_eq!(Length::parse(&len.to_string()), len);
    }

    #[test]
    fn test_parse_px() {
        assert_eq!(Length::parse("12px"), Length::px(12.0));
    }

    #[test]
    fn test_parse_decimal_rem() {
        assert_eq!(Length::parse("1.5rem"), Length::new(1.5, LengthUnit::Rem));
    }

    #[test]
    fn test_parse_leading_dot() {
        assert_eq!(Length::parse(".5em"), Length::new(0.5, LengthUnit::Em));
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!(Length::parse("50%"), Length::new(50.0, LengthUnit::Percent));
    }

    #[test]
    fn test_parse_bare_number_is_px() {
        assert_eq!(Length::parse("0"), Length::px(0.0));
        assert_eq!(Length::parse("16"), Length::px(16.0));
    }

    #[test]
    fn test_parse_other_unit_kept() {
        let len = Length::parse("10vh");
        assert_eq!(len.unit, LengthUnit::Other("vh".into()));
        assert_eq!(len.to_string(), "10vh");
    }

    #[test]
    fn test_malformed_falls_back_to_zero_px() {
        assert_eq!(Length::parse("auto"), Length::px(0.0));
        assert_eq!(Length::parse("-4px"), Length::px(0.0));
        assert_eq!(Length::parse(""), Length::px(0.0));
        assert_eq!(Length::try_parse("px12"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Length::px(12.0).to_string(), "12px");
        assert_eq!(Length::new(0.75, LengthUnit::Em).to_string(), "0.75em");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(3.25), "3.25");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }
}
