//! CSS box shorthand (`padding`, `margin`, `border-width`, `border-radius`).
//!
//! Parsing expands 1–4 tokens to four sides. Formatting compresses back:
//! all sides equal emits one value, `top == bottom && right == left` emits
//! two, anything else emits four in `top right bottom left` order.
//!
//! The unit is taken from the first token and shared by all sides.

use std::fmt;

use crate::length::{format_number, Length, LengthUnit};

/// A box side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// `"top"`, `"right"`, `"bottom"` or `"left"`, case-insensitive.
    pub fn from_name(name: &str) -> Option<Side> {
        match name.trim().to_ascii_lowercase().as_str() {
            "top" => Some(Side::Top),
            "right" => Some(Side::Right),
            "bottom" => Some(Side::Bottom),
            "left" => Some(Side::Left),
            _ => None,
        }
    }
}

/// Per-side values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sides<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Copy> Sides<T> {
    pub fn uniform(v: T) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    pub fn get(&self, side: Side) -> T {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    pub fn set(&mut self, side: Side, v: T) {
        match side {
            Side::Top => self.top = v,
            Side::Right => self.right = v,
            Side::Bottom => self.bottom = v,
            Side::Left => self.left = v,
        }
    }
}

impl<T: PartialEq> Sides<T> {
    pub fn all_equal(&self) -> bool {
        self.top == self.right && self.right == self.bottom && self.bottom == self.left
    }

    pub fn axes_equal(&self) -> bool {
        self.top == self.bottom && self.right == self.left
    }
}

/// Four side magnitudes sharing one unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoxShorthand {
    pub sides: Sides<f64>,
    pub unit: LengthUnit,
}

impl BoxShorthand {
    pub fn new(sides: Sides<f64>, unit: LengthUnit) -> Self {
        Self { sides, unit }
    }

    /// Parse a shorthand string. Never fails.
    ///
    /// Three tokens follow CSS (`top horizontal bottom`). Empty input or more
    /// than four tokens yield `0px` on every side.
    pub fn parse(s: &str) -> Self {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let unit = tokens
            .first()
            .and_then(|t| Length::try_parse(t))
            .map(|len| len.unit)
            .unwrap_or_default();
        let m: Vec<f64> = tokens.iter().map(|t| Length::parse(t).magnitude).collect();

        let sides = match m.as_slice() {
            [all] => Sides::uniform(*all),
            [vertical, horizontal] => Sides {
                top: *vertical,
                right: *horizontal,
                bottom: *vertical,
                left: *horizontal,
            },
            [top, horizontal, bottom] => Sides {
                top: *top,
                right: *horizontal,
                bottom: *bottom,
                left: *horizontal,
            },
            [top, right, bottom, left] => Sides {
                top: *top,
                right: *right,
                bottom: *bottom,
                left: *left,
            },
            _ => {
                if !tokens.is_empty() {
                    tracing::warn!(value = s, "shorthand has too many tokens, using 0px");
                }
                return Self::default();
            }
        };

        Self { sides, unit }
    }

    /// Number of tokens [`fmt::Display`] will emit.
    pub fn token_count(&self) -> usize {
        if self.sides.all_equal() {
            1
        } else if self.sides.axes_equal() {
            2
        } else {
            4
        }
    }

    fn token(&self, v: f64) -> String {
        format!("{}{}", format_number(v), self.unit)
    }
}

impl fmt::Display for BoxShorthand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.sides;
        match self.token_count() {
            1 => f.write_str(&self.token(s.top)),
            2 => write!(f, "{} {}", self.token(s.top), self.token(s.right)),
            _ => write!(
                f,
                "{} {} {} {}",
                self.token(s.top),
                self.token(s.right),
                self.token(s.bottom),
                self.token(s.left)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn test_side_from_name() {
        assert_eq!(Side::from_name("Right"), Some(Side::Right));
        assert_eq!(Side::from_name(" bottom "), Some(Side::Bottom));
        assert_eq!(Side::from_name("middle"), None);
    }

    #[test]
    fn test_parse_single() {
        let b = BoxShorthand::parse("10px");
        assert_eq!(b.sides, Sides::uniform(10.0));
        assert_eq!(b.unit, LengthUnit::Px);
    }

    #[test]
    fn test_parse_two() {
        let b = BoxShorthand::parse("8px 12px");
        assert_eq!(
            b.sides,
            Sides {
                top: 8.0,
                right: 12.0,
                bottom: 8.0,
                left: 12.0
            }
        );
    }

    #[test]
    fn test_parse_three() {
        let b = BoxShorthand::parse("1em 2em 3em");
        assert_eq!(
            b.sides,
            Sides {
                top: 1.0,
                right: 2.0,
                bottom: 3.0,
                left: 2.0
            }
        );
        assert_eq!(b.unit, LengthUnit::Em);
    }

    #[test]
    fn test_parse_four() {
        let b = BoxShorthand::parse("1px 2px 3px 4px");
        assert_eq!(
            b.sides,
            Sides {
                top: 1.0,
                right: 2.0,
                bottom: 3.0,
                left: 4.0
            }
        );
    }

    #[test]
    fn test_parse_unit_from_first_token() {
        let b = BoxShorthand::parse("2rem 4px");
        assert_eq!(b.unit, LengthUnit::Rem);
        assert_eq!(b.to_string(), "2rem 4rem");
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(BoxShorthand::parse("auto"), BoxShorthand::default());
        assert_eq!(BoxShorthand::parse(""), BoxShorthand::default());
        assert_eq!(BoxShorthand::parse("1px 2px 3px 4px 5px"), BoxShorthand::default());
    }

    // =========================================================================
    // Compression
    // =========================================================================

    #[test]
    fn test_format_compresses_equal_sides() {
        assert_eq!(BoxShorthand::parse("5px 5px 5px 5px").to_string(), "5px");
    }

    #[test]
    fn test_format_compresses_axes() {
        assert_eq!(BoxShorthand::parse("4px 8px 4px 8px").to_string(), "4px 8px");
    }

    #[test]
    fn test_format_four() {
        let b = BoxShorthand::new(
            Sides {
                top: 10.0,
                right: 5.0,
                bottom: 10.0,
                left: 10.0,
            },
            LengthUnit::Px,
        );
        assert_eq!(b.to_string(), "10px 5px 10px 10px");
    }

    #[test]
    fn test_format_large_magnitude() {
        let parsed = BoxShorthand::parse("99999999999999999999px");
        let formatted = parsed.to_string();
        assert_eq!(formatted, "100000000000000000000px");
        assert_eq!(BoxShorthand::parse(&formatted), parsed);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(BoxShorthand::parse("50%").to_string(), "50%");
    }

    // =========================================================================
    // Properties
    // =========================================================================

    fn unit_strategy() -> impl Strategy<Value = &'static str> {
        prop_oneof![Just("px"), Just("em"), Just("rem"), Just("%")]
    }

    fn shorthand_strategy() -> impl Strategy<Value = String> {
        (
            prop::collection::vec(0u16..500, 1..=4).prop_filter("1, 2 or 4 tokens", |v| {
                v.len() != 3
            }),
            unit_strategy(),
        )
            .prop_map(|(values, unit)| {
                values
                    .iter()
                    .map(|v| format!("{v}{unit}"))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
    }

    proptest! {
        #[test]
        fn test_reformat_preserves_sides(input in shorthand_strategy()) {
            let parsed = BoxShorthand::parse(&input);
            let reparsed = BoxShorthand::parse(&parsed.to_string());
            prop_assert_eq!(parsed.sides, reparsed.sides);
            prop_assert_eq!(parsed.unit, reparsed.unit);
        }

        #[test]
        fn test_format_is_canonical(input in shorthand_strategy()) {
            let once = BoxShorthand::parse(&input).to_string();
            let twice = BoxShorthand::parse(&once).to_string();
            prop_assert_eq!(once, twice);
        }
    }
}
