//! Per-side editing state behind the spacing and border controls.
//!
//! Holds four magnitudes, a shared unit and a linked flag. Every edit returns
//! the compressed shorthand string to store back on the style.

use crate::length::LengthUnit;
use crate::shorthand::{BoxShorthand, Side, Sides};

#[derive(Debug, Clone, PartialEq)]
pub struct SpacingEditor {
    linked: bool,
    shorthand: BoxShorthand,
}

impl SpacingEditor {
    /// Load from a stored shorthand. A single-token value starts linked.
    pub fn from_value(value: &str) -> Self {
        let tokens = value.split_whitespace().count();
        Self {
            linked: tokens <= 1,
            shorthand: BoxShorthand::parse(value),
        }
    }

    pub fn is_linked(&self) -> bool {
        self.linked
    }

    pub fn unit(&self) -> &LengthUnit {
        &self.shorthand.unit
    }

    pub fn sides(&self) -> Sides<f64> {
        self.shorthand.sides
    }

    pub fn get(&self, side: Side) -> f64 {
        self.shorthand.sides.get(side)
    }

    /// Current shorthand string.
    pub fn value(&self) -> String {
        self.shorthand.to_string()
    }

    /// Flip between editing all sides together and individually.
    ///
    /// Does not touch the values; linking takes effect on the next edit.
    pub fn toggle_linked(&mut self) {
        self.linked = !self.linked;
    }

    /// Set one side, or all four when linked.
    pub fn set_side(&mut self, side: Side, magnitude: f64) -> String {
        let magnitude = if magnitude.is_finite() && magnitude >= 0.0 {
            magnitude
        } else {
            0.0
        };
        if self.linked {
            self.shorthand.sides = Sides::uniform(magnitude);
        } else {
            self.shorthand.sides.set(side, magnitude);
        }
        self.value()
    }

    /// Change the unit for every side, keeping magnitudes.
    pub fn set_unit(&mut self, unit: LengthUnit) -> String {
        self.shorthand.unit = unit;
        if self.linked {
            let top = self.shorthand.sides.top;
            self.shorthand.sides = Sides::uniform(top);
        }
        self.value()
    }
}
