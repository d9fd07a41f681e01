//! Grid coordinates and destination-code decoding.
//!
//! Destinations are written as compass codes: `N3E12` is 3 blocks north and
//! 12 blocks east of the origin.  Each letter (`N`, `S`, `E`, `W`, any case)
//! must be followed by at least one digit; an axis that is never mentioned
//! stays at 0.  `S1W2` therefore decodes to `(x = -2, y = -1)`.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

/// An integer grid position.  `x` grows east, `y` grows north.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

#[derive(Copy, Clone)]
enum Axis {
    X,
    Y,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Taxicab distance in grid steps.
    #[inline]
    pub fn manhattan(self, other: Coordinate) -> u64 {
        (self.x as i64 - other.x as i64).unsigned_abs()
            + (self.y as i64 - other.y as i64).unsigned_abs()
    }

    /// Decode a compass destination code such as `"S1E2"`.
    pub fn decode(code: &str) -> CoreResult<Coordinate> {
        let err = |reason: String| CoreError::Destination {
            code: code.to_owned(),
            reason,
        };

        if code.is_empty() {
            return Err(err("empty code".into()));
        }

        let mut x: Option<i32> = None;
        let mut y: Option<i32> = None;
        let mut chars = code.chars().peekable();

        while let Some(letter) = chars.next() {
            let (axis, sign) = match letter.to_ascii_uppercase() {
                'N' => (Axis::Y, 1),
                'S' => (Axis::Y, -1),
                'E' => (Axis::X, 1),
                'W' => (Axis::X, -1),
                other => return Err(err(format!("unexpected character {other:?}"))),
            };

            let mut magnitude: i32 = 0;
            let mut digits = 0usize;
            while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                magnitude = magnitude
                    .checked_mul(10)
                    .and_then(|m| m.checked_add(d as i32))
                    .ok_or_else(|| err(format!("magnitude after {letter:?} is too large")))?;
                digits += 1;
                chars.next();
            }
            if digits == 0 {
                return Err(err(format!("direction {letter:?} has no magnitude")));
            }

            let slot = match axis {
                Axis::X => &mut x,
                Axis::Y => &mut y,
            };
            if slot.is_some() {
                return Err(err(format!("axis of {letter:?} given more than once")));
            }
            *slot = Some(sign * magnitude);
        }

        Ok(Coordinate {
            x: x.unwrap_or(0),
            y: y.unwrap_or(0),
        })
    }
}

impl FromStr for Coordinate {
    type Err = CoreError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Coordinate::decode(code)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
