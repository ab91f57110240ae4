//! Saturating RGB color values.
//!
//! Every channel is held in `0..=255`. Construction and all arithmetic clamp
//! out-of-range results to the nearest bound instead of wrapping.
//!
//! # Packed Representation
//!
//! Codec boundaries exchange colors as 24-bit integers laid out as
//! `0x00RRGGBB` (red in bits 16-23, green in bits 8-15, blue in bits 0-7).

use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// An immutable 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

#[inline]
fn clamp_channel(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Create a color, clamping each channel independently to `0..=255`.
    pub fn new(red: i32, green: i32, blue: i32) -> Self {
        Self {
            red: clamp_channel(red as i64),
            green: clamp_channel(green as i64),
            blue: clamp_channel(blue as i64),
        }
    }

    /// Create a color from channels that are already in range.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    #[inline]
    pub fn red(self) -> u8 {
        self.red
    }

    #[inline]
    pub fn green(self) -> u8 {
        self.green
    }

    #[inline]
    pub fn blue(self) -> u8 {
        self.blue
    }

    /// Multiply every channel by `factor`, truncating toward zero before clamping.
    pub fn scale(self, factor: f64) -> Self {
        // `as i64` truncates toward zero and maps NaN to 0.
        let scale = |c: u8| clamp_channel((c as f64 * factor) as i64);
        Self {
            red: scale(self.red),
            green: scale(self.green),
            blue: scale(self.blue),
        }
    }

    /// Multiply blend: each channel becomes `floor(fg * bg / 255)`.
    ///
    /// White is the identity and black is absorbing.
    pub fn multiply_blend(fg: Color, bg: Color) -> Color {
        let mul = |a: u8, b: u8| clamp_channel((a as i64 * b as i64) / 255);
        Color {
            red: mul(fg.red, bg.red),
            green: mul(fg.green, bg.green),
            blue: mul(fg.blue, bg.blue),
        }
    }

    /// Pack into a `0x00RRGGBB` integer.
    #[inline]
    pub fn to_packed(self) -> u32 {
        ((self.red as u32) << 16) | ((self.green as u32) << 8) | self.blue as u32
    }

    /// Unpack from a `0x00RRGGBB` integer. The upper byte is ignored.
    #[inline]
    pub fn from_packed(value: u32) -> Self {
        Self {
            red: ((value >> 16) & 0xFF) as u8,
            green: ((value >> 8) & 0xFF) as u8,
            blue: (value & 0xFF) as u8,
        }
    }

    /// Channels as an `[r, g, b]` byte triple.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl Add for Color {
    type Output = Color;

    /// Per-channel saturating sum.
    fn add(self, other: Color) -> Color {
        Color {
            red: self.red.saturating_add(other.red),
            green: self.green.saturating_add(other.green),
            blue: self.blue.saturating_add(other.blue),
        }
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, factor: f64) -> Color {
        self.scale(factor)
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Color::rgb(red, green, blue)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn color_strategy() -> impl Strategy<Value = Color> {
        (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::rgb(r, g, b))
    }

    proptest! {
        /// Property: construction clamps each channel to the nearest bound.
        #[test]
        fn prop_new_clamps(r in any::<i32>(), g in any::<i32>(), b in any::<i32>()) {
            let c = Color::new(r, g, b);
            prop_assert_eq!(c.red() as i32, r.clamp(0, 255));
            prop_assert_eq!(c.green() as i32, g.clamp(0, 255));
            prop_assert_eq!(c.blue() as i32, b.clamp(0, 255));
        }

        /// Property: multiply blend with white is the identity.
        #[test]
        fn prop_multiply_white_identity(c in color_strategy()) {
            prop_assert_eq!(Color::multiply_blend(c, Color::WHITE), c);
            prop_assert_eq!(Color::multiply_blend(Color::WHITE, c), c);
        }

        /// Property: multiply blend with black yields black.
        #[test]
        fn prop_multiply_black_absorbs(c in color_strategy()) {
            prop_assert_eq!(Color::multiply_blend(c, Color::BLACK), Color::BLACK);
        }

        /// Property: packing is lossless.
        #[test]
        fn prop_packed_round_trip(c in color_strategy()) {
            prop_assert_eq!(Color::from_packed(c.to_packed()), c);
            prop_assert!(c.to_packed() <= 0x00FF_FFFF);
        }

        /// Property: saturating add never drops below either operand.
        #[test]
        fn prop_add_monotonic(a in color_strategy(), b in color_strategy()) {
            let sum = a + b;
            prop_assert!(sum.red() >= a.red().max(b.red()));
            prop_assert!(sum.green() >= a.green().max(b.green()));
            prop_assert!(sum.blue() >= a.blue().max(b.blue()));
        }
    }
}
