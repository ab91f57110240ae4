//! Per-pixel blend modes.
//!
//! A blend mode combines a foreground color with a background color. Modes
//! are selected by name; unknown names fall back to [`BlendMode::NoBlend`],
//! which passes the foreground through untouched. This lenient lookup differs
//! from crop argument parsing, which rejects bad input outright.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::color::Color;

/// Opacity used when `transparency` is selected by name.
pub const DEFAULT_TRANSPARENCY: f64 = 0.5;

/// A pure `(foreground, background) -> color` combinator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BlendMode {
    /// Channel-wise `fg * bg / 255`. Darkens.
    Multiply,
    /// `fg * factor + bg * (1 - factor)`, channel-wise.
    Transparency { factor: f64 },
    /// Returns the foreground unchanged.
    NoBlend,
}

impl BlendMode {
    /// Names accepted by [`BlendMode::parse`].
    pub const NAMES: [&'static str; 2] = ["multiply", "transparency"];

    /// Transparency with the factor clamped to `[0, 1]`. NaN is treated as 0.
    pub fn transparency(factor: f64) -> Self {
        let factor = if factor.is_nan() {
            0.0
        } else {
            factor.clamp(0.0, 1.0)
        };
        BlendMode::Transparency { factor }
    }

    /// Look up a mode by name. Never fails.
    pub fn parse(name: &str) -> Self {
        match name {
            "multiply" => BlendMode::Multiply,
            "transparency" => BlendMode::transparency(DEFAULT_TRANSPARENCY),
            other => {
                warn!(mode = other, "unknown blend mode, passing foreground through");
                BlendMode::NoBlend
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BlendMode::Multiply => "multiply",
            BlendMode::Transparency { .. } => "transparency",
            BlendMode::NoBlend => "none",
        }
    }

    #[inline]
    pub fn combine(&self, fg: Color, bg: Color) -> Color {
        match *self {
            BlendMode::Multiply => Color::multiply_blend(fg, bg),
            BlendMode::Transparency { factor } => fg * factor + bg * (1.0 - factor),
            BlendMode::NoBlend => fg,
        }
    }
}

impl FromStr for BlendMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(BlendMode::parse(s))
    }
}
